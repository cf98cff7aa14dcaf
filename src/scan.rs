use image::DynamicImage;
use tracing::debug;

use crate::classify::{classify, ContentKind};
use crate::decoder::{decode_image, decode_rgba};
use crate::error::ScanResult;
use crate::extract::extract_identifier;
use crate::parse::{parse_json_record, parse_legacy_record};
use crate::types::{AccessIdentifier, ScanOutcome};

// Interpretation pipeline
//------------------------------------------------------------------------------

/// Interprets raw decoded QR text into a [`ScanOutcome`].
///
/// Identifier extraction runs first and is authoritative: the UUID shape is
/// the strongest pattern, and the identifier keys the server-side record.
/// Full-content parsing (JSON or legacy text) is the offline path for
/// payloads that embed a record instead of an identifier.
///
/// `NotFound` is a success value; the only errors are a malformed record
/// and an extracted id that fails the UUID shape re-check.
pub fn interpret(text: &str) -> ScanResult<ScanOutcome> {
    if text.trim().is_empty() {
        return Ok(ScanOutcome::NotFound);
    }

    if let Some(raw) = extract_identifier(text) {
        // Verbatim structured fields may carry anything; re-validate the
        // shape before accepting the id as usable.
        let id = AccessIdentifier::parse(&raw)?;
        debug!(%id, "scan resolved to access identifier");
        return Ok(ScanOutcome::Identifier(id));
    }

    let kind = classify(text);
    debug!(?kind, "no identifier found, dispatching on content kind");
    match kind {
        ContentKind::Json => Ok(ScanOutcome::Record(parse_json_record(text)?)),
        ContentKind::LegacyText => Ok(ScanOutcome::Record(parse_legacy_record(text)?.record)),
        ContentKind::Unstructured => Ok(ScanOutcome::NotFound),
    }
}

/// Full pipeline over a raw RGBA frame: decode, then [`interpret`].
///
/// A frame with no readable symbol is `NotFound`, never an error; the
/// caller retries with the next frame.
pub fn scan_rgba(width: u32, height: u32, rgba: &[u8]) -> ScanResult<ScanOutcome> {
    match decode_rgba(width, height, rgba) {
        Some(symbol) => interpret(&symbol.text),
        None => Ok(ScanOutcome::NotFound),
    }
}

/// Full pipeline over an uploaded image: decode, then [`interpret`].
pub fn scan_image(img: &DynamicImage) -> ScanResult<ScanOutcome> {
    match decode_image(img) {
        Some(symbol) => interpret(&symbol.text),
        None => Ok(ScanOutcome::NotFound),
    }
}
