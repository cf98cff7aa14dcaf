use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};
use crate::extract::is_uuid_shaped;

// Access identifier
//------------------------------------------------------------------------------

/// Canonical UUID-shaped token keying a server-side access record.
///
/// Once constructed the identifier is opaque: it is compared by exact string
/// equality and never decomposed further. Construction goes through
/// [`AccessIdentifier::parse`], which enforces the 8-4-4-4-12 hexadecimal
/// shape (case-insensitive, original casing preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccessIdentifier(String);

impl AccessIdentifier {
    pub fn parse(raw: &str) -> ScanResult<Self> {
        if is_uuid_shaped(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(ScanError::InvalidIdentifier(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccessIdentifier {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.0)
    }
}

// Parties
//------------------------------------------------------------------------------

/// Visitor named on an access pass. Phone may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// Resident who issued the pass. Phone and apartment may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentInfo {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub apartment: String,
}

// Normalized access record
//------------------------------------------------------------------------------

/// Which parser produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    Json,
    LegacyText,
}

/// Structured result of parsing a full-content QR payload.
///
/// Records decoded client-side are the legacy offline path; the
/// authoritative record lives server-side and is keyed by an
/// [`AccessIdentifier`]. Timestamps stay as ISO-8601 text: they are wire
/// data, and only the validity evaluator interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedAccessRecord {
    pub visitor: Party,
    pub resident: ResidentInfo,
    pub created_at: String,
    pub expires_at: String,
    pub source_format: SourceFormat,
}

// Scan outcome
//------------------------------------------------------------------------------

/// Discriminated result handed to the API-calling layer.
///
/// `NotFound` is a normal outcome for non-Welqo QR content, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Identifier(AccessIdentifier),
    Record(NormalizedAccessRecord),
    NotFound,
}
