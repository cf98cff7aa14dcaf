//! # welqo-scan
//!
//! Guard-side interpretation of Welqo access-pass QR codes: decode a
//! scanned frame, classify the payload, and resolve it into either a
//! server-side access identifier or an offline access record.
//!
//! ## Features
//!
//! - **Frame decoding**: lift text and symbol corners out of raw RGBA
//!   frames or uploaded images
//! - **Content classification**: tag payloads as JSON records, legacy
//!   human-readable passes, or unstructured text before any parsing
//! - **Identifier extraction**: ordered heuristics that locate the
//!   canonical UUID-shaped identifier anywhere in a payload
//! - **Record parsing**: JSON and legacy-text access records normalized to
//!   one structure, with per-field failure reasons
//! - **Expiry evaluation**: fail-closed validity check over ISO-8601
//!   expiry timestamps
//!
//! ## Quick Start
//!
//! ### Interpreting decoded text
//!
//! ```rust
//! use welqo_scan::{interpret, ScanOutcome};
//!
//! # fn main() -> Result<(), welqo_scan::ScanError> {
//! let outcome = interpret("Form ID: 550e8400-e29b-41d4-a716-446655440000")?;
//! match outcome {
//!     ScanOutcome::Identifier(id) => println!("look up {id} server-side"),
//!     ScanOutcome::Record(record) => println!("offline pass for {}", record.visitor.name),
//!     ScanOutcome::NotFound => println!("not a Welqo code"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Scanning a frame
//!
//! ```rust,no_run
//! use welqo_scan::{scan_image, is_currently_valid, ScanOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("pass.png")?;
//! if let ScanOutcome::Record(record) = scan_image(&img)? {
//!     println!("window open: {}", is_currently_valid(&record.expires_at));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Outcomes
//!
//! A scan resolves to one of three outcomes: an [`AccessIdentifier`] to be
//! looked up server-side (the authoritative path), a client-parsed
//! [`NormalizedAccessRecord`] (the legacy offline path), or `NotFound` for
//! content this system does not own. Decode misses and unrecognized
//! content are normal outcomes, not errors; only a malformed record or an
//! ill-shaped extracted id is reported as a failure, with a reason string
//! the hosting application surfaces as it sees fit.

pub mod classify;
pub mod decoder;
mod error;
pub mod extract;
pub mod parse;
pub mod scan;
pub mod session;
pub mod types;
pub mod validity;
pub mod wire;

pub use classify::{classify, ContentKind};
pub use decoder::{decode_image, decode_rgba, Corners, DecodedSymbol};
pub use error::{ScanError, ScanResult};
pub use extract::{extract_identifier, is_uuid_shaped};
pub use parse::{parse_json_record, parse_legacy_record, record_to_json, DateFallback, LegacyParse};
pub use scan::{interpret, scan_image, scan_rgba};
pub use session::GuardSession;
pub use types::{
    AccessIdentifier, NormalizedAccessRecord, Party, ResidentInfo, ScanOutcome, SourceFormat,
};
pub use validity::{is_currently_valid, is_valid_at};
pub use wire::{confirm_payload, lookup_payload, record_lookup_payload, WireKey};
