use serde::{Deserialize, Serialize};

use crate::classify::ACCESS_RECORD_TYPE;
use crate::error::{ScanError, ScanResult};
use crate::types::{NormalizedAccessRecord, Party, ResidentInfo, SourceFormat};

// Wire shape
//------------------------------------------------------------------------------

// The producer-defined JSON encoding. Versionless and externally owned:
// unknown fields are ignored, required fields are never defaulted.
#[derive(Serialize, Deserialize)]
struct JsonRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    form_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    visitor: Party,
    resident: ResidentInfo,
    created_at: String,
    expires_at: String,
}

// Parsing
//------------------------------------------------------------------------------

/// Parses a JSON access record already classified as such.
///
/// Requires `visitor` and `resident` objects (each with at least a name)
/// and both timestamps. A missing required field fails with
/// [`ScanError::MalformedRecord`] naming the field; nothing is invented.
pub fn parse_json_record(text: &str) -> ScanResult<NormalizedAccessRecord> {
    let wire: JsonRecord =
        serde_json::from_str(text).map_err(|e| ScanError::MalformedRecord(e.to_string()))?;

    Ok(NormalizedAccessRecord {
        visitor: wire.visitor,
        resident: wire.resident,
        created_at: wire.created_at,
        expires_at: wire.expires_at,
        source_format: SourceFormat::Json,
    })
}

/// Serializes a record back into the producer's JSON encoding.
///
/// Feeding the output through the classifier and [`parse_json_record`]
/// reproduces the record.
pub fn record_to_json(record: &NormalizedAccessRecord) -> String {
    let wire = JsonRecord {
        kind: ACCESS_RECORD_TYPE.to_owned(),
        form_id: None,
        id: None,
        visitor: record.visitor.clone(),
        resident: record.resident.clone(),
        created_at: record.created_at.clone(),
        expires_at: record.expires_at.clone(),
    };
    serde_json::to_string(&wire).expect("record wire shape serializes")
}
