use serde_json::{json, Map, Value};

use crate::classify::ACCESS_RECORD_TYPE;
use crate::types::{AccessIdentifier, NormalizedAccessRecord};

// Wire key
//------------------------------------------------------------------------------

/// Outgoing JSON key for scan submissions. The backend historically
/// accepted two spellings from two generations of the client; the adapter
/// is configured with whichever the deployment expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireKey {
    #[default]
    FormId,
    QrCodeData,
}

impl WireKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormId => "form_id",
            Self::QrCodeData => "qr_code_data",
        }
    }
}

// Payloads
//------------------------------------------------------------------------------

/// Body for the scan-lookup call: `{"<key>": "<identifier>"}`.
pub fn lookup_payload(key: WireKey, id: &AccessIdentifier) -> String {
    let mut body = Map::new();
    body.insert(key.as_str().to_owned(), Value::String(id.as_str().to_owned()));
    Value::Object(body).to_string()
}

/// Body for the guard's approve/deny confirmation call.
pub fn confirm_payload(key: WireKey, id: &AccessIdentifier, confirmed: bool) -> String {
    let mut body = Map::new();
    body.insert(key.as_str().to_owned(), Value::String(id.as_str().to_owned()));
    body.insert("confirmed".to_owned(), Value::Bool(confirmed));
    Value::Object(body).to_string()
}

/// Wraps a client-parsed record in the JSON wire shape under a
/// caller-supplied offline id, for submitting legacy passes that carry no
/// server-side identifier. Id generation stays with the caller so the
/// adapter is deterministic.
pub fn record_lookup_payload(record: &NormalizedAccessRecord, offline_id: &str) -> String {
    json!({
        "id": offline_id,
        "type": ACCESS_RECORD_TYPE,
        "visitor": record.visitor,
        "resident": record.resident,
        "created_at": record.created_at,
        "expires_at": record.expires_at,
    })
    .to_string()
}
