mod json;
mod legacy;

pub use json::{parse_json_record, record_to_json};
pub use legacy::{parse_legacy_record, DateFallback, LegacyParse};
