use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

// UUID shape
//------------------------------------------------------------------------------

// 8-4-4-4-12 hexadecimal groups. Hex matching is case-insensitive
// everywhere; captures keep the original casing.
const UUID_SHAPE: &str = "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}";

static BARE_UUID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){}", UUID_SHAPE)).unwrap());

static EXACT_UUID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i)^{}$", UUID_SHAPE)).unwrap());

// Labeled prefixes the pass producer is known to print before an
// identifier, tried in this order. "Form ID:" must precede "ID:".
const ID_LABELS: [&str; 5] = ["Form ID:", "ID:", "Formulaire:", "Code:", "Référence:"];

static LABELED_UUIDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ID_LABELS
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i){}\s*({})", regex::escape(label), UUID_SHAPE)).unwrap()
        })
        .collect()
});

/// Whether `text` is exactly one UUID-shaped token, nothing else.
pub fn is_uuid_shaped(text: &str) -> bool {
    EXACT_UUID.is_match(text)
}

// Extraction
//------------------------------------------------------------------------------

/// Locates a canonical access identifier anywhere in raw decoded text.
///
/// Heuristics run in strict priority order, first match wins:
///
/// 1. structured payload: a JSON `form_id` field, then `id`, returned
///    verbatim (whatever string the producer put there);
/// 2. labeled prefixes (`Form ID:`, `ID:`, ...), in declared order;
/// 3. a bare UUID-shaped substring at any position;
/// 4. a line that, once trimmed, is exactly a UUID-shaped token.
///
/// `None` is the normal outcome for non-Welqo content. Because step 1
/// returns field values verbatim, callers must re-validate the result
/// (see [`AccessIdentifier::parse`](crate::AccessIdentifier::parse))
/// before treating it as usable.
pub fn extract_identifier(text: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        for key in ["form_id", "id"] {
            if let Some(id) = value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()) {
                debug!(key, "identifier lifted from structured payload");
                return Some(id.to_owned());
            }
        }
    }

    for pattern in LABELED_UUIDS.iter() {
        if let Some(caps) = pattern.captures(text) {
            debug!("identifier matched labeled prefix");
            return Some(caps[1].to_owned());
        }
    }

    if let Some(found) = BARE_UUID.find(text) {
        return Some(found.as_str().to_owned());
    }

    text.lines().map(str::trim).find(|line| EXACT_UUID.is_match(line)).map(str::to_owned)
}

#[cfg(test)]
mod extract_tests {
    use test_case::test_case;

    use super::{extract_identifier, is_uuid_shaped};

    const UUID_A: &str = "550e8400-e29b-41d4-a716-446655440000";
    const UUID_B: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn test_structured_form_id_wins_over_everything() {
        let text = format!(r#"{{"form_id":"{UUID_A}","note":"ID: {UUID_B}"}}"#);
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test]
    fn test_structured_id_fallback() {
        let text = format!(r#"{{"id":"{UUID_B}"}}"#);
        assert_eq!(extract_identifier(&text), Some(UUID_B.to_owned()));
    }

    #[test]
    fn test_structured_field_returned_verbatim() {
        // Not UUID-shaped; rejection is the caller's job.
        assert_eq!(
            extract_identifier(r#"{"form_id":"not-a-uuid"}"#),
            Some("not-a-uuid".to_owned())
        );
    }

    #[test]
    fn test_empty_structured_field_skipped() {
        let text = format!(r#"{{"form_id":"","id":"{UUID_A}"}}"#);
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test]
    fn test_labeled_prefix_beats_earlier_bare_uuid() {
        let text = format!("stray {UUID_B} first\nForm ID: {UUID_A}");
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test_case("Form ID"; "form id label")]
    #[test_case("ID"; "id label")]
    #[test_case("Formulaire"; "formulaire label")]
    #[test_case("Code"; "code label")]
    #[test_case("Référence"; "reference label")]
    fn test_each_label_recognized(label: &str) {
        let text = format!("Votre pass\n{label}: {UUID_A}\nMerci");
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test]
    fn test_bare_uuid_anywhere() {
        let text = format!("visitor pass ref {UUID_A} issued today");
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test]
    fn test_uppercase_uuid_case_preserved() {
        let upper = UUID_A.to_uppercase();
        let text = format!("ref {upper} here");
        assert_eq!(extract_identifier(&text), Some(upper));
    }

    #[test]
    fn test_trimmed_line_uuid() {
        let text = format!("Welqo pass\n   {UUID_A}   \nend");
        assert_eq!(extract_identifier(&text), Some(UUID_A.to_owned()));
    }

    #[test]
    fn test_no_identifier() {
        assert_eq!(extract_identifier("random text with no identifiers"), None);
    }

    #[test]
    fn test_shape_check_is_anchored() {
        assert!(is_uuid_shaped(UUID_A));
        assert!(is_uuid_shaped(&UUID_A.to_uppercase()));
        assert!(!is_uuid_shaped(&format!(" {UUID_A}")));
        assert!(!is_uuid_shaped(&format!("{UUID_A}x")));
        assert!(!is_uuid_shaped("not-a-uuid"));
    }
}
