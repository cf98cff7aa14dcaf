use serde_json::Value;

// Content kind
//------------------------------------------------------------------------------

/// Encoding tag for decoded QR text. Classification is total: every input
/// maps to exactly one tag, and parse failures are deferred to the parser
/// that owns the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    LegacyText,
    Unstructured,
}

/// Discriminator value stamped on JSON access records by the pass producer.
pub(crate) const ACCESS_RECORD_TYPE: &str = "welqo_access";

// Marker substrings of the legacy human-readable export. Both must be
// present before the legacy parser is dispatched.
pub(crate) const RESIDENT_MARKER: &str = "Créé par (Résident)";
pub(crate) const VISITOR_MARKER: &str = "Pour le visiteur";

/// Tags raw decoded text with its encoding without consuming it.
///
/// JSON wins only when the text is well-formed JSON carrying the access
/// record discriminator and both party objects; a JSON payload without them
/// falls through like any other text.
pub fn classify(text: &str) -> ContentKind {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if value.get("type").and_then(Value::as_str) == Some(ACCESS_RECORD_TYPE)
            && value.get("visitor").is_some()
            && value.get("resident").is_some()
        {
            return ContentKind::Json;
        }
    }

    if text.contains(RESIDENT_MARKER) && text.contains(VISITOR_MARKER) {
        return ContentKind::LegacyText;
    }

    ContentKind::Unstructured
}

#[cfg(test)]
mod classify_tests {
    use test_case::test_case;

    use super::{classify, ContentKind};

    #[test]
    fn test_json_record() {
        let text = r#"{"type":"welqo_access","visitor":{"name":"A"},"resident":{"name":"B"}}"#;
        assert_eq!(classify(text), ContentKind::Json);
    }

    #[test_case(r#"{"type":"other","visitor":{},"resident":{}}"#; "wrong discriminator")]
    #[test_case(r#"{"type":"welqo_access","visitor":{}}"#; "missing resident")]
    #[test_case(r#"{"id":"550e8400-e29b-41d4-a716-446655440000"}"#; "bare id object")]
    #[test_case("null"; "json null")]
    fn test_json_without_discriminator_is_unstructured(text: &str) {
        assert_eq!(classify(text), ContentKind::Unstructured);
    }

    #[test]
    fn test_legacy_text_needs_both_markers() {
        let both = "Créé par (Résident):\nNom: Marie\nPour le visiteur:\nNom: Jean";
        assert_eq!(classify(both), ContentKind::LegacyText);

        let resident_only = "Créé par (Résident):\nNom: Marie";
        assert_eq!(classify(resident_only), ContentKind::Unstructured);

        let visitor_only = "Pour le visiteur:\nNom: Jean";
        assert_eq!(classify(visitor_only), ContentKind::Unstructured);
    }

    #[test]
    fn test_plain_text_is_unstructured() {
        assert_eq!(classify("random text with no identifiers"), ContentKind::Unstructured);
    }
}
