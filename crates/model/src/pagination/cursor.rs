use serde::{Deserialize, Serialize};

/// Opaque continuation tokens bracketing a fetched page. Each token encodes
/// the full key tuple of one boundary row; both are populated together
/// whenever a page came back non-empty, regardless of pagination direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor {
    pub after: Option<String>,
    pub before: Option<String>,
}

/// Result of one pagination call: the cursor pair plus whether rows beyond
/// the returned window exist (detected via the limit-plus-one fetch).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub cursor: Cursor,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_serializes_to_plain_json() {
        let cursor = Cursor {
            after: Some("abc".into()),
            before: None,
        };
        let json = serde_json::to_string(&cursor).unwrap();
        assert_eq!(json, r#"{"after":"abc","before":null}"#);
    }
}
