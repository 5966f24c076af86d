//! Untyped action records
//!
//! An [`ActionRecord`] is what crosses the input boundary: a kind name plus
//! whatever payload that kind needs. The pane core parses it into its own
//! typed action and rejects kinds it does not recognize.

use serde::{Deserialize, Serialize};

/// Action kind names understood by the pane
pub mod kinds {
    pub const INSERT: &str = "INSERT";
    pub const INSERT_NEW_LINE: &str = "INSERT_NEW_LINE";
    pub const DELETE_BACK_CHAR: &str = "DELETE_BACK_CHAR";
    pub const DELETE_FORWARD_CHAR: &str = "DELETE_FORWARD_CHAR";
    pub const KILL_LINE: &str = "KILL_LINE";
    pub const MOVE_TO_POS: &str = "MOVE_TO_POS";
    pub const MOVE_CURSOR_LEFT: &str = "MOVE_CURSOR_LEFT";
    pub const MOVE_CURSOR_RIGHT: &str = "MOVE_CURSOR_RIGHT";
    pub const MOVE_CURSOR_UP: &str = "MOVE_CURSOR_UP";
    pub const MOVE_CURSOR_DOWN: &str = "MOVE_CURSOR_DOWN";
    pub const MOVE_CURSOR_FORWARD_WORD: &str = "MOVE_CURSOR_FORWARD_WORD";
    pub const MOVE_CURSOR_BACK_WORD: &str = "MOVE_CURSOR_BACK_WORD";
    pub const MOVE_CURSOR_BEGINNING_OF_LINE: &str = "MOVE_CURSOR_BEGINNING_OF_LINE";
    pub const MOVE_CURSOR_END_OF_LINE: &str = "MOVE_CURSOR_END_OF_LINE";
    pub const SHOW_GUTTER: &str = "SHOW_GUTTER";
    pub const HIDE_GUTTER: &str = "HIDE_GUTTER";
}

/// A discrete action as produced by an input source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

impl ActionRecord {
    /// Creates a record with no payload
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: None,
            line: None,
            col: None,
        }
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(kinds::INSERT).with_text(text)
    }

    pub fn move_to(line: usize, col: usize) -> Self {
        Self {
            line: Some(line),
            col: Some(col),
            ..Self::new(kinds::MOVE_TO_POS)
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_type_field() {
        let json = serde_json::to_string(&ActionRecord::new(kinds::KILL_LINE)).unwrap();
        assert_eq!(json, r#"{"type":"KILL_LINE"}"#);
    }

    #[test]
    fn test_record_parses_payload() {
        let record: ActionRecord =
            serde_json::from_str(r#"{"type":"MOVE_TO_POS","line":3,"col":7}"#).unwrap();
        assert_eq!(record, ActionRecord::move_to(3, 7));

        let record: ActionRecord =
            serde_json::from_str(r#"{"type":"INSERT","text":"hi"}"#).unwrap();
        assert_eq!(record, ActionRecord::insert("hi"));
    }

    #[test]
    fn test_unknown_kind_still_parses() {
        // Rejection is the consumer's call, not the parser's
        let record: ActionRecord = serde_json::from_str(r#"{"type":"FROBNICATE"}"#).unwrap();
        assert_eq!(record.kind, "FROBNICATE");
    }
}
