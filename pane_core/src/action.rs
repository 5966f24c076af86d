//! Typed pane actions
//!
//! Input sources hand over untyped [`ActionRecord`]s. They are parsed here
//! into a closed [`Action`] set; anything else is an `UnknownAction`.

use input_types::{kinds, ActionRecord};

use crate::error::{PaneError, PaneResult};

/// Editing or movement action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert text at the cursor; `\n` splits lines
    Insert(String),
    InsertNewLine,
    DeleteBackChar,
    DeleteForwardChar,
    KillLine,
    /// Jump to a position, rejected if out of range
    MoveTo { line: usize, col: usize },
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveForwardWord,
    MoveBackWord,
    MoveBeginningOfLine,
    MoveEndOfLine,
    ShowGutter,
    HideGutter,
}

impl Action {
    /// Record kind name of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Insert(_) => kinds::INSERT,
            Action::InsertNewLine => kinds::INSERT_NEW_LINE,
            Action::DeleteBackChar => kinds::DELETE_BACK_CHAR,
            Action::DeleteForwardChar => kinds::DELETE_FORWARD_CHAR,
            Action::KillLine => kinds::KILL_LINE,
            Action::MoveTo { .. } => kinds::MOVE_TO_POS,
            Action::MoveLeft => kinds::MOVE_CURSOR_LEFT,
            Action::MoveRight => kinds::MOVE_CURSOR_RIGHT,
            Action::MoveUp => kinds::MOVE_CURSOR_UP,
            Action::MoveDown => kinds::MOVE_CURSOR_DOWN,
            Action::MoveForwardWord => kinds::MOVE_CURSOR_FORWARD_WORD,
            Action::MoveBackWord => kinds::MOVE_CURSOR_BACK_WORD,
            Action::MoveBeginningOfLine => kinds::MOVE_CURSOR_BEGINNING_OF_LINE,
            Action::MoveEndOfLine => kinds::MOVE_CURSOR_END_OF_LINE,
            Action::ShowGutter => kinds::SHOW_GUTTER,
            Action::HideGutter => kinds::HIDE_GUTTER,
        }
    }

    pub fn to_record(&self) -> ActionRecord {
        match self {
            Action::Insert(text) => ActionRecord::insert(text.clone()),
            Action::MoveTo { line, col } => ActionRecord::move_to(*line, *col),
            other => ActionRecord::new(other.kind()),
        }
    }
}

impl TryFrom<&ActionRecord> for Action {
    type Error = PaneError;

    fn try_from(record: &ActionRecord) -> PaneResult<Self> {
        let malformed = |field| PaneError::MalformedAction {
            kind: record.kind.clone(),
            field,
        };

        let action = match record.kind.as_str() {
            kinds::INSERT => Action::Insert(record.text.clone().ok_or_else(|| malformed("text"))?),
            kinds::INSERT_NEW_LINE => Action::InsertNewLine,
            kinds::DELETE_BACK_CHAR => Action::DeleteBackChar,
            kinds::DELETE_FORWARD_CHAR => Action::DeleteForwardChar,
            kinds::KILL_LINE => Action::KillLine,
            kinds::MOVE_TO_POS => Action::MoveTo {
                line: record.line.ok_or_else(|| malformed("line"))?,
                col: record.col.ok_or_else(|| malformed("col"))?,
            },
            kinds::MOVE_CURSOR_LEFT => Action::MoveLeft,
            kinds::MOVE_CURSOR_RIGHT => Action::MoveRight,
            kinds::MOVE_CURSOR_UP => Action::MoveUp,
            kinds::MOVE_CURSOR_DOWN => Action::MoveDown,
            kinds::MOVE_CURSOR_FORWARD_WORD => Action::MoveForwardWord,
            kinds::MOVE_CURSOR_BACK_WORD => Action::MoveBackWord,
            kinds::MOVE_CURSOR_BEGINNING_OF_LINE => Action::MoveBeginningOfLine,
            kinds::MOVE_CURSOR_END_OF_LINE => Action::MoveEndOfLine,
            kinds::SHOW_GUTTER => Action::ShowGutter,
            kinds::HIDE_GUTTER => Action::HideGutter,
            other => return Err(PaneError::UnknownAction(other.to_string())),
        };
        Ok(action)
    }
}

impl TryFrom<ActionRecord> for Action {
    type Error = PaneError;

    fn try_from(record: ActionRecord) -> PaneResult<Self> {
        Action::try_from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_actions() {
        let action = Action::try_from(&ActionRecord::insert("hi")).unwrap();
        assert_eq!(action, Action::Insert("hi".into()));

        let action = Action::try_from(&ActionRecord::move_to(3, 4)).unwrap();
        assert_eq!(action, Action::MoveTo { line: 3, col: 4 });
    }

    #[test]
    fn test_parse_from_json() {
        let record: ActionRecord =
            serde_json::from_str(r#"{"type":"MOVE_CURSOR_END_OF_LINE"}"#).unwrap();
        assert_eq!(Action::try_from(record).unwrap(), Action::MoveEndOfLine);
    }

    #[test]
    fn test_unknown_kind_is_reported() {
        let err = Action::try_from(&ActionRecord::new("DELETE_BACK_WORD")).unwrap_err();
        match err {
            PaneError::UnknownAction(kind) => assert_eq!(kind, "DELETE_BACK_WORD"),
            other => panic!("Expected UnknownAction, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payload_is_malformed() {
        let err = Action::try_from(&ActionRecord::new(kinds::INSERT)).unwrap_err();
        assert!(matches!(err, PaneError::MalformedAction { field: "text", .. }));

        let mut record = ActionRecord::move_to(1, 1);
        record.col = None;
        let err = Action::try_from(&record).unwrap_err();
        assert!(matches!(err, PaneError::MalformedAction { field: "col", .. }));
    }

    #[test]
    fn test_record_kind_matches_action_kind() {
        let actions = [
            Action::Insert("x".into()),
            Action::KillLine,
            Action::MoveTo { line: 2, col: 2 },
            Action::HideGutter,
        ];
        for action in &actions {
            let record = action.to_record();
            assert_eq!(record.kind, action.kind());
            assert_eq!(&Action::try_from(&record).unwrap(), action);
        }
    }
}
