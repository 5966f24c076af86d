//! Key map: key strokes to action records

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::trace;

use crate::key::{KeyCode, KeyEvent, KeyStroke, Modifiers};
use crate::record::{kinds, ActionRecord};

/// Key handling error
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("No binding for key stroke: {0}")]
    Unbound(KeyStroke),

    #[error("Invalid key stroke: {0}")]
    InvalidStroke(String),

    #[error("Invalid key map: {0}")]
    KeyMap(#[from] serde_json::Error),
}

pub type KeyResult<T> = Result<T, KeyError>;

/// Maps key strokes to the action records they produce
///
/// Unbound printable characters typed without a command modifier resolve to
/// an `INSERT` of that character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<KeyStroke, ActionRecord>,
}

impl KeyMap {
    /// A key map with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Parses a JSON object of `"stroke": {record}` pairs and layers it over
    /// the default bindings
    pub fn from_json(json: &str) -> KeyResult<Self> {
        let overrides: BTreeMap<String, ActionRecord> = serde_json::from_str(json)?;
        let mut keymap = Self::default();
        for (stroke, record) in overrides {
            keymap.bind(stroke.parse()?, record);
        }
        Ok(keymap)
    }

    pub fn bind(&mut self, stroke: KeyStroke, record: ActionRecord) {
        self.bindings.insert(stroke, record);
    }

    pub fn unbind(&mut self, stroke: &KeyStroke) -> Option<ActionRecord> {
        self.bindings.remove(stroke)
    }

    pub fn binding(&self, stroke: &KeyStroke) -> Option<&ActionRecord> {
        self.bindings.get(stroke)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolves a key event to an action record
    ///
    /// Returns `Ok(None)` for key releases, which never produce input.
    pub fn resolve(&self, event: &KeyEvent) -> KeyResult<Option<ActionRecord>> {
        if !event.is_input() {
            return Ok(None);
        }

        let stroke = event.stroke();
        if let Some(record) = self.bindings.get(&stroke) {
            trace!(%stroke, kind = %record.kind, "Resolved bound key stroke");
            return Ok(Some(record.clone()));
        }

        match event.code {
            KeyCode::Char(ch) if !event.modifiers.is_command() => {
                Ok(Some(ActionRecord::insert(ch.to_string())))
            }
            _ => Err(KeyError::Unbound(stroke)),
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let none = Modifiers::none();
        let defaults = [
            (KeyCode::Enter, none, kinds::INSERT_NEW_LINE),
            (KeyCode::Backspace, none, kinds::DELETE_BACK_CHAR),
            (KeyCode::Delete, none, kinds::DELETE_FORWARD_CHAR),
            (KeyCode::Left, none, kinds::MOVE_CURSOR_LEFT),
            (KeyCode::Right, none, kinds::MOVE_CURSOR_RIGHT),
            (KeyCode::Up, none, kinds::MOVE_CURSOR_UP),
            (KeyCode::Down, none, kinds::MOVE_CURSOR_DOWN),
            (KeyCode::Home, none, kinds::MOVE_CURSOR_BEGINNING_OF_LINE),
            (KeyCode::End, none, kinds::MOVE_CURSOR_END_OF_LINE),
            (KeyCode::Char('a'), Modifiers::CTRL, kinds::MOVE_CURSOR_BEGINNING_OF_LINE),
            (KeyCode::Char('e'), Modifiers::CTRL, kinds::MOVE_CURSOR_END_OF_LINE),
            (KeyCode::Char('b'), Modifiers::CTRL, kinds::MOVE_CURSOR_LEFT),
            (KeyCode::Char('f'), Modifiers::CTRL, kinds::MOVE_CURSOR_RIGHT),
            (KeyCode::Char('p'), Modifiers::CTRL, kinds::MOVE_CURSOR_UP),
            (KeyCode::Char('n'), Modifiers::CTRL, kinds::MOVE_CURSOR_DOWN),
            (KeyCode::Char('d'), Modifiers::CTRL, kinds::DELETE_FORWARD_CHAR),
            (KeyCode::Char('k'), Modifiers::CTRL, kinds::KILL_LINE),
            (KeyCode::Char('f'), Modifiers::ALT, kinds::MOVE_CURSOR_FORWARD_WORD),
            (KeyCode::Char('b'), Modifiers::ALT, kinds::MOVE_CURSOR_BACK_WORD),
        ];

        let mut keymap = Self::empty();
        for (code, modifiers, kind) in defaults {
            keymap.bind(KeyStroke::new(code, modifiers), ActionRecord::new(kind));
        }
        keymap.bind(
            KeyStroke::new(KeyCode::Tab, none),
            ActionRecord::insert("\t"),
        );
        keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = KeyMap::default();
        let enter = KeyEvent::pressed(KeyCode::Enter, Modifiers::none());
        assert_eq!(
            keymap.resolve(&enter).unwrap(),
            Some(ActionRecord::new(kinds::INSERT_NEW_LINE))
        );

        let kill = KeyEvent::pressed(KeyCode::Char('k'), Modifiers::CTRL);
        assert_eq!(
            keymap.resolve(&kill).unwrap(),
            Some(ActionRecord::new(kinds::KILL_LINE))
        );
    }

    #[test]
    fn test_printable_char_inserts() {
        let keymap = KeyMap::default();
        let record = keymap.resolve(&KeyEvent::char('x')).unwrap();
        assert_eq!(record, Some(ActionRecord::insert("x")));

        let shifted = KeyEvent::pressed(KeyCode::Char('X'), Modifiers::SHIFT);
        assert_eq!(
            keymap.resolve(&shifted).unwrap(),
            Some(ActionRecord::insert("X"))
        );
    }

    #[test]
    fn test_release_produces_nothing() {
        let keymap = KeyMap::default();
        let released = KeyEvent::released(KeyCode::Char('x'), Modifiers::none());
        assert_eq!(keymap.resolve(&released).unwrap(), None);
    }

    #[test]
    fn test_unbound_chord_is_error() {
        let keymap = KeyMap::default();
        let chord = KeyEvent::pressed(KeyCode::Char('q'), Modifiers::CTRL);
        match keymap.resolve(&chord) {
            Err(KeyError::Unbound(stroke)) => assert_eq!(stroke.to_string(), "Ctrl+Q"),
            other => panic!("Expected Unbound, got {:?}", other),
        }

        let escape = KeyEvent::pressed(KeyCode::Escape, Modifiers::none());
        assert!(matches!(keymap.resolve(&escape), Err(KeyError::Unbound(_))));
    }

    #[test]
    fn test_from_json_overrides_defaults() {
        let keymap = KeyMap::from_json(
            r#"{"Ctrl+K": {"type": "DELETE_BACK_CHAR"}, "Escape": {"type": "HIDE_GUTTER"}}"#,
        )
        .unwrap();

        let kill = KeyEvent::pressed(KeyCode::Char('k'), Modifiers::CTRL);
        assert_eq!(
            keymap.resolve(&kill).unwrap(),
            Some(ActionRecord::new(kinds::DELETE_BACK_CHAR))
        );
        let escape = KeyEvent::pressed(KeyCode::Escape, Modifiers::none());
        assert_eq!(
            keymap.resolve(&escape).unwrap(),
            Some(ActionRecord::new(kinds::HIDE_GUTTER))
        );
        // Untouched defaults survive
        let enter = KeyEvent::pressed(KeyCode::Enter, Modifiers::none());
        assert!(keymap.resolve(&enter).unwrap().is_some());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(KeyMap::from_json("[1, 2]"), Err(KeyError::KeyMap(_))));
        assert!(matches!(
            KeyMap::from_json(r#"{"Ctrl+Nope": {"type": "KILL_LINE"}}"#),
            Err(KeyError::InvalidStroke(_))
        ));
    }

    #[test]
    fn test_unbind() {
        let mut keymap = KeyMap::default();
        let stroke: KeyStroke = "Enter".parse().unwrap();
        assert!(keymap.unbind(&stroke).is_some());
        let enter = KeyEvent::pressed(KeyCode::Enter, Modifiers::none());
        assert!(matches!(keymap.resolve(&enter), Err(KeyError::Unbound(_))));
    }
}
