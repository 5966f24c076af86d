//! Action sources
//!
//! The pane pulls actions from an [`ActionSource`] one at a time and fully
//! processes each before asking for the next.

use std::collections::VecDeque;

use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::keymap::{KeyMap, KeyResult};
use crate::record::ActionRecord;

/// Something that yields discrete action records
pub trait ActionSource {
    /// Returns the next action, `None` once the source is exhausted
    fn next_action(&mut self) -> Option<KeyResult<ActionRecord>>;
}

/// A fixed queue of records, used for scripts and tests
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<ActionRecord>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ActionRecord) {
        self.queue.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<ActionRecord> for ScriptedSource {
    fn from_iter<I: IntoIterator<Item = ActionRecord>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl ActionSource for ScriptedSource {
    fn next_action(&mut self) -> Option<KeyResult<ActionRecord>> {
        self.queue.pop_front().map(Ok)
    }
}

/// Queued key events resolved through a key map
#[derive(Debug, Clone)]
pub struct KeyEventSource {
    keymap: KeyMap,
    events: VecDeque<KeyEvent>,
}

impl KeyEventSource {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            events: VecDeque::new(),
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.events.push_back(event);
    }

    pub fn press(&mut self, code: KeyCode, modifiers: Modifiers) {
        self.push(KeyEvent::pressed(code, modifiers));
    }

    /// Queues one plain key press per character of `text`
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.press(KeyCode::Enter, Modifiers::none()),
                '\t' => self.press(KeyCode::Tab, Modifiers::none()),
                ch => self.push(KeyEvent::char(ch)),
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl ActionSource for KeyEventSource {
    fn next_action(&mut self) -> Option<KeyResult<ActionRecord>> {
        while let Some(event) = self.events.pop_front() {
            match self.keymap.resolve(&event) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyError;
    use crate::record::kinds;

    #[test]
    fn test_scripted_source_drains_in_order() {
        let mut source: ScriptedSource = [
            ActionRecord::insert("a"),
            ActionRecord::new(kinds::INSERT_NEW_LINE),
        ]
        .into_iter()
        .collect();

        assert_eq!(source.len(), 2);
        assert_eq!(source.next_action().unwrap().unwrap(), ActionRecord::insert("a"));
        assert_eq!(
            source.next_action().unwrap().unwrap(),
            ActionRecord::new(kinds::INSERT_NEW_LINE)
        );
        assert!(source.next_action().is_none());
    }

    #[test]
    fn test_key_source_skips_releases() {
        let mut source = KeyEventSource::new(KeyMap::default());
        source.push(KeyEvent::released(KeyCode::Char('a'), Modifiers::none()));
        source.push(KeyEvent::char('b'));

        assert_eq!(source.next_action().unwrap().unwrap(), ActionRecord::insert("b"));
        assert!(source.next_action().is_none());
    }

    #[test]
    fn test_key_source_reports_unbound_and_continues() {
        let mut source = KeyEventSource::new(KeyMap::default());
        source.press(KeyCode::Escape, Modifiers::none());
        source.type_text("z");

        assert!(matches!(source.next_action(), Some(Err(KeyError::Unbound(_)))));
        assert_eq!(source.next_action().unwrap().unwrap(), ActionRecord::insert("z"));
    }

    #[test]
    fn test_type_text_maps_newline_to_enter() {
        let mut source = KeyEventSource::new(KeyMap::default());
        source.type_text("a\nb");
        assert_eq!(source.pending(), 3);

        let kinds: Vec<String> = std::iter::from_fn(|| source.next_action())
            .map(|r| r.unwrap().kind)
            .collect();
        assert_eq!(kinds, vec!["INSERT", "INSERT_NEW_LINE", "INSERT"]);
    }
}
