//! The view contract and the changes that flow through it

use serde::{Deserialize, Serialize};

/// Render sink driven by the pane core
///
/// Lines and columns are 1-indexed; pixel values are 0-based. Calls arrive
/// already validated, so implementations never need to range-check.
pub trait PaneView {
    fn set_line(&mut self, line: usize, text: &str);
    fn insert_line(&mut self, line: usize, text: &str);
    fn remove_line(&mut self, line: usize);

    fn set_scroll_top(&mut self, px: usize);
    fn set_scroll_left(&mut self, px: usize);
    fn set_visible_height(&mut self, px: usize);
    fn set_visible_width(&mut self, px: usize);
    /// Horizontal offset of the text area, i.e. the gutter width
    fn set_left_offset(&mut self, px: usize);

    fn move_cursor(&mut self, line: usize, col: usize);
    fn set_cursor_blink(&mut self, on: bool);

    fn set_gutter_line_count(&mut self, count: usize);
    fn set_active_line(&mut self, line: usize);
    fn set_gutter_visible(&mut self, visible: bool);

    fn set_pane_visible(&mut self, visible: bool);
}

/// A single update to a [`PaneView`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewChange {
    SetLine { line: usize, text: String },
    InsertLine { line: usize, text: String },
    RemoveLine { line: usize },
    ScrollTop(usize),
    ScrollLeft(usize),
    VisibleHeight(usize),
    VisibleWidth(usize),
    LeftOffset(usize),
    Cursor { line: usize, col: usize },
    CursorBlink(bool),
    GutterLineCount(usize),
    ActiveLine(usize),
    GutterVisible(bool),
    PaneVisible(bool),
}

impl ViewChange {
    pub fn apply<V: PaneView + ?Sized>(&self, view: &mut V) {
        match self {
            ViewChange::SetLine { line, text } => view.set_line(*line, text),
            ViewChange::InsertLine { line, text } => view.insert_line(*line, text),
            ViewChange::RemoveLine { line } => view.remove_line(*line),
            ViewChange::ScrollTop(px) => view.set_scroll_top(*px),
            ViewChange::ScrollLeft(px) => view.set_scroll_left(*px),
            ViewChange::VisibleHeight(px) => view.set_visible_height(*px),
            ViewChange::VisibleWidth(px) => view.set_visible_width(*px),
            ViewChange::LeftOffset(px) => view.set_left_offset(*px),
            ViewChange::Cursor { line, col } => view.move_cursor(*line, *col),
            ViewChange::CursorBlink(on) => view.set_cursor_blink(*on),
            ViewChange::GutterLineCount(count) => view.set_gutter_line_count(*count),
            ViewChange::ActiveLine(line) => view.set_active_line(*line),
            ViewChange::GutterVisible(visible) => view.set_gutter_visible(*visible),
            ViewChange::PaneVisible(visible) => view.set_pane_visible(*visible),
        }
    }

    /// True for changes that alter line content or line count
    pub fn is_text_change(&self) -> bool {
        matches!(
            self,
            ViewChange::SetLine { .. }
                | ViewChange::InsertLine { .. }
                | ViewChange::RemoveLine { .. }
        )
    }

    pub fn is_scroll(&self) -> bool {
        matches!(self, ViewChange::ScrollTop(_) | ViewChange::ScrollLeft(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl PaneView for CallLog {
        fn set_line(&mut self, line: usize, text: &str) {
            self.0.push(format!("set_line {} {}", line, text));
        }
        fn insert_line(&mut self, line: usize, text: &str) {
            self.0.push(format!("insert_line {} {}", line, text));
        }
        fn remove_line(&mut self, line: usize) {
            self.0.push(format!("remove_line {}", line));
        }
        fn set_scroll_top(&mut self, px: usize) {
            self.0.push(format!("scroll_top {}", px));
        }
        fn set_scroll_left(&mut self, px: usize) {
            self.0.push(format!("scroll_left {}", px));
        }
        fn set_visible_height(&mut self, px: usize) {
            self.0.push(format!("visible_height {}", px));
        }
        fn set_visible_width(&mut self, px: usize) {
            self.0.push(format!("visible_width {}", px));
        }
        fn set_left_offset(&mut self, px: usize) {
            self.0.push(format!("left_offset {}", px));
        }
        fn move_cursor(&mut self, line: usize, col: usize) {
            self.0.push(format!("cursor {} {}", line, col));
        }
        fn set_cursor_blink(&mut self, on: bool) {
            self.0.push(format!("blink {}", on));
        }
        fn set_gutter_line_count(&mut self, count: usize) {
            self.0.push(format!("gutter_lines {}", count));
        }
        fn set_active_line(&mut self, line: usize) {
            self.0.push(format!("active {}", line));
        }
        fn set_gutter_visible(&mut self, visible: bool) {
            self.0.push(format!("gutter_visible {}", visible));
        }
        fn set_pane_visible(&mut self, visible: bool) {
            self.0.push(format!("pane_visible {}", visible));
        }
    }

    #[test]
    fn test_apply_dispatches_to_view() {
        let mut log = CallLog::default();
        let changes = [
            ViewChange::InsertLine {
                line: 2,
                text: "cd".into(),
            },
            ViewChange::ScrollTop(32),
            ViewChange::Cursor { line: 2, col: 1 },
            ViewChange::ActiveLine(2),
        ];
        for change in &changes {
            change.apply(&mut log);
        }

        assert_eq!(
            log.0,
            vec!["insert_line 2 cd", "scroll_top 32", "cursor 2 1", "active 2"]
        );
    }

    #[test]
    fn test_change_classification() {
        assert!(ViewChange::RemoveLine { line: 1 }.is_text_change());
        assert!(!ViewChange::ScrollLeft(8).is_text_change());
        assert!(ViewChange::ScrollLeft(8).is_scroll());
        assert!(!ViewChange::ActiveLine(1).is_scroll());
    }

    #[test]
    fn test_change_serialization() {
        let change = ViewChange::SetLine {
            line: 3,
            text: "abc".into(),
        };
        let json = serde_json::to_string(&change).unwrap();
        let back: ViewChange = serde_json::from_str(&json).unwrap();
        assert_eq!(change, back);
    }
}
