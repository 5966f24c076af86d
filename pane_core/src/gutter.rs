//! Line-number gutter state

use tracing::debug;
use view_types::digits;

use crate::error::{PaneError, PaneResult};

/// Gutter tracking line count, active line and visibility
///
/// Width is derived: `(digits(line_count) + padding_cols) * char_width`
/// while visible, zero while hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gutter {
    line_count: usize,
    active_line: usize,
    visible: bool,
    char_width: usize,
    padding_cols: usize,
}

impl Gutter {
    pub fn new(char_width: usize, padding_cols: usize, visible: bool) -> Self {
        Self {
            line_count: 1,
            active_line: 1,
            visible,
            char_width,
            padding_cols,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn active_line(&self) -> usize {
        self.active_line
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        if self.visible {
            (digits(self.line_count) + self.padding_cols) * self.char_width
        } else {
            0
        }
    }

    pub fn append_line(&mut self) {
        self.line_count += 1;
        debug!(line_count = self.line_count, "Gutter line added");
    }

    pub fn remove_line(&mut self) -> PaneResult<()> {
        if self.line_count <= 1 {
            return Err(PaneError::InvariantViolation(
                "gutter line count cannot drop below one".into(),
            ));
        }
        self.line_count -= 1;
        debug!(line_count = self.line_count, "Gutter line removed");
        Ok(())
    }

    /// Reset to a fresh line count, e.g. after loading new text
    pub fn reset(&mut self, line_count: usize) {
        self.line_count = line_count.max(1);
        self.active_line = 1;
    }

    /// Returns true if the active line changed
    pub fn set_active_line(&mut self, line: usize) -> bool {
        if self.active_line == line {
            return false;
        }
        self.active_line = line;
        true
    }

    /// Returns true if visibility changed
    pub fn show(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Returns true if visibility changed
    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_grows_with_digits() {
        let mut gutter = Gutter::new(8, 1, true);
        assert_eq!(gutter.width(), 16);

        for _ in 1..10 {
            gutter.append_line();
        }
        assert_eq!(gutter.line_count(), 10);
        assert_eq!(gutter.width(), 24);
    }

    #[test]
    fn test_hidden_gutter_has_no_width() {
        let mut gutter = Gutter::new(8, 1, true);
        assert!(gutter.hide());
        assert!(!gutter.hide());
        assert_eq!(gutter.width(), 0);
        assert!(gutter.show());
        assert_eq!(gutter.width(), 16);
    }

    #[test]
    fn test_remove_last_line_rejected() {
        let mut gutter = Gutter::new(8, 1, true);
        assert!(matches!(
            gutter.remove_line(),
            Err(PaneError::InvariantViolation(_))
        ));
        gutter.append_line();
        gutter.remove_line().unwrap();
        assert_eq!(gutter.line_count(), 1);
    }

    #[test]
    fn test_active_line_change_reported_once() {
        let mut gutter = Gutter::new(8, 1, true);
        assert!(!gutter.set_active_line(1));
        assert!(gutter.set_active_line(3));
        assert!(!gutter.set_active_line(3));
        assert_eq!(gutter.active_line(), 3);
    }
}
