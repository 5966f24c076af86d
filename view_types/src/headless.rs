//! Headless text rendering
//!
//! Mirrors everything a [`PaneView`] is told and renders the visible window
//! as plain text, suitable for console output or test assertions.

use crate::change::PaneView;

/// A [`PaneView`] that keeps its state in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessView {
    char_width: usize,
    char_height: usize,
    lines: Vec<String>,
    scroll_top: usize,
    scroll_left: usize,
    visible_height: usize,
    visible_width: usize,
    left_offset: usize,
    cursor: (usize, usize),
    cursor_blink: bool,
    gutter_line_count: usize,
    active_line: usize,
    gutter_visible: bool,
    pane_visible: bool,
    /// Number of updates received, bumped on every call
    revision: u64,
}

impl HeadlessView {
    /// Creates a view for the given character cell size in pixels
    ///
    /// A zero metric is treated as one pixel.
    pub fn new(char_width: usize, char_height: usize) -> Self {
        Self {
            char_width: char_width.max(1),
            char_height: char_height.max(1),
            lines: vec![String::new()],
            scroll_top: 0,
            scroll_left: 0,
            visible_height: 0,
            visible_width: 0,
            left_offset: 0,
            cursor: (1, 1),
            cursor_blink: false,
            gutter_line_count: 1,
            active_line: 1,
            gutter_visible: true,
            pane_visible: true,
            revision: 0,
        }
    }

    /// Get the mirrored lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get the cursor as `(line, col)`
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Get the vertical scroll offset in pixels
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Get the horizontal scroll offset in pixels
    pub fn scroll_left(&self) -> usize {
        self.scroll_left
    }

    /// Get the left edge of the text area in pixels
    pub fn left_offset(&self) -> usize {
        self.left_offset
    }

    pub fn visible_width(&self) -> usize {
        self.visible_width
    }

    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Get the line count the gutter numbers up to
    pub fn gutter_line_count(&self) -> usize {
        self.gutter_line_count
    }

    pub fn active_line(&self) -> usize {
        self.active_line
    }

    pub fn is_gutter_visible(&self) -> bool {
        self.gutter_visible
    }

    /// Check if the cursor blinks, which follows pane focus
    pub fn is_cursor_blinking(&self) -> bool {
        self.cursor_blink
    }

    pub fn is_pane_visible(&self) -> bool {
        self.pane_visible
    }

    /// Get the number of updates received
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// First line inside the window, 1-indexed
    pub fn first_visible_line(&self) -> usize {
        (self.scroll_top / self.char_height).saturating_add(1)
    }

    pub fn first_visible_col(&self) -> usize {
        (self.scroll_left / self.char_width).saturating_add(1)
    }

    /// Render the visible window to a string
    ///
    /// One row per visible line. With the gutter shown each row starts with
    /// `>` on the active line, the right-aligned line number and a space.
    /// The cursor cell is bracketed; rows past the content show `~`.
    pub fn render(&self) -> String {
        if !self.pane_visible {
            return String::new();
        }

        let rows = self.visible_height / self.char_height;
        let cols = self.visible_width / self.char_width;
        let first_line = self.first_visible_line();
        let first_col = self.first_visible_col();
        let number_width = digits(self.gutter_line_count);

        let mut output = String::new();
        for line in first_line..first_line.saturating_add(rows) {
            if self.gutter_visible {
                let marker = if line == self.active_line { '>' } else { ' ' };
                if line <= self.gutter_line_count {
                    output.push_str(&format!("{}{:>width$} ", marker, line, width = number_width));
                } else {
                    output.push_str(&format!(" {:>width$} ", "", width = number_width));
                }
            }

            match self.lines.get(line - 1) {
                Some(text) => {
                    let cursor_col = (line == self.cursor.0).then_some(self.cursor.1);
                    output.push_str(&render_slice(text, first_col, cols, cursor_col));
                }
                None => output.push('~'),
            }
            output.push('\n');
        }
        output
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Number of decimal digits in `n`, the width of a gutter line number
pub fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn render_slice(text: &str, first_col: usize, cols: usize, cursor_col: Option<usize>) -> String {
    let mut result = String::new();
    let last_col = first_col.saturating_add(cols);
    let mut col = first_col;
    for ch in text.chars().skip(first_col - 1).take(cols) {
        if Some(col) == cursor_col {
            result.push('[');
            result.push(ch);
            result.push(']');
        } else {
            result.push(ch);
        }
        col += 1;
    }
    // Cursor at the append position
    if let Some(cursor) = cursor_col {
        if cursor == col && col < last_col {
            result.push_str("[ ]");
        }
    }
    result
}

impl PaneView for HeadlessView {
    fn set_line(&mut self, line: usize, text: &str) {
        self.touch();
        match self.lines.get_mut(line.saturating_sub(1)) {
            Some(slot) => *slot = text.to_string(),
            None => self.lines.push(text.to_string()),
        }
    }

    fn insert_line(&mut self, line: usize, text: &str) {
        self.touch();
        let index = line.saturating_sub(1).min(self.lines.len());
        self.lines.insert(index, text.to_string());
    }

    fn remove_line(&mut self, line: usize) {
        self.touch();
        let index = line.saturating_sub(1);
        if index < self.lines.len() && self.lines.len() > 1 {
            self.lines.remove(index);
        }
    }

    fn set_scroll_top(&mut self, px: usize) {
        self.touch();
        self.scroll_top = px;
    }

    fn set_scroll_left(&mut self, px: usize) {
        self.touch();
        self.scroll_left = px;
    }

    fn set_visible_height(&mut self, px: usize) {
        self.touch();
        self.visible_height = px;
    }

    fn set_visible_width(&mut self, px: usize) {
        self.touch();
        self.visible_width = px;
    }

    fn set_left_offset(&mut self, px: usize) {
        self.touch();
        self.left_offset = px;
    }

    fn move_cursor(&mut self, line: usize, col: usize) {
        self.touch();
        self.cursor = (line, col);
    }

    fn set_cursor_blink(&mut self, on: bool) {
        self.touch();
        self.cursor_blink = on;
    }

    fn set_gutter_line_count(&mut self, count: usize) {
        self.touch();
        self.gutter_line_count = count;
    }

    fn set_active_line(&mut self, line: usize) {
        self.touch();
        self.active_line = line;
    }

    fn set_gutter_visible(&mut self, visible: bool) {
        self.touch();
        self.gutter_visible = visible;
    }

    fn set_pane_visible(&mut self, visible: bool) {
        self.touch();
        self.pane_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(lines: &[&str]) -> HeadlessView {
        let mut view = HeadlessView::new(1, 1);
        view.set_line(1, lines[0]);
        for (i, line) in lines.iter().enumerate().skip(1) {
            view.insert_line(i + 1, line);
        }
        view.set_gutter_line_count(lines.len());
        view
    }

    #[test]
    fn test_render_with_cursor_and_gutter() {
        let mut view = view_with(&["hello", "world"]);
        view.set_visible_height(3);
        view.set_visible_width(10);
        view.move_cursor(1, 2);

        assert_eq!(view.render(), ">1 h[e]llo\n 2 world\n   ~\n");
    }

    #[test]
    fn test_render_cursor_at_end_of_line() {
        let mut view = view_with(&["hi"]);
        view.set_gutter_visible(false);
        view.set_visible_height(1);
        view.set_visible_width(10);
        view.move_cursor(1, 3);

        assert_eq!(view.render(), "hi[ ]\n");
    }

    #[test]
    fn test_render_scrolled_window() {
        let mut view = view_with(&["abcdef", "ghijkl", "mnopqr"]);
        view.set_gutter_visible(false);
        view.set_visible_height(2);
        view.set_visible_width(3);
        view.set_scroll_top(1);
        view.set_scroll_left(2);
        view.move_cursor(3, 4);

        assert_eq!(view.first_visible_line(), 2);
        assert_eq!(view.first_visible_col(), 3);
        assert_eq!(view.render(), "ijk\no[p]q\n");
    }

    #[test]
    fn test_gutter_pads_line_numbers() {
        let lines: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
        let mut view = view_with(&refs);
        view.set_visible_height(1);
        view.set_visible_width(4);
        view.set_scroll_top(9);
        view.set_active_line(10);
        view.move_cursor(1, 1);

        assert_eq!(view.render(), ">10 10\n");
    }

    #[test]
    fn test_hidden_pane_renders_nothing() {
        let mut view = view_with(&["x"]);
        view.set_visible_height(1);
        view.set_visible_width(1);
        view.set_pane_visible(false);
        assert_eq!(view.render(), "");
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(12345), 5);
        assert_eq!(digits(usize::MAX), usize::MAX.to_string().len());
    }

    #[test]
    fn test_render_far_past_content() {
        let mut view = view_with(&["a", "b"]);
        view.set_gutter_visible(false);
        view.set_visible_height(2);
        view.set_visible_width(3);
        view.set_scroll_top(usize::MAX - 5);
        view.set_scroll_left(usize::MAX);

        assert_eq!(view.first_visible_line(), usize::MAX - 4);
        assert_eq!(view.first_visible_col(), usize::MAX);
        assert_eq!(view.render(), "~\n~\n");

        // The last representable line yields an empty window rather than wrapping
        view.set_scroll_top(usize::MAX);
        assert_eq!(view.first_visible_line(), usize::MAX);
        assert_eq!(view.render(), "");
    }

    #[test]
    fn test_remove_line_keeps_one_line() {
        let mut view = view_with(&["only"]);
        view.remove_line(1);
        assert_eq!(view.lines().len(), 1);
    }

    #[test]
    fn test_revision_counts_updates() {
        let mut view = HeadlessView::new(8, 16);
        assert_eq!(view.revision(), 0);
        view.set_scroll_top(16);
        view.set_active_line(2);
        assert_eq!(view.revision(), 2);
    }
}
