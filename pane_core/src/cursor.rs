//! Cursor state and movement primitives
//!
//! The cursor knows nothing about line widths. It trusts its caller to keep
//! it inside the buffer; the edit controller validates and clamps.

use crate::buffer::Position;

/// Cursor with a goal column for vertical movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    line: usize,
    col: usize,
    /// Column restored by vertical moves; only `set_col` writes it
    goal_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 1,
            col: 1,
            goal_col: 1,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn goal_col(&self) -> usize {
        self.goal_col
    }

    /// Jump to a position. The position must already be validated.
    pub fn move_to(&mut self, line: usize, col: usize) {
        debug_assert!(line >= 1 && col >= 1, "cursor positions are 1-indexed");
        self.line = line;
        self.set_col(col);
    }

    pub fn move_left(&mut self) {
        debug_assert!(self.col > 1, "move_left past column 1");
        self.set_col(self.col.saturating_sub(1).max(1));
    }

    pub fn move_right(&mut self) {
        self.set_col(self.col + 1);
    }

    /// Move up one line and restore the goal column; the caller clamps
    pub fn move_up(&mut self) {
        debug_assert!(self.line > 1, "move_up past line 1");
        self.line = self.line.saturating_sub(1).max(1);
        self.col = self.goal_col;
    }

    /// Move down one line and restore the goal column; the caller clamps
    pub fn move_down(&mut self) {
        self.line += 1;
        self.col = self.goal_col;
    }

    /// Set the column and remember it as the goal column
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
        self.goal_col = col;
    }

    /// Limit the column without touching the goal column
    pub fn clamp_col(&mut self, max_col: usize) {
        if self.col > max_col {
            self.col = max_col;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
