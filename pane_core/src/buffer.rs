//! Text buffer and position types
//!
//! All public coordinates are 1-indexed. Columns count characters, not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PaneError, PaneResult};

/// Cursor position in the buffer, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub const fn origin() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Byte offset of 1-indexed character column `col` in `text`
///
/// Columns past the end map to `text.len()`.
pub fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Text buffer with line-based storage
///
/// Always holds at least one line and no line contains a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Builds a buffer from text, splitting on `\n` (a trailing `\r` is
    /// dropped from each line)
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, line: usize) -> PaneResult<&str> {
        let index = self.index(line)?;
        Ok(self.lines[index].as_str())
    }

    /// Width of a line in characters
    pub fn line_width(&self, line: usize) -> PaneResult<usize> {
        self.line(line).map(|text| text.chars().count())
    }

    pub fn longest_line_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Replaces the text of an existing line
    pub fn set_line(&mut self, line: usize, text: impl Into<String>) -> PaneResult<()> {
        let index = self.index(line)?;
        let text = Self::single_line(text.into())?;
        self.lines[index] = text;
        Ok(())
    }

    /// Inserts a line so that it becomes line `line`, shifting later lines
    /// down. `line` may be one past the last line to append.
    pub fn insert_line(&mut self, line: usize, text: impl Into<String>) -> PaneResult<()> {
        let max = self.lines.len() + 1;
        if line < 1 || line > max {
            return Err(PaneError::out_of_range("line", line, 1, max));
        }
        let text = Self::single_line(text.into())?;
        self.lines.insert(line - 1, text);
        Ok(())
    }

    /// Removes a line and returns its text
    pub fn delete_line(&mut self, line: usize) -> PaneResult<String> {
        let index = self.index(line)?;
        if self.lines.len() == 1 {
            return Err(PaneError::InvariantViolation(
                "cannot delete the only line of a buffer".into(),
            ));
        }
        Ok(self.lines.remove(index))
    }

    /// True when `pos` is a valid cursor position, including the append
    /// position one past the end of a line
    pub fn contains(&self, pos: Position) -> bool {
        match self.line_width(pos.line) {
            Ok(width) => pos.col >= 1 && pos.col <= width + 1,
            Err(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn index(&self, line: usize) -> PaneResult<usize> {
        if line < 1 || line > self.lines.len() {
            return Err(PaneError::out_of_range("line", line, 1, self.lines.len()));
        }
        Ok(line - 1)
    }

    fn single_line(text: String) -> PaneResult<String> {
        if text.contains('\n') {
            return Err(PaneError::InvariantViolation(
                "line text must not contain a newline".into(),
            ));
        }
        Ok(text)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
