//! # Script Parsers
//!
//! Two line-based formats drive the console.
//!
//! ## Action records
//!
//! One JSON action record per line:
//!
//! ```text
//! {"type": "INSERT", "text": "hello"}
//! {"type": "MOVE_CURSOR_LEFT"}
//! ```
//!
//! ## Key strokes
//!
//! One key stroke per line, resolved through the key map at run time:
//!
//! ```text
//! # Type a line, then jump back to its start
//! "Hello Panes"
//! Enter
//! Ctrl+A
//! ```
//!
//! A line starting with `"` is literal text typed one key per character;
//! the closing quote is optional. In both formats blank lines and lines
//! starting with `#` are skipped.

use input_types::{ActionRecord, KeyCode, KeyError, KeyEvent, KeyStroke, Modifiers};
use thiserror::Error;

/// Script error types
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Empty script")]
    Empty,
}

pub type ScriptResult<T> = Result<T, ScriptError>;

/// Content lines with their 1-indexed line numbers
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parses a JSON-lines script of action records
pub fn parse_records(text: &str) -> ScriptResult<Vec<ActionRecord>> {
    let records = content_lines(text)
        .map(|(line, content)| {
            serde_json::from_str(content).map_err(|e| ScriptError::Parse {
                line,
                message: e.to_string(),
            })
        })
        .collect::<ScriptResult<Vec<ActionRecord>>>()?;

    if records.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(records)
}

/// Parses a key stroke script into key press events
pub fn parse_keys(text: &str) -> ScriptResult<Vec<KeyEvent>> {
    let mut events = Vec::new();

    for (line, content) in content_lines(text) {
        if let Some(quoted) = content.strip_prefix('"') {
            let typed = quoted.strip_suffix('"').unwrap_or(quoted);
            events.extend(typed.chars().map(|ch| match ch {
                '\t' => KeyEvent::pressed(KeyCode::Tab, Modifiers::none()),
                ch => KeyEvent::char(ch),
            }));
            continue;
        }

        let stroke: KeyStroke = content.parse().map_err(|e: KeyError| ScriptError::Parse {
            line,
            message: e.to_string(),
        })?;
        events.push(KeyEvent::pressed(stroke.code(), stroke.modifiers()));
    }

    if events.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(events)
}
