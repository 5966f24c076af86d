//! Word boundary search across lines
//!
//! A word is a run of alphanumeric characters or `_`. Line breaks count as
//! separators, so both searches cross lines freely.

use crate::buffer::{byte_offset, Position};

pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn line_text(lines: &[String], line: usize) -> &str {
    lines.get(line - 1).map_or("", String::as_str)
}

/// Position just past the end of the next word at or after `from`
///
/// Returns the end of the buffer when no word follows.
pub fn next_word_end(lines: &[String], from: Position) -> Position {
    let last_line = lines.len().max(1);
    let mut line = from.line.clamp(1, last_line);
    let mut skip = from.col.max(1) - 1;
    let mut in_word = false;

    loop {
        let text = line_text(lines, line);
        let mut col = skip + 1;
        for ch in text.chars().skip(skip) {
            if is_word_char(ch) {
                in_word = true;
            } else if in_word {
                return Position::new(line, col);
            }
            col += 1;
        }

        if in_word || line >= last_line {
            return Position::new(line, text.chars().count() + 1);
        }
        line += 1;
        skip = 0;
    }
}

/// Position of the start of the word before `from`
///
/// Returns the start of the buffer when no word precedes.
pub fn last_word_start(lines: &[String], from: Position) -> Position {
    let last_line = lines.len().max(1);
    let mut line = from.line.clamp(1, last_line);
    let mut end = byte_offset(line_text(lines, line), from.col.max(1));
    let mut in_word = false;

    loop {
        let text = &line_text(lines, line)[..end];
        // `col` is the 1-indexed column just after the char under inspection
        let mut col = text.chars().count() + 1;
        for ch in text.chars().rev() {
            if is_word_char(ch) {
                in_word = true;
            } else if in_word {
                return Position::new(line, col);
            }
            col -= 1;
        }

        if in_word || line == 1 {
            return Position::new(line, 1);
        }
        line -= 1;
        end = line_text(lines, line).len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_next_word_end_within_line() {
        let text = lines("foo bar_baz qux");
        assert_eq!(next_word_end(&text, Position::new(1, 1)), Position::new(1, 4));
        assert_eq!(next_word_end(&text, Position::new(1, 4)), Position::new(1, 12));
        // From inside a word, stop at its end
        assert_eq!(next_word_end(&text, Position::new(1, 6)), Position::new(1, 12));
    }

    #[test]
    fn test_next_word_end_crosses_lines() {
        let text = lines("foo  \n  bar");
        assert_eq!(next_word_end(&text, Position::new(1, 4)), Position::new(2, 6));
    }

    #[test]
    fn test_next_word_end_at_buffer_end() {
        let text = lines("foo\n  ");
        assert_eq!(next_word_end(&text, Position::new(1, 4)), Position::new(2, 3));
        assert_eq!(next_word_end(&text, Position::new(2, 3)), Position::new(2, 3));
    }

    #[test]
    fn test_last_word_start_within_line() {
        let text = lines("foo bar.baz");
        assert_eq!(last_word_start(&text, Position::new(1, 12)), Position::new(1, 9));
        assert_eq!(last_word_start(&text, Position::new(1, 9)), Position::new(1, 5));
        assert_eq!(last_word_start(&text, Position::new(1, 6)), Position::new(1, 5));
    }

    #[test]
    fn test_last_word_start_crosses_lines() {
        let text = lines("foo bar\n   baz");
        assert_eq!(last_word_start(&text, Position::new(2, 4)), Position::new(1, 5));
    }

    #[test]
    fn test_last_word_start_at_buffer_start() {
        let text = lines("  foo");
        assert_eq!(last_word_start(&text, Position::new(1, 3)), Position::new(1, 1));
        assert_eq!(last_word_start(&text, Position::new(1, 1)), Position::new(1, 1));
    }

    #[test]
    fn test_multibyte_columns() {
        let text = lines("héllo wörld");
        assert_eq!(next_word_end(&text, Position::new(1, 1)), Position::new(1, 6));
        assert_eq!(last_word_start(&text, Position::new(1, 12)), Position::new(1, 7));
        assert_eq!(last_word_start(&text, Position::new(1, 7)), Position::new(1, 1));
    }

    #[test]
    fn test_searches_ignore_distant_lines() {
        let mut text = lines("alpha beta");
        text.extend((0..1000).map(|i| format!("filler {}", i)));
        assert_eq!(next_word_end(&text, Position::new(1, 6)), Position::new(1, 11));
        assert_eq!(last_word_start(&text, Position::new(1, 6)), Position::new(1, 1));
        assert_eq!(next_word_end(&text, Position::new(1001, 8)), Position::new(1001, 11));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('_'));
        assert!(is_word_char('9'));
        assert!(is_word_char('é'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(' '));
    }
}
