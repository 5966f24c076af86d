//! Pane snapshot for deterministic replay testing

use serde::{Deserialize, Serialize};

use crate::buffer::Position;

/// Complete observable pane state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub goal_col: usize,
    pub scroll_top: usize,
    pub scroll_left: usize,
    pub gutter_line_count: usize,
    pub active_line: usize,
    pub gutter_visible: bool,
}

impl PaneSnapshot {
    /// Compute a deterministic hash of the snapshot state
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for line in &self.lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        for value in [
            self.cursor.line,
            self.cursor.col,
            self.goal_col,
            self.scroll_top,
            self.scroll_left,
            self.gutter_line_count,
            self.active_line,
        ] {
            hasher.update(value.to_le_bytes());
        }
        hasher.update([self.gutter_visible as u8]);

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::EditController;
    use crate::settings::PaneSettings;

    fn replay(script: &[&str]) -> EditController {
        let mut controller = EditController::new(&PaneSettings::default()).unwrap();
        for step in script {
            match *step {
                "\n" => controller.insert_new_line().unwrap(),
                "<" => controller.move_cursor_left().unwrap(),
                "^" => controller.move_cursor_up().unwrap(),
                "del" => controller.delete_back_char().unwrap(),
                text => controller.insert(text).unwrap(),
            };
        }
        controller
    }

    #[test]
    fn test_replay_hash_deterministic() {
        let script = ["hello", "\n", "world", "^", "<", "del", "X"];
        let first = replay(&script).snapshot();
        let second = replay(&script).snapshot();
        assert_eq!(first.hash(), second.hash(), "Hash should be deterministic");
        assert_eq!(first.lines, vec!["helXo", "world"]);
    }

    #[test]
    fn test_hash_differs_for_different_state() {
        let first = replay(&["ab"]).snapshot();
        let second = replay(&["ab", "<"]).snapshot();
        assert_eq!(first.lines, second.lines);
        assert_ne!(first.hash(), second.hash(), "Different states should have different hashes");
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = replay(&["x"]).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""lines":["x"]"#));
    }
}
