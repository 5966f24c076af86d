//! Pane settings
//!
//! Settings are plain serializable data with baked-in defaults. Any field
//! missing from a JSON document falls back to its default; fields that are
//! present are taken as given, so an explicit margin of `0` stays `0`.

use serde::{Deserialize, Serialize};

use crate::error::{PaneError, PaneResult};
use crate::viewport::{CharMetrics, Margins};

/// Construction-time settings for a pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSettings {
    pub name: String,
    pub tab_name: String,
    /// Columns kept between the cursor and the left/right edges
    pub horizontal_cursor_margin: usize,
    /// Lines kept between the cursor and the top/bottom edges
    pub vertical_cursor_margin: usize,
    pub height_px: usize,
    pub width_px: usize,
    pub top_offset_px: usize,
    pub char_metrics: CharMetrics,
    pub gutter_visible: bool,
    /// Blank columns added to the line-number width
    pub gutter_padding_cols: usize,
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self {
            name: "untitled".to_string(),
            tab_name: "untitled".to_string(),
            horizontal_cursor_margin: 1,
            vertical_cursor_margin: 1,
            height_px: 480,
            width_px: 640,
            top_offset_px: 0,
            char_metrics: CharMetrics::default(),
            gutter_visible: true,
            gutter_padding_cols: 1,
        }
    }
}

impl PaneSettings {
    /// Parses and validates settings from JSON
    pub fn from_json(json: &str) -> PaneResult<Self> {
        let settings: PaneSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> PaneResult<()> {
        if self.char_metrics.char_width == 0 || self.char_metrics.char_height == 0 {
            return Err(PaneError::InvalidSettings(format!(
                "character metrics must be non-zero, got {}x{}",
                self.char_metrics.char_width, self.char_metrics.char_height
            )));
        }
        Ok(())
    }

    pub fn margins(&self) -> Margins {
        Margins::new(self.horizontal_cursor_margin, self.vertical_cursor_margin)
    }

    pub fn with_size(mut self, width_px: usize, height_px: usize) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    pub fn with_margins(mut self, horizontal: usize, vertical: usize) -> Self {
        self.horizontal_cursor_margin = horizontal;
        self.vertical_cursor_margin = vertical;
        self
    }

    pub fn with_char_metrics(mut self, char_width: usize, char_height: usize) -> Self {
        self.char_metrics = CharMetrics::new(char_width, char_height);
        self
    }

    pub fn with_gutter(mut self, visible: bool) -> Self {
        self.gutter_visible = visible;
        self
    }
}
