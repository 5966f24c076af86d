//! Viewport bounds and the scroll-into-view algorithm
//!
//! Scroll offsets are pixels; everything the algorithm reasons about is in
//! 1-indexed lines and columns, converted through the character metrics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::Position;

/// Size of one character cell in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharMetrics {
    pub char_width: usize,
    pub char_height: usize,
}

impl CharMetrics {
    pub const fn new(char_width: usize, char_height: usize) -> Self {
        Self {
            char_width,
            char_height,
        }
    }
}

impl Default for CharMetrics {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

/// Minimum distance, in columns and lines, the cursor keeps from the
/// viewport edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub horizontal: usize,
    pub vertical: usize,
}

impl Margins {
    pub const fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Last line and last column the viewport may scroll to reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub last_line: usize,
    pub last_col: usize,
}

/// New scroll offsets produced by a scroll check, `None` when an axis did
/// not move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollChange {
    pub top: Option<usize>,
    pub left: Option<usize>,
}

impl ScrollChange {
    pub fn is_none(&self) -> bool {
        self.top.is_none() && self.left.is_none()
    }
}

/// Visible window over the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    metrics: CharMetrics,
    scroll_top: usize,
    scroll_left: usize,
    visible_height: usize,
    visible_width: usize,
}

impl Viewport {
    /// Metrics must be non-zero; settings validation guarantees this
    pub fn new(metrics: CharMetrics, visible_width: usize, visible_height: usize) -> Self {
        debug_assert!(metrics.char_width > 0 && metrics.char_height > 0);
        Self {
            metrics,
            scroll_top: 0,
            scroll_left: 0,
            visible_height,
            visible_width,
        }
    }

    pub fn metrics(&self) -> CharMetrics {
        self.metrics
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> usize {
        self.scroll_left
    }

    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    pub fn visible_width(&self) -> usize {
        self.visible_width
    }

    pub fn set_visible_height(&mut self, px: usize) {
        self.visible_height = px;
    }

    pub fn set_visible_width(&mut self, px: usize) {
        self.visible_width = px;
    }

    pub fn first_visible_line(&self) -> usize {
        (self.scroll_top / self.metrics.char_height).saturating_add(1)
    }

    pub fn visible_height_lines(&self) -> usize {
        self.visible_height / self.metrics.char_height
    }

    /// May be past the end of the content
    pub fn last_visible_line(&self) -> usize {
        self.first_visible_line()
            .saturating_add(self.visible_height_lines())
            .saturating_sub(1)
    }

    pub fn first_visible_col(&self) -> usize {
        (self.scroll_left / self.metrics.char_width).saturating_add(1)
    }

    pub fn visible_width_cols(&self) -> usize {
        self.visible_width / self.metrics.char_width
    }

    pub fn last_visible_col(&self) -> usize {
        self.first_visible_col()
            .saturating_add(self.visible_width_cols())
            .saturating_sub(1)
    }

    /// Make `line` the first visible line. Returns true if the offset changed.
    ///
    /// The window may sit past the content; offsets saturate at `usize::MAX`.
    pub fn scroll_to_line(&mut self, line: usize) -> bool {
        let top = (line.max(1) - 1).saturating_mul(self.metrics.char_height);
        let changed = top != self.scroll_top;
        self.scroll_top = top;
        changed
    }

    /// Make `col` the first visible column. Returns true if the offset changed.
    pub fn scroll_to_col(&mut self, col: usize) -> bool {
        let left = (col.max(1) - 1).saturating_mul(self.metrics.char_width);
        let changed = left != self.scroll_left;
        self.scroll_left = left;
        changed
    }

    pub fn reset(&mut self) {
        self.scroll_top = 0;
        self.scroll_left = 0;
    }

    /// Scroll the minimum amount that brings `cursor` back inside the margins
    ///
    /// Axes are handled independently. Running this again without moving the
    /// cursor returns an empty change.
    pub fn scroll_into_view(
        &mut self,
        cursor: Position,
        margins: Margins,
        bounds: ContentBounds,
    ) -> ScrollChange {
        let mut change = ScrollChange::default();

        if let Some(first_col) = axis_target(
            cursor.col,
            self.first_visible_col(),
            self.visible_width_cols(),
            margins.horizontal,
            bounds.last_col,
        ) {
            if self.scroll_to_col(first_col) {
                debug!(first_col, cursor = %cursor, "Scrolled horizontally");
                change.left = Some(self.scroll_left);
            }
        }

        if let Some(first_line) = axis_target(
            cursor.line,
            self.first_visible_line(),
            self.visible_height_lines(),
            margins.vertical,
            bounds.last_line,
        ) {
            if self.scroll_to_line(first_line) {
                debug!(first_line, cursor = %cursor, "Scrolled vertically");
                change.top = Some(self.scroll_top);
            }
        }

        change
    }
}

/// New first visible unit on one axis, or `None` when the cursor is inside
/// the margins
///
/// The margin is capped at `(visible - 1) / 2` so a window too small for
/// both margins still has a stable position for every cursor.
fn axis_target(
    cursor: usize,
    first: usize,
    visible: usize,
    margin: usize,
    last_content: usize,
) -> Option<usize> {
    if visible == 0 {
        return None;
    }
    let margin = margin.min((visible - 1) / 2);
    let last = first.saturating_add(visible - 1);

    if cursor < first.saturating_add(margin) {
        Some(cursor.saturating_sub(margin).max(1))
    } else if cursor.saturating_add(margin) > last {
        let new_last = cursor.saturating_add(margin).min(last_content.max(cursor));
        Some((new_last + 1).saturating_sub(visible).max(1))
    } else {
        None
    }
}
