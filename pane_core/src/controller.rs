//! Edit controller
//!
//! The controller is the only mutator of the buffer, cursor, gutter and
//! viewport. Every operation is one transaction: it mutates the components,
//! keeps the gutter in lockstep with the buffer, runs the scroll check and
//! returns the full list of view changes needed to mirror the new state.

use tracing::{trace, warn};
use view_types::ViewChange;

use crate::action::Action;
use crate::buffer::{byte_offset, Position, TextBuffer};
use crate::cursor::Cursor;
use crate::error::PaneResult;
use crate::gutter::Gutter;
use crate::settings::PaneSettings;
use crate::snapshot::PaneSnapshot;
use crate::viewport::{ContentBounds, Margins, Viewport};
use crate::word;

/// Result of one controller operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// View updates, in the order they must be applied
    pub changes: Vec<ViewChange>,
    pub cursor_moved: bool,
    pub scrolled: bool,
    /// False when the operation was rejected and state left unchanged
    pub accepted: bool,
}

impl ActionOutcome {
    pub fn rejected() -> Self {
        Self {
            changes: Vec::new(),
            cursor_moved: false,
            scrolled: false,
            accepted: false,
        }
    }

    /// True when nothing observable changed
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }
}

/// State captured at the start of a transaction
struct Checkpoint {
    position: Position,
    visible_width: usize,
    visible_height: usize,
}

/// Coordinates buffer, cursor, gutter and viewport
#[derive(Debug, Clone)]
pub struct EditController {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    gutter: Gutter,
    margins: Margins,
    pane_width: usize,
    pane_height: usize,
    /// Left edge of the text area in pixels, equal to the gutter width
    left_offset: usize,
    pending: Vec<ViewChange>,
}

impl EditController {
    /// Creates an empty controller laid out from `settings`
    pub fn new(settings: &PaneSettings) -> PaneResult<Self> {
        settings.validate()?;
        let metrics = settings.char_metrics;
        let gutter = Gutter::new(
            metrics.char_width,
            settings.gutter_padding_cols,
            settings.gutter_visible,
        );
        let left_offset = gutter.width();
        let viewport = Viewport::new(
            metrics,
            settings.width_px.saturating_sub(left_offset),
            settings.height_px,
        );

        Ok(Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            viewport,
            gutter,
            margins: settings.margins(),
            pane_width: settings.width_px,
            pane_height: settings.height_px,
            left_offset,
            pending: Vec::new(),
        })
    }

    /// Creates a controller holding `text`, cursor at the origin
    pub fn with_text(settings: &PaneSettings, text: &str) -> PaneResult<Self> {
        let mut controller = Self::new(settings)?;
        controller.load_text(text);
        Ok(controller)
    }

    // Public accessors for rendering/testing
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Left edge of the text area in pixels
    pub fn left_offset(&self) -> usize {
        self.left_offset
    }

    /// Full pane width in pixels, gutter included
    pub fn pane_width(&self) -> usize {
        self.pane_width
    }

    pub fn pane_height(&self) -> usize {
        self.pane_height
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    /// Get buffer content as string
    pub fn text(&self) -> String {
        self.buffer.as_string()
    }

    /// Dispatch a typed action
    pub fn apply(&mut self, action: &Action) -> PaneResult<ActionOutcome> {
        match action {
            Action::Insert(text) => self.insert(text),
            Action::InsertNewLine => self.insert_new_line(),
            Action::DeleteBackChar => self.delete_back_char(),
            Action::DeleteForwardChar => self.delete_forward_char(),
            Action::KillLine => self.kill_line(),
            Action::MoveTo { line, col } => self.move_cursor_to(*line, *col),
            Action::MoveLeft => self.move_cursor_left(),
            Action::MoveRight => self.move_cursor_right(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::MoveForwardWord => self.move_cursor_forward_word(),
            Action::MoveBackWord => self.move_cursor_back_word(),
            Action::MoveBeginningOfLine => self.move_cursor_beginning_of_line(),
            Action::MoveEndOfLine => self.move_cursor_end_of_line(),
            Action::ShowGutter => Ok(self.show_gutter()),
            Action::HideGutter => Ok(self.hide_gutter()),
        }
    }

    // Edits

    /// Insert text at the cursor, splitting lines at each `\n`
    pub fn insert(&mut self, text: &str) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.split_line()?;
            }
            self.insert_segment(segment)?;
        }
        Ok(self.finish(start))
    }

    pub fn insert_new_line(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        self.split_line()?;
        Ok(self.finish(start))
    }

    pub fn delete_back_char(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let Position { line, col } = self.cursor.position();

        if col == 1 {
            if line == 1 {
                trace!("Delete back at start of buffer");
            } else {
                let prev_width = self.buffer.line_width(line - 1)?;
                self.merge_next_into(line - 1)?;
                self.cursor.move_to(line - 1, prev_width + 1);
            }
        } else {
            let mut text = self.buffer.line(line)?.to_string();
            let at = byte_offset(&text, col - 1);
            text.remove(at);
            self.write_line(line, text)?;
            self.cursor.move_left();
        }

        Ok(self.finish(start))
    }

    pub fn delete_forward_char(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let Position { line, col } = self.cursor.position();

        if col > self.buffer.line_width(line)? {
            if line == self.buffer.line_count() {
                trace!("Delete forward at end of buffer");
            } else {
                self.merge_next_into(line)?;
            }
        } else {
            let mut text = self.buffer.line(line)?.to_string();
            let at = byte_offset(&text, col);
            text.remove(at);
            self.write_line(line, text)?;
        }

        Ok(self.finish(start))
    }

    /// Truncate the line at the cursor, or join the next line when the
    /// cursor is already at the end
    pub fn kill_line(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let Position { line, col } = self.cursor.position();

        if col > self.buffer.line_width(line)? {
            if line == self.buffer.line_count() {
                trace!("Kill line at end of buffer");
            } else {
                self.merge_next_into(line)?;
            }
        } else {
            let mut text = self.buffer.line(line)?.to_string();
            text.truncate(byte_offset(&text, col));
            self.write_line(line, text)?;
        }

        Ok(self.finish(start))
    }

    // Movement

    pub fn move_cursor_left(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let Position { line, col } = self.cursor.position();

        if col > 1 {
            self.cursor.move_left();
        } else if line > 1 {
            let width = self.buffer.line_width(line - 1)?;
            self.cursor.move_to(line - 1, width + 1);
        } else {
            trace!("Cursor already at start of buffer");
        }

        Ok(self.finish(start))
    }

    pub fn move_cursor_right(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let Position { line, col } = self.cursor.position();

        if col <= self.buffer.line_width(line)? {
            self.cursor.move_right();
        } else if line < self.buffer.line_count() {
            self.cursor.move_to(line + 1, 1);
        } else {
            trace!("Cursor already at end of buffer");
        }

        Ok(self.finish(start))
    }

    pub fn move_cursor_up(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();

        if self.cursor.line() > 1 {
            self.cursor.move_up();
            self.clamp_to_line()?;
        } else {
            trace!("Cursor already on first line");
        }

        Ok(self.finish(start))
    }

    pub fn move_cursor_down(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();

        if self.cursor.line() < self.buffer.line_count() {
            self.cursor.move_down();
            self.clamp_to_line()?;
        } else {
            trace!("Cursor already on last line");
        }

        Ok(self.finish(start))
    }

    /// Jump to a position
    ///
    /// An out-of-range target is rejected: the outcome is not accepted and
    /// no state changes.
    pub fn move_cursor_to(&mut self, line: usize, col: usize) -> PaneResult<ActionOutcome> {
        let target = Position::new(line, col);
        if !self.buffer.contains(target) {
            warn!(
                to = %target,
                line_count = self.buffer.line_count(),
                "Rejected cursor move out of range"
            );
            return Ok(ActionOutcome::rejected());
        }

        let start = self.begin();
        self.cursor.move_to(line, col);
        Ok(self.finish(start))
    }

    pub fn move_cursor_forward_word(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let to = word::next_word_end(self.buffer.lines(), self.cursor.position());
        self.cursor.move_to(to.line, to.col);
        Ok(self.finish(start))
    }

    pub fn move_cursor_back_word(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let to = word::last_word_start(self.buffer.lines(), self.cursor.position());
        self.cursor.move_to(to.line, to.col);
        Ok(self.finish(start))
    }

    pub fn move_cursor_beginning_of_line(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        self.cursor.set_col(1);
        Ok(self.finish(start))
    }

    pub fn move_cursor_end_of_line(&mut self) -> PaneResult<ActionOutcome> {
        let start = self.begin();
        let width = self.buffer.line_width(self.cursor.line())?;
        self.cursor.set_col(width + 1);
        Ok(self.finish(start))
    }

    // Layout

    pub fn show_gutter(&mut self) -> ActionOutcome {
        let start = self.begin();
        if self.gutter.show() {
            self.pending.push(ViewChange::GutterVisible(true));
        }
        self.finish(start)
    }

    pub fn hide_gutter(&mut self) -> ActionOutcome {
        let start = self.begin();
        if self.gutter.hide() {
            self.pending.push(ViewChange::GutterVisible(false));
        }
        self.finish(start)
    }

    /// Make `line` the first visible line
    pub fn scroll_to_line(&mut self, line: usize) -> ActionOutcome {
        let start = self.begin();
        if self.viewport.scroll_to_line(line) {
            self.pending.push(ViewChange::ScrollTop(self.viewport.scroll_top()));
        }
        self.finish(start)
    }

    /// Make `col` the first visible column
    pub fn scroll_to_col(&mut self, col: usize) -> ActionOutcome {
        let start = self.begin();
        if self.viewport.scroll_to_col(col) {
            self.pending.push(ViewChange::ScrollLeft(self.viewport.scroll_left()));
        }
        self.finish(start)
    }

    /// Resize the visible height and re-check the scroll position
    pub fn set_height(&mut self, px: usize) -> ActionOutcome {
        let start = self.begin();
        self.pane_height = px;
        if self.viewport.visible_height() != px {
            self.viewport.set_visible_height(px);
            self.pending.push(ViewChange::VisibleHeight(px));
        }
        self.finish(start)
    }

    /// Resize the pane; the text area gets what the gutter leaves
    pub fn set_width(&mut self, px: usize) -> ActionOutcome {
        let start = self.begin();
        self.pane_width = px;
        let visible = px.saturating_sub(self.left_offset);
        if self.viewport.visible_width() != visible {
            self.viewport.set_visible_width(visible);
            self.pending.push(ViewChange::VisibleWidth(visible));
        }
        self.finish(start)
    }

    /// Replace the whole content, resetting cursor, scroll and gutter
    pub fn load_text(&mut self, text: &str) -> ActionOutcome {
        let from = self.cursor.position();
        let was_scrolled = self.viewport.scroll_top() != 0 || self.viewport.scroll_left() != 0;
        let old_count = self.buffer.line_count();

        self.buffer = TextBuffer::from_text(text);
        self.cursor = Cursor::new();
        self.viewport.reset();
        self.gutter.reset(self.buffer.line_count());
        self.left_offset = self.gutter.width();
        self.viewport
            .set_visible_width(self.pane_width.saturating_sub(self.left_offset));
        self.pending.clear();

        let mut changes: Vec<ViewChange> = (2..=old_count)
            .rev()
            .map(|line| ViewChange::RemoveLine { line })
            .collect();
        changes.extend(self.layout_changes());

        ActionOutcome {
            changes,
            cursor_moved: from != self.cursor.position(),
            scrolled: was_scrolled,
            accepted: true,
        }
    }

    /// Every change needed to bring a fresh view in sync with this state
    pub fn layout_changes(&self) -> Vec<ViewChange> {
        let mut changes = vec![
            ViewChange::GutterVisible(self.gutter.is_visible()),
            ViewChange::LeftOffset(self.left_offset),
            ViewChange::VisibleHeight(self.viewport.visible_height()),
            ViewChange::VisibleWidth(self.viewport.visible_width()),
        ];
        for (i, text) in self.buffer.lines().iter().enumerate() {
            let line = i + 1;
            let text = text.clone();
            if line == 1 {
                changes.push(ViewChange::SetLine { line, text });
            } else {
                changes.push(ViewChange::InsertLine { line, text });
            }
        }
        let cursor = self.cursor.position();
        changes.extend([
            ViewChange::GutterLineCount(self.gutter.line_count()),
            ViewChange::ActiveLine(self.gutter.active_line()),
            ViewChange::Cursor {
                line: cursor.line,
                col: cursor.col,
            },
            ViewChange::ScrollTop(self.viewport.scroll_top()),
            ViewChange::ScrollLeft(self.viewport.scroll_left()),
        ]);
        changes
    }

    /// Get a complete snapshot of controller state (for replay testing)
    pub fn snapshot(&self) -> PaneSnapshot {
        PaneSnapshot {
            lines: self.buffer.lines().to_vec(),
            cursor: self.cursor.position(),
            goal_col: self.cursor.goal_col(),
            scroll_top: self.viewport.scroll_top(),
            scroll_left: self.viewport.scroll_left(),
            gutter_line_count: self.gutter.line_count(),
            active_line: self.gutter.active_line(),
            gutter_visible: self.gutter.is_visible(),
        }
    }

    // Transaction plumbing

    fn begin(&mut self) -> Checkpoint {
        self.pending.clear();
        Checkpoint {
            position: self.cursor.position(),
            visible_width: self.viewport.visible_width(),
            visible_height: self.viewport.visible_height(),
        }
    }

    /// Sync gutter layout and active line, report the cursor move and run
    /// the scroll check when the cursor, the text or the layout changed
    fn finish(&mut self, start: Checkpoint) -> ActionOutcome {
        self.relayout();

        if self.gutter.set_active_line(self.cursor.line()) {
            self.pending
                .push(ViewChange::ActiveLine(self.gutter.active_line()));
        }

        let to = self.cursor.position();
        let cursor_moved = to != start.position;
        if cursor_moved {
            trace!(
                from = %start.position,
                to = %to,
                goal_col = self.cursor.goal_col(),
                "Moving cursor"
            );
            self.pending.push(ViewChange::Cursor {
                line: to.line,
                col: to.col,
            });
        }

        let layout_changed = self.viewport.visible_width() != start.visible_width
            || self.viewport.visible_height() != start.visible_height;
        let text_changed = self.pending.iter().any(ViewChange::is_text_change);
        if cursor_moved || text_changed || layout_changed {
            self.check_scroll();
        }

        let changes = std::mem::take(&mut self.pending);
        let scrolled = changes.iter().any(ViewChange::is_scroll);
        ActionOutcome {
            changes,
            cursor_moved,
            scrolled,
            accepted: true,
        }
    }

    /// Bring the left offset and visible width in line with the gutter width
    fn relayout(&mut self) {
        let width = self.gutter.width();
        if width == self.left_offset {
            return;
        }
        self.left_offset = width;
        let visible = self.pane_width.saturating_sub(width);
        self.viewport.set_visible_width(visible);
        self.pending.push(ViewChange::LeftOffset(width));
        self.pending.push(ViewChange::VisibleWidth(visible));
    }

    fn check_scroll(&mut self) {
        let bounds = ContentBounds {
            last_line: self.buffer.line_count(),
            last_col: self.buffer.longest_line_width() + 1,
        };
        let change = self
            .viewport
            .scroll_into_view(self.cursor.position(), self.margins, bounds);
        if let Some(left) = change.left {
            self.pending.push(ViewChange::ScrollLeft(left));
        }
        if let Some(top) = change.top {
            self.pending.push(ViewChange::ScrollTop(top));
        }
    }

    fn clamp_to_line(&mut self) -> PaneResult<()> {
        let width = self.buffer.line_width(self.cursor.line())?;
        self.cursor.clamp_col(width + 1);
        Ok(())
    }

    fn insert_segment(&mut self, segment: &str) -> PaneResult<()> {
        if segment.is_empty() {
            return Ok(());
        }
        let Position { line, col } = self.cursor.position();
        let mut text = self.buffer.line(line)?.to_string();
        text.insert_str(byte_offset(&text, col), segment);
        self.write_line(line, text)?;
        self.cursor.set_col(col + segment.chars().count());
        Ok(())
    }

    /// Split the cursor line at the cursor; cursor lands at the start of
    /// the new line
    fn split_line(&mut self) -> PaneResult<()> {
        let Position { line, col } = self.cursor.position();
        let mut head = self.buffer.line(line)?.to_string();
        let tail = head.split_off(byte_offset(&head, col));
        self.write_line(line, head)?;
        self.insert_line(line + 1, tail)?;
        self.cursor.move_to(line + 1, 1);
        Ok(())
    }

    /// Append line `line + 1` to line `line` and remove it
    fn merge_next_into(&mut self, line: usize) -> PaneResult<()> {
        let next = self.buffer.line(line + 1)?.to_string();
        let mut text = self.buffer.line(line)?.to_string();
        text.push_str(&next);
        self.write_line(line, text)?;
        self.remove_line(line + 1)
    }

    fn write_line(&mut self, line: usize, text: String) -> PaneResult<()> {
        self.buffer.set_line(line, text.as_str())?;
        self.pending.push(ViewChange::SetLine { line, text });
        Ok(())
    }

    fn insert_line(&mut self, line: usize, text: String) -> PaneResult<()> {
        self.buffer.insert_line(line, text.as_str())?;
        self.gutter.append_line();
        self.pending.push(ViewChange::InsertLine { line, text });
        self.pending
            .push(ViewChange::GutterLineCount(self.gutter.line_count()));
        Ok(())
    }

    fn remove_line(&mut self, line: usize) -> PaneResult<()> {
        self.buffer.delete_line(line)?;
        self.gutter.remove_line()?;
        self.pending.push(ViewChange::RemoveLine { line });
        self.pending
            .push(ViewChange::GutterLineCount(self.gutter.line_count()));
        Ok(())
    }
}
