//! The pane: an edit controller wired to a view
//!
//! A pane owns its controller and its view sink. Every operation runs on the
//! controller and the resulting changes are pushed to the view before the
//! call returns, so the view never lags behind the model.

use input_types::{ActionRecord, ActionSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};
use uuid::Uuid;
use view_types::{PaneView, ViewChange};

use crate::action::Action;
use crate::buffer::Position;
use crate::controller::{ActionOutcome, EditController};
use crate::error::{PaneError, PaneResult};
use crate::settings::PaneSettings;
use crate::snapshot::PaneSnapshot;

/// Unique identifier for a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(Uuid);

impl PaneId {
    /// Creates a new random pane ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a pane ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pane({})", self.0)
    }
}

/// Editing pane driving a [`PaneView`]
pub struct Pane<V: PaneView> {
    id: PaneId,
    name: String,
    tab_name: String,
    top_offset: usize,
    controller: EditController,
    view: V,
    visible: bool,
    active: bool,
}

impl<V: PaneView> Pane<V> {
    /// Creates a pane and pushes its initial layout to `view`
    pub fn new(settings: PaneSettings, view: V) -> PaneResult<Self> {
        let controller = EditController::new(&settings)?;
        let mut pane = Self {
            id: PaneId::new(),
            name: settings.name,
            tab_name: settings.tab_name,
            top_offset: settings.top_offset_px,
            controller,
            view,
            visible: true,
            active: false,
        };

        let layout = pane.controller.layout_changes();
        pane.push(&layout);
        pane.view.set_cursor_blink(false);
        pane.view.set_pane_visible(true);
        debug!(pane = %pane.id, name = %pane.name, "Pane created");
        Ok(pane)
    }

    /// Get the pane ID
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// Get the pane name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the label shown on the pane's tab
    pub fn tab_name(&self) -> &str {
        &self.tab_name
    }

    /// Vertical offset of the pane in its host, in pixels
    pub fn top_offset(&self) -> usize {
        self.top_offset
    }

    /// Stored for the host; layout inside the pane ignores it
    pub fn set_top_offset(&mut self, px: usize) {
        self.top_offset = px;
    }

    /// Get the edit controller
    pub fn controller(&self) -> &EditController {
        &self.controller
    }

    /// Get the view sink
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get the view sink mutably, for hosts that draw on it
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the pane, returning its view
    pub fn into_view(self) -> V {
        self.view
    }

    /// Get the cursor position
    pub fn cursor_position(&self) -> Position {
        self.controller.cursor_position()
    }

    /// Get buffer content as string
    pub fn text(&self) -> String {
        self.controller.text()
    }

    /// Get a complete snapshot of pane state
    pub fn snapshot(&self) -> PaneSnapshot {
        self.controller.snapshot()
    }

    /// Apply a typed action and push its changes to the view
    pub fn apply(&mut self, action: &Action) -> PaneResult<ActionOutcome> {
        let outcome = self.controller.apply(action)?;
        self.push(&outcome.changes);
        Ok(outcome)
    }

    /// Parse an untyped record and apply it; unknown kinds are surfaced as
    /// `UnknownAction`
    pub fn apply_record(&mut self, record: &ActionRecord) -> PaneResult<ActionOutcome> {
        let action = Action::try_from(record).map_err(|err| {
            warn!(pane = %self.id, kind = %record.kind, error = %err, "Rejected action record");
            err
        })?;
        self.apply(&action)
    }

    /// Pull the next action out of `source` and apply it
    ///
    /// Returns `None` once the source is exhausted. Input errors are logged
    /// and returned like action errors so the caller can keep stepping.
    pub fn step<S: ActionSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Option<PaneResult<ActionOutcome>> {
        let result = match source.next_action()? {
            Ok(record) => self.apply_record(&record),
            Err(err) => {
                warn!(pane = %self.id, error = %err, "Input source error");
                Err(PaneError::from(err))
            }
        };
        Some(result)
    }

    /// Pull every action out of `source` and apply them in order
    ///
    /// Returns one result per action. Input and action errors are reported
    /// per entry and do not stop the drain.
    pub fn drain<S: ActionSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Vec<PaneResult<ActionOutcome>> {
        let mut results = Vec::new();
        while let Some(result) = self.step(source) {
            results.push(result);
        }
        results
    }

    /// Place the cursor from a mouse click, ignored while inactive
    pub fn click(&mut self, line: usize, col: usize) -> PaneResult<ActionOutcome> {
        if !self.active {
            trace!(pane = %self.id, line, col, "Click on inactive pane ignored");
            return Ok(ActionOutcome::rejected());
        }
        self.apply(&Action::MoveTo { line, col })
    }

    /// Make `line` the first visible line
    pub fn scroll_to_line(&mut self, line: usize) -> ActionOutcome {
        let outcome = self.controller.scroll_to_line(line);
        self.push(&outcome.changes);
        outcome
    }

    /// Make `col` the first visible column
    pub fn scroll_to_col(&mut self, col: usize) -> ActionOutcome {
        let outcome = self.controller.scroll_to_col(col);
        self.push(&outcome.changes);
        outcome
    }

    /// Resize the visible height, re-checking the scroll position
    pub fn set_height(&mut self, px: usize) -> ActionOutcome {
        let outcome = self.controller.set_height(px);
        self.push(&outcome.changes);
        outcome
    }

    /// Resize the pane width; the gutter keeps its share
    pub fn set_width(&mut self, px: usize) -> ActionOutcome {
        let outcome = self.controller.set_width(px);
        self.push(&outcome.changes);
        outcome
    }

    /// Replace the content, resetting cursor and scroll
    pub fn load_text(&mut self, text: &str) -> ActionOutcome {
        let outcome = self.controller.load_text(text);
        self.push(&outcome.changes);
        debug!(
            pane = %self.id,
            line_count = self.controller.buffer().line_count(),
            "Loaded text"
        );
        outcome
    }

    /// Show the pane
    pub fn show(&mut self) {
        self.visible = true;
        self.view.set_pane_visible(true);
    }

    /// Hide the pane
    pub fn hide(&mut self) {
        self.visible = false;
        self.view.set_pane_visible(false);
    }

    /// Check if the pane is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the pane as focused; the cursor starts blinking
    pub fn set_active(&mut self) {
        self.active = true;
        self.view.set_cursor_blink(true);
    }

    /// Mark the pane as unfocused; the cursor stops blinking
    pub fn set_inactive(&mut self) {
        self.active = false;
        self.view.set_cursor_blink(false);
    }

    /// Check if the pane has focus
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn push(&mut self, changes: &[ViewChange]) {
        for change in changes {
            change.apply(&mut self.view);
        }
    }
}

impl<V: PaneView + fmt::Debug> fmt::Debug for Pane<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("cursor", &self.cursor_position())
            .field("visible", &self.visible)
            .field("active", &self.active)
            .field("view", &self.view)
            .finish()
    }
}
