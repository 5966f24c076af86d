//! # Pane Core
//!
//! Editing core of a text pane: buffer, cursor, gutter and viewport kept in
//! step by a single edit controller.
//!
//! ## Philosophy
//!
//! - **One mutator**: only the `EditController` touches the components, and
//!   each operation updates all of them in the same call
//! - **Explicit results**: every operation returns the view changes it
//!   caused instead of firing callbacks
//! - **1-indexed everywhere**: lines and columns are 1-indexed at every
//!   public boundary; pixels appear only in the viewport and the view
//! - **Deterministic**: same action sequence => same pane state
//!
//! ## Non-Goals
//!
//! - Loading or saving documents
//! - Selections, multiple cursors, undo/redo
//! - Syntax highlighting
//!
//! ## Example
//!
//! ```
//! use pane_core::{Action, Pane, PaneSettings, Position};
//! use view_types::HeadlessView;
//!
//! let mut pane = Pane::new(PaneSettings::default(), HeadlessView::new(8, 16)).unwrap();
//! pane.apply(&Action::Insert("hello".into())).unwrap();
//! assert_eq!(pane.cursor_position(), Position::new(1, 6));
//! ```

pub mod action;
pub mod buffer;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod gutter;
pub mod pane;
pub mod settings;
pub mod snapshot;
pub mod viewport;
pub mod word;

pub use action::Action;
pub use buffer::{Position, TextBuffer};
pub use controller::{ActionOutcome, EditController};
pub use cursor::Cursor;
pub use error::{PaneError, PaneResult};
pub use gutter::Gutter;
pub use pane::{Pane, PaneId};
pub use settings::PaneSettings;
pub use snapshot::PaneSnapshot;
pub use viewport::{CharMetrics, ContentBounds, Margins, ScrollChange, Viewport};
