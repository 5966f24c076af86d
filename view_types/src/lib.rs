//! # View Types
//!
//! This crate defines the render side of a pane: the [`PaneView`] sink the
//! pane core drives, the [`ViewChange`] vocabulary it drives it with, and a
//! [`HeadlessView`] that renders text frames for tests and console hosts.
//!
//! ## Philosophy
//!
//! - **Views mirror, never decide**: All text and positions come from the
//!   core; a view only displays them
//! - **One coordinate convention**: Lines and columns are 1-indexed, pixel
//!   offsets are 0-based
//! - **Testable**: Changes are plain values and can be recorded or
//!   snapshot-tested
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A DOM or pixel renderer
//! - Syntax highlighting
//! - A layout engine

pub mod change;
pub mod headless;

pub use change::{PaneView, ViewChange};
pub use headless::{digits, HeadlessView};
