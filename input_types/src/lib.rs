//! # Input Types
//!
//! This crate defines the input side of a pane: key events, the untyped
//! action records an input source produces, and the key map that turns one
//! into the other.
//!
//! ## Philosophy
//!
//! - **Actions, not keys**: The pane core never sees raw keys, only discrete
//!   action records
//! - **Closed vocabulary**: Action kinds are named constants in [`kinds`];
//!   anything else is reported by the consumer as unknown
//! - **Testable**: Records and key maps are serializable and can be scripted
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw DOM or terminal event capture
//! - IME composition
//! - Mouse handling (a host maps clicks to positions itself)

pub mod key;
pub mod keymap;
pub mod record;
pub mod source;

pub use key::{KeyCode, KeyEvent, KeyState, KeyStroke, Modifiers};
pub use keymap::{KeyError, KeyMap, KeyResult};
pub use record::{kinds, ActionRecord};
pub use source::{ActionSource, KeyEventSource, ScriptedSource};
