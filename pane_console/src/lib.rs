//! # Pane Console
//!
//! Headless host for the pane core. It loads settings and a key map, replays
//! a script through a pane and prints the rendered frames.
//!
//! It is NOT an interactive terminal editor; raw terminal input is out of
//! scope.

pub mod runner;
pub mod script;

pub use runner::{load_keymap, load_script, load_settings, run, ConsoleError, ConsoleResult, Report};
pub use script::{parse_keys, parse_records, ScriptError, ScriptResult};
