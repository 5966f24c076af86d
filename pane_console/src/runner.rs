//! Script runner
//!
//! Replays an action source through a pane backed by a [`HeadlessView`] and
//! collects the rendered frames.

use std::fs;
use std::path::{Path, PathBuf};

use input_types::{ActionSource, KeyError, KeyMap};
use pane_core::{Pane, PaneError, PaneSettings, Position};
use thiserror::Error;
use tracing::{debug, info};
use view_types::HeadlessView;

/// Console error types
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pane(#[from] PaneError),

    #[error(transparent)]
    KeyMap(#[from] KeyError),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

fn read(path: &Path) -> ConsoleResult<String> {
    fs::read_to_string(path).map_err(|source| ConsoleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads pane settings from a JSON file
pub fn load_settings(path: &Path) -> ConsoleResult<PaneSettings> {
    let settings = PaneSettings::from_json(&read(path)?)?;
    debug!(path = %path.display(), name = %settings.name, "Loaded settings");
    Ok(settings)
}

/// Loads a key map from a JSON file, layered over the default bindings
pub fn load_keymap(path: &Path) -> ConsoleResult<KeyMap> {
    let keymap = KeyMap::from_json(&read(path)?)?;
    debug!(path = %path.display(), bindings = keymap.len(), "Loaded key map");
    Ok(keymap)
}

/// Reads a script file
pub fn load_script(path: &Path) -> ConsoleResult<String> {
    read(path)
}

/// Outcome of one replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Frame after each action, only when frames were requested
    pub frames: Vec<String>,
    pub final_frame: String,
    pub cursor: Position,
    pub text: String,
    /// Number of actions applied successfully
    pub applied: usize,
    /// Actions that failed, in order; these never stop the replay
    pub errors: Vec<String>,
}

/// Replays every action of `source` on a fresh pane
pub fn run<S: ActionSource + ?Sized>(
    settings: PaneSettings,
    source: &mut S,
    frames: bool,
) -> ConsoleResult<Report> {
    let metrics = settings.char_metrics;
    let view = HeadlessView::new(metrics.char_width, metrics.char_height);
    let mut pane = Pane::new(settings, view)?;
    pane.set_active();
    info!(pane = %pane.id(), "Replaying script");

    let mut report = Report {
        frames: Vec::new(),
        final_frame: String::new(),
        cursor: Position::origin(),
        text: String::new(),
        applied: 0,
        errors: Vec::new(),
    };

    let mut step = 0;
    while let Some(result) = pane.step(source) {
        step += 1;
        match result {
            Ok(_) => report.applied += 1,
            Err(err) => {
                debug!(step, error = %err, "Action failed");
                report.errors.push(format!("step {}: {}", step, err));
            }
        }
        if frames {
            report.frames.push(pane.view().render());
        }
    }

    report.final_frame = pane.view().render();
    report.cursor = pane.cursor_position();
    report.text = pane.text();
    Ok(report)
}
