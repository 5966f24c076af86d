//! Pane error taxonomy

use input_types::KeyError;
use thiserror::Error;

/// Pane error
///
/// `OutOfRange` and `InvariantViolation` come from direct buffer access and
/// indicate a caller bug; they are always propagated, never swallowed.
#[derive(Debug, Error)]
pub enum PaneError {
    #[error("{what} {index} out of range [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        index: usize,
        min: usize,
        max: usize,
    },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action {kind} is missing its {field}")]
    MalformedAction { kind: String, field: &'static str },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(#[from] KeyError),
}

/// Pane result
pub type PaneResult<T> = Result<T, PaneError>;

impl PaneError {
    pub(crate) fn out_of_range(what: &'static str, index: usize, min: usize, max: usize) -> Self {
        PaneError::OutOfRange {
            what,
            index,
            min,
            max,
        }
    }
}
