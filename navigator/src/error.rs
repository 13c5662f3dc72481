//! Error taxonomy for the navigation core.
//!
//! Only conditions that abort a run (or a read) are errors. Out-of-range grid
//! moves and signal exhaustion mid-scan are ordinary step outcomes and never
//! surface through this type from the automaton.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Environment or start position violates a construction invariant.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A signal sample outside `{0, 1}` was about to be read.
    #[error("invalid signal value {value} at index {index} (expected 0 or 1)")]
    InvalidSignalValue { index: usize, value: i64 },

    /// Signal text contained something other than an integer.
    #[error("invalid signal token '{token}'")]
    InvalidSignalToken { token: String },

    /// Cursor points past the last sample.
    #[error("signal exhausted at cursor {cursor} (length {len})")]
    Exhausted { cursor: usize, len: usize },
}

impl NavError {
    pub fn configuration(message: impl Into<String>) -> Self {
        NavError::Configuration(message.into())
    }
}
