//! Error types for dialog invocations.

use thiserror::Error;

/// Failures a dialog can report to its caller.
///
/// Only precondition and terminal-setup failures surface as errors;
/// anything that goes wrong inside a running dialog loop is logged and
/// mapped to a cancelled outcome so the terminal is always restored.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Selection dialog invoked with no enabled choice in the tree.
    #[error("selection dialog requires at least one enabled choice")]
    NoEnabledChoices,

    /// Selection dialog invoked with an empty choice tree.
    #[error("selection dialog requires a non-empty choice tree")]
    EmptyChoiceSet,

    /// Slider invoked with an empty or inverted range.
    #[error("invalid slider range: min {min} > max {max}")]
    InvalidRange {
        /// Lower bound passed by the caller.
        min: i64,
        /// Upper bound passed by the caller.
        max: i64,
    },

    /// Terminal I/O failed.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}
