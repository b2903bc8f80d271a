//! Error types for the board crate.

use thiserror::Error;

/// Errors from board operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BoardError {
    /// A stroke was started while another one was still in progress.
    #[error("A {0} stroke is already in progress")]
    StrokeInProgress(qsketch_ir::ToolKind),

    /// A stroke was extended or finished without being started.
    #[error("No stroke in progress")]
    NoStrokeInProgress,
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
