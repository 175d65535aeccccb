//! Code generator error types.

use thiserror::Error;

/// Result type for code generator operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that can occur while selecting a generator.
///
/// Generation itself is infallible; errors only arise from resolving
/// user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The technology slug is not recognised.
    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    /// The output format name is not recognised.
    #[error("Unknown code format: {0}")]
    UnknownFormat(String),
}
