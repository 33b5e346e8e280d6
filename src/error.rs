use std::io;

use thiserror::Error;

/// Failures a transform run can hit. Every variant is terminal for the run,
/// there are no retries.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A filter-mode line that doesn't split into a non-empty address and a
    /// non-empty port on its first colon.
    #[error("line {line_number}: expected `address:port`, got {line:?}")]
    MalformedLine { line_number: usize, line: String },
}
