//! Log sink errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing to or configuring a log sink.
///
/// Appends that fail inside a drain are reported through `tracing` and
/// counted; they never reach the caller of `emit`.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to append to log sink '{path}': {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid logger configuration: {0}")]
    Config(#[from] serde_json::Error),
}
