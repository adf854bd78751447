//! Error taxonomy
//!
//! Every failure is terminal for a run. Variants map onto the stage that
//! detected them: argument handling, file validation, parameter validation,
//! and the read loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring, validating, or executing a workload
#[derive(Debug, Error)]
pub enum BenchError {
    /// Missing, unknown, or malformed arguments
    #[error("{0}")]
    Configuration(String),

    /// Target file cannot host a working set (absent, unopenable, empty)
    #[error("invalid file '{}': {reason}", .path.display())]
    InvalidFile { path: PathBuf, reason: String },

    /// Target file is smaller than the requested working set
    #[error("file_size={file_size} is smaller than total_bytes={total_bytes}")]
    InsufficientFile { file_size: u64, total_bytes: u64 },

    /// Sizes are individually valid but do not form a runnable workload
    #[error("{0}")]
    InvalidParameters(String),

    /// The read buffer could not be allocated
    #[error("failed to allocate read buffer (record_size={size})")]
    BufferAllocation { size: usize },

    /// A positioned read failed
    #[error("pread failed (offset={offset}, size={size}): {source}")]
    ReadFailure {
        offset: u64,
        size: usize,
        #[source]
        source: io::Error,
    },
}

impl BenchError {
    pub(crate) fn invalid_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        BenchError::InvalidFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
