//! IO engine abstraction
//!
//! An IO engine issues one positioned read at a time on behalf of the
//! executor. The production engine ([`sync::SyncEngine`]) calls `pread(2)`
//! directly. Unit tests swap in a mock engine that records what it was asked
//! to do without touching the filesystem, and can be told to fail.
//!
//! # Example
//!
//! ```no_run
//! use recsize_bench::engine::{IOEngine, ReadOperation};
//! use recsize_bench::engine::sync::SyncEngine;
//! use std::os::unix::io::AsRawFd;
//!
//! let file = std::fs::File::open("data.bin")?;
//! let mut engine = SyncEngine::new();
//! let mut buffer = vec![0u8; 4096];
//!
//! let bytes = engine.submit(ReadOperation {
//!     target_fd: file.as_raw_fd(),
//!     offset: 0,
//!     buffer: &mut buffer,
//! })?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io;
use std::os::unix::io::RawFd;

#[cfg(test)]
pub(crate) mod mock;
pub mod sync;

/// IO engine trait
///
/// Engines are blocking: `submit` returns once the read has completed or
/// failed. No engine retries a failed read.
pub trait IOEngine {
    /// Issue a single positioned read
    ///
    /// Returns the number of bytes transferred. A count smaller than the
    /// buffer length is returned as-is; deciding whether that is an error
    /// is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the read syscall fails.
    fn submit(&mut self, op: ReadOperation<'_>) -> io::Result<usize>;

    /// Short engine name for diagnostics
    fn name(&self) -> &'static str;
}

/// Read operation descriptor
///
/// The buffer length is the number of bytes requested.
#[derive(Debug)]
pub struct ReadOperation<'a> {
    /// File descriptor of the target file
    pub target_fd: RawFd,

    /// Byte offset within the file where the read starts
    pub offset: u64,

    /// Destination; its contents are never inspected by the executor
    pub buffer: &'a mut [u8],
}

impl ReadOperation<'_> {
    /// Number of bytes requested
    #[inline(always)]
    pub fn length(&self) -> usize {
        self.buffer.len()
    }
}
