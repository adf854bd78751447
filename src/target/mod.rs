//! Read targets
//!
//! A target is the file the workload reads from. It is opened read-only
//! after the arguments have been validated and stays open for the rest of
//! the run. Dropping a target closes it, so the handle is released exactly
//! once on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use recsize_bench::target::{Target, OpenFlags};
//! use recsize_bench::target::file::FileTarget;
//!
//! let target = FileTarget::open("data.bin", OpenFlags::default())?;
//! let size = target.size();
//! # Ok::<(), recsize_bench::BenchError>(())
//! ```

use crate::config::FadviseHint;
use crate::Result;
use std::os::unix::io::RawFd;
use std::path::Path;

pub mod file;

#[cfg(test)]
pub(crate) mod mock;

/// Target trait for read targets
///
/// Everything the validator and the executor need from an opened file: its
/// path for diagnostics, its size for working-set validation, and a
/// descriptor for positioned reads.
pub trait Target {
    /// Path the target was opened from
    fn path(&self) -> &Path;

    /// Get file descriptor for IO operations
    fn fd(&self) -> RawFd;

    /// Get target size in bytes, as reported when it was opened
    fn size(&self) -> u64;

    /// Apply an fadvise hint covering the whole target
    ///
    /// Some filesystems ignore hints without reporting an error.
    fn apply_fadvise(&self, hint: FadviseHint) -> Result<()>;

    /// Get logical block size for O_DIRECT alignment
    ///
    /// Default implementation returns 512 (safest, most compatible).
    fn logical_block_size(&self) -> u64 {
        512
    }
}

/// Open flags for targets
///
/// Targets are always opened read-only; the only choice is whether the page
/// cache is bypassed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenFlags {
    /// Use direct IO (O_DIRECT) - bypass page cache
    pub direct: bool,
}
