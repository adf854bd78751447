//! File target implementation
//!
//! Regular files on local and network filesystems, opened read-only with an
//! optional `O_DIRECT` flag.
//!
//! # Example
//!
//! ```no_run
//! use recsize_bench::target::{Target, OpenFlags};
//! use recsize_bench::target::file::FileTarget;
//!
//! let target = FileTarget::open("/tmp/testfile", OpenFlags { direct: true })?;
//! let fd = target.fd();
//! let size = target.size();
//! // Closed when `target` is dropped
//! # Ok::<(), recsize_bench::BenchError>(())
//! ```

use super::{OpenFlags, Target};
use crate::config::FadviseHint;
use crate::error::BenchError;
use crate::Result;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::{MetadataExt, OpenOptionsExt};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

/// Read-only handle on a regular file plus its size
#[derive(Debug)]
pub struct FileTarget {
    path: PathBuf,

    /// Owned handle; closing happens when this is dropped
    file: File,

    /// File size reported by fstat at open time
    size: u64,

    /// Logical block size for O_DIRECT alignment (detected at open)
    logical_block_size: u64,
}

impl FileTarget {
    /// Open an existing file read-only and query its size
    ///
    /// # Errors
    ///
    /// Returns `InvalidFile` if the file cannot be opened, cannot be
    /// stat-ed, or is not a regular file.
    pub fn open(path: impl AsRef<Path>, flags: OpenFlags) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.read(true);
        if flags.direct {
            options.custom_flags(libc::O_DIRECT);
        }

        let file = options
            .open(&path)
            .map_err(|e| BenchError::invalid_file(&path, format!("failed to open: {}", e)))?;

        let metadata = file
            .metadata()
            .map_err(|e| BenchError::invalid_file(&path, format!("fstat failed: {}", e)))?;

        if !metadata.is_file() {
            return Err(BenchError::invalid_file(&path, "not a regular file"));
        }

        let logical_block_size = detect_logical_block_size(metadata.blksize());

        log::debug!(
            "opened {} (size={}, direct={}, logical_block_size={})",
            path.display(),
            metadata.len(),
            flags.direct,
            logical_block_size
        );

        Ok(Self {
            path,
            file,
            size: metadata.len(),
            logical_block_size,
        })
    }
}

/// Pick the O_DIRECT alignment from the filesystem's preferred IO size
///
/// st_blksize is used if it's a power of 2 and >= 512, otherwise 512.
/// BLKSSZGET is not tried since it only answers for block devices.
fn detect_logical_block_size(blksize: u64) -> u64 {
    if blksize >= 512 && blksize.is_power_of_two() {
        blksize
    } else {
        512
    }
}

impl Target for FileTarget {
    fn path(&self) -> &Path {
        &self.path
    }

    fn fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn apply_fadvise(&self, hint: FadviseHint) -> Result<()> {
        let advice = match hint {
            FadviseHint::None => return Ok(()),
            FadviseHint::Sequential => libc::POSIX_FADV_SEQUENTIAL,
            FadviseHint::Random => libc::POSIX_FADV_RANDOM,
            FadviseHint::DontNeed => libc::POSIX_FADV_DONTNEED,
        };

        // SAFETY: fd is owned by self.file and stays open for this call
        let result = unsafe { libc::posix_fadvise(self.fd(), 0, 0, advice) };
        if result != 0 {
            let err = std::io::Error::from_raw_os_error(result);
            return Err(BenchError::invalid_file(
                &self.path,
                format!("posix_fadvise({:?}) failed: {}", hint, err),
            ));
        }

        Ok(())
    }

    fn logical_block_size(&self) -> u64 {
        self.logical_block_size
    }
}

impl Drop for FileTarget {
    fn drop(&mut self) {
        log::debug!("closing {}", self.path.display());
    }
}
