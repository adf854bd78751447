//! In-memory target for tests
//!
//! Reports a fixed size without touching the filesystem. Reads against its
//! descriptor are never issued; pair it with `MockEngine`.

use super::Target;
use crate::config::FadviseHint;
use crate::Result;
use std::os::unix::io::RawFd;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MockTarget {
    path: PathBuf,
    size: u64,
}

impl MockTarget {
    pub fn new(size: u64) -> Self {
        Self {
            path: PathBuf::from("mock.dat"),
            size,
        }
    }
}

impl Target for MockTarget {
    fn path(&self) -> &Path {
        &self.path
    }

    fn fd(&self) -> RawFd {
        -1
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn apply_fadvise(&self, _hint: FadviseHint) -> Result<()> {
        Ok(())
    }
}
