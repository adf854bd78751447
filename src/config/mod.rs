//! Run configuration
//!
//! A [`RunConfig`] is built once from the command line and never mutated. It
//! carries everything the validator, the offset generator and the executor
//! need for a single run.

pub mod cli;
pub mod cli_convert;
pub mod validator;

use std::path::PathBuf;

/// Seed used for random mode when `--seed` is not given
pub const DEFAULT_SEED: u64 = 12345;

/// Access pattern for the read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Round-robin scan of the working set, block by block
    Sequential,
    /// Uniformly drawn blocks from a seeded generator
    Random,
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessMode::Sequential => write!(f, "seq"),
            AccessMode::Random => write!(f, "rand"),
        }
    }
}

/// posix_fadvise hint applied to the whole target after open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadviseHint {
    /// Leave the kernel's default readahead policy alone
    #[default]
    None,
    /// POSIX_FADV_SEQUENTIAL
    Sequential,
    /// POSIX_FADV_RANDOM
    Random,
    /// POSIX_FADV_DONTNEED (drop cached pages before the run)
    DontNeed,
}

/// Immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Target file; must already exist
    pub path: PathBuf,

    pub mode: AccessMode,

    /// Bytes per read, always > 0
    pub record_size: usize,

    /// Size of the working set `[0, total_bytes)`, always > 0
    pub total_bytes: u64,

    /// Seed for random mode (ignored in sequential mode)
    pub seed: u64,

    /// Open with O_DIRECT and read into an aligned buffer
    pub direct: bool,

    pub fadvise: FadviseHint,

    /// Validate only, issue no reads
    pub dry_run: bool,
}

impl RunConfig {
    /// Create a configuration with default seed and no optional behavior
    pub fn new(path: impl Into<PathBuf>, mode: AccessMode, record_size: usize, total_bytes: u64) -> Self {
        Self {
            path: path.into(),
            mode,
            record_size,
            total_bytes,
            seed: DEFAULT_SEED,
            direct: false,
            fadvise: FadviseHint::None,
            dry_run: false,
        }
    }

    /// Override the random-mode seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
