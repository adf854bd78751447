//! recsize-bench - deterministic record-size read workload generator
//!
//! Issues a bounded, reproducible sequence of fixed-size positioned reads
//! against an existing file so the I/O stack can be observed from outside
//! (tracers, perf, strace). Nothing is timed and nothing is printed on
//! success.
//!
//! # Architecture
//!
//! - **Validator** (`config::validator`): checks the file can host the
//!   working set and derives the [`WorkloadPlan`]
//! - **Offset generation** (`distribution`): sequential round-robin or
//!   seeded uniform random blocks
//! - **Executor** (`worker`): one `pread` per offset into a reused buffer

pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod target;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::validator::WorkloadPlan;
pub use config::{AccessMode, RunConfig};
pub use error::BenchError;
pub use worker::{run_workload, RunSummary};

/// Result type used throughout recsize-bench
pub type Result<T> = std::result::Result<T, BenchError>;
