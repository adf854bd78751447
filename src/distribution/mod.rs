//! Block distributions and the offset sequence
//!
//! # Block-Based Design
//!
//! Distributions generate block numbers (0, 1, 2, ..., N-1) rather than byte
//! offsets. A block is a record-size-aligned start position inside the
//! working set, so every offset is naturally aligned and every read fits:
//! `offset = block_num * record_size`.
//!
//! [`OffsetSequence`] wraps a distribution and yields exactly
//! `operation_count` offsets for a [`WorkloadPlan`].
//!
//! # Example
//!
//! ```
//! use recsize_bench::config::AccessMode;
//! use recsize_bench::config::validator::plan_workload;
//! use recsize_bench::distribution::OffsetSequence;
//!
//! let plan = plan_workload(4096, 16384).unwrap();
//! let offsets: Vec<u64> = OffsetSequence::new(&plan, AccessMode::Sequential, 0).collect();
//! assert_eq!(offsets, vec![0, 4096, 8192, 12288]);
//! ```

use crate::config::validator::WorkloadPlan;
use crate::config::AccessMode;

pub mod sequential;
pub mod uniform;

use sequential::SequentialDistribution;
use uniform::UniformDistribution;

/// Distribution trait for block number generation
///
/// Each call advances the distribution by one step and returns a block
/// number in `[0, num_blocks)`. Implementations own all of their state; no
/// global generator is consulted.
pub trait Distribution: Send {
    /// Generate next block number within range
    ///
    /// Returns 0 when `num_blocks` is 0 or 1.
    fn next_block(&mut self, num_blocks: u64) -> u64;
}

/// Build the distribution for an access mode
///
/// `seed` only affects random mode.
pub fn create_distribution(mode: AccessMode, seed: u64) -> Box<dyn Distribution> {
    match mode {
        AccessMode::Sequential => Box::new(SequentialDistribution::new()),
        AccessMode::Random => Box::new(UniformDistribution::with_seed(seed)),
    }
}

/// Lazy, finite sequence of read offsets for one run
///
/// Yields exactly `plan.operation_count` offsets, each a multiple of
/// `plan.record_size` in `[0, plan.max_offset]`. Rebuilding the sequence
/// from the same plan, mode and seed reproduces it exactly.
pub struct OffsetSequence {
    distribution: Box<dyn Distribution>,
    record_size: u64,
    block_count: u64,
    remaining: u64,
}

impl OffsetSequence {
    pub fn new(plan: &WorkloadPlan, mode: AccessMode, seed: u64) -> Self {
        Self::with_distribution(plan, create_distribution(mode, seed))
    }

    /// Drive a caller-supplied distribution over the plan
    pub fn with_distribution(plan: &WorkloadPlan, distribution: Box<dyn Distribution>) -> Self {
        Self {
            distribution,
            record_size: plan.record_size as u64,
            block_count: plan.block_count,
            remaining: plan.operation_count,
        }
    }
}

impl Iterator for OffsetSequence {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let block = self.distribution.next_block(self.block_count);
        Some(block * self.record_size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for OffsetSequence {}

impl std::fmt::Debug for OffsetSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetSequence")
            .field("record_size", &self.record_size)
            .field("block_count", &self.block_count)
            .field("remaining", &self.remaining)
            .finish()
    }
}
