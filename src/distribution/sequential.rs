//! Sequential block generation
//!
//! Generates block numbers in round-robin order starting from 0. When the
//! end of the working set is reached, wraps back to the beginning.

use crate::distribution::Distribution;

/// Block visited at iteration `index`: `index mod num_blocks`
///
/// Pure function of the index, so a sequential run can be resumed or
/// replayed from any position.
#[inline]
pub fn block_at(index: u64, num_blocks: u64) -> u64 {
    if num_blocks == 0 {
        return 0;
    }
    index % num_blocks
}

/// Sequential block generator
///
/// Generates block numbers in sequential order: 0, 1, 2, 3, ...
/// The only state is the iteration index.
#[derive(Debug, Default)]
pub struct SequentialDistribution {
    /// Iteration index of the next call
    index: u64,
}

impl SequentialDistribution {
    /// Create a new sequential distribution
    pub fn new() -> Self {
        Self { index: 0 }
    }
}

impl Distribution for SequentialDistribution {
    fn next_block(&mut self, num_blocks: u64) -> u64 {
        let block = block_at(self.index, num_blocks);
        self.index += 1;
        block
    }
}
