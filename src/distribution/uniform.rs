//! Uniform random distribution
//!
//! All blocks have equal probability. The generator is xoshiro256++, seeded
//! explicitly, so a given seed always produces the same block sequence.
//!
//! # Example
//!
//! ```
//! use recsize_bench::distribution::{Distribution, uniform::UniformDistribution};
//!
//! let mut dist = UniformDistribution::with_seed(12345);
//! for _ in 0..10 {
//!     let block_num = dist.next_block(1024);
//!     assert!(block_num < 1024);
//! }
//! ```

use super::Distribution;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random distribution
///
/// Advances the generator once per call when there is more than one block.
pub struct UniformDistribution {
    rng: Xoshiro256PlusPlus,
}

impl UniformDistribution {
    /// Create a new uniform distribution with specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Distribution for UniformDistribution {
    #[inline(always)]
    fn next_block(&mut self, num_blocks: u64) -> u64 {
        if num_blocks <= 1 {
            return 0;
        }
        self.rng.gen_range(0..num_blocks)
    }
}
