//! Random source for genome operations.
//!
//! Every engine owns one `GenomeRng`; nothing is shared between engines.

use rand::prelude::*;
use rand::seq::index;

/// Random number generator wrapper for genome operations.
#[derive(Debug, Clone)]
pub struct GenomeRng {
    rng: StdRng,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fair coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.rng.r#gen()
    }

    /// Bernoulli trial with success probability `p` in `[0, 1]`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Uniform index in `0..len`.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// `amount` distinct indices from `0..len`, uniformly without replacement.
    pub fn distinct_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount).into_vec()
    }

    /// Fill `genes` with independent fair coin flips.
    pub fn fill_bits(&mut self, genes: &mut [bool]) {
        for gene in genes.iter_mut() {
            *gene = self.rng.r#gen();
        }
    }

    /// Generate next u64 for seeding child RNGs.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }
}
