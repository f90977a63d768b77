use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// The single source of randomness every generator draws from.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    fn below(&mut self, n: u64) -> u64;

    /// Uniform pick from a non-empty pool.
    fn pick<'p>(&mut self, pool: &[&'p str]) -> &'p str {
        pool[self.below(pool.len() as u64) as usize]
    }
}

/// Cryptographically secure source backed by the thread-local CSPRNG.
///
/// Each thread owns its generator, so concurrent substitutions never share
/// state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        rand::rng().random_range(0..n)
    }
}

/// Deterministic source for tests and benchmarks. Not suitable for
/// producing unpredictable data.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}
