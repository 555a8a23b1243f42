// rand-backed implementations of the domain RandomSource
use crate::domain::prediction::RandomSource;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Production source backed by the thread-local generator.
#[derive(Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..hi)
    }
}

/// Deterministic source for tests.
#[cfg(test)]
pub struct SeededRandom {
    rng: rand::rngs::StdRng,
}

#[cfg(test)]
impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
impl RandomSource for SeededRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..hi)
    }
}
