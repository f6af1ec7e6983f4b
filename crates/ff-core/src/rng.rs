//! Deterministic simulation-level RNG.
//!
//! The dispatcher and the clock never draw random numbers; `SimRng` exists
//! for synthetic map generation, where the same seed must
//! always produce the same world.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for synthetic maps.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
