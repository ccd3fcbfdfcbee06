//! Seeded randomness for scenario construction.
//!
//! The patrol state machines themselves are deterministic; the only
//! randomness in a run is scenario setup — jittered spawn positions, route
//! assignment, profile variation.  All of it flows from one `SimRng` seeded
//! by `SimConfig::seed`, so a seed pins the whole scenario.  When two call
//! sites must not share a stream (per-route generation, parallel workers),
//! derive one child each with [`SimRng::child`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Splitting constant for child seeds (64-bit fractional golden ratio).
const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic scenario RNG over `SmallRng`.
///
/// Not meant to be shared: setup code is single-threaded, and parallel
/// workers should each get their own [`child`](SimRng::child) stream.
pub struct SimRng {
    rng: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Derive an independent child stream for `offset`.
    ///
    /// Children with distinct offsets diverge even when derived back to
    /// back from the same parent.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base: u64 = self.rng.r#gen();
        SimRng::new(base ^ offset.wrapping_mul(SEED_MIX))
    }

    /// Sample any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }

    /// Uniform value in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p`, clamping `p` into `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}
