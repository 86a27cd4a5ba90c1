//! Deterministic random number generation for match simulation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Per-trial streams**: Trial `i` of a run always draws from the same
//!   stream, whichever worker thread plays it
//! - **Forkable**: Create independent branches from a running generator
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use tennis_sim::core::SimRng;
//!
//! // Trial streams are a pure function of (seed, trial index)
//! let mut a = SimRng::for_trial(42, 7);
//! let mut b = SimRng::for_trial(42, 7);
//! assert_eq!(a.gen_unit(), b.gen_unit());
//!
//! // Neighbouring trials are independent
//! let mut c = SimRng::for_trial(42, 8);
//! assert_ne!(SimRng::for_trial(42, 7).gen_unit(), c.gen_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread derived seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG for the simulation engine.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct SimRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SimRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Stream for trial `trial` of a run seeded with `seed`.
    ///
    /// Each trial owns an independent generator, so trials can be played in
    /// any order or on any thread and still reproduce bit-for-bit.
    #[must_use]
    pub fn for_trial(seed: u64, trial: u64) -> Self {
        Self::new(mix(seed.wrapping_add(trial.wrapping_add(1).wrapping_mul(SEED_STRIDE))))
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(SEED_STRIDE));
        Self::new(fork_seed)
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Returns `true` with the given probability.
    ///
    /// Implemented as a single uniform draw `u < probability`, so values
    /// outside `[0, 1]` saturate instead of panicking and NaN is always
    /// `false`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.gen_unit() < probability
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> SimRngState {
        SimRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SimRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
