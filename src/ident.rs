// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Server-side generation of numeric keys.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-open range `[min, max)` a generated key is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpace {
    pub min: i64,
    pub max: i64,
}

impl KeySpace {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value < self.max
    }
}

/// 13-digit product and dish bar codes.
pub const BAR_CODE: KeySpace = KeySpace::new(1_000_000_000_000, 9_999_999_999_999);

/// 6-digit nutritionist codes.
pub const NUTRITIONIST_CODE: KeySpace = KeySpace::new(100_000, 999_999);

/// Draws keys uniformly from a [`KeySpace`], rejecting ones already taken.
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the first draw for which `taken` is false.
    ///
    /// Retries are unbounded: this never returns if every key in `space` is
    /// taken.
    pub fn next_unique(&mut self, space: KeySpace, mut taken: impl FnMut(i64) -> bool) -> i64 {
        loop {
            let candidate = self.rng.gen_range(space.min..space.max);
            if !taken(candidate) {
                return candidate;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
