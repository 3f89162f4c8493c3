// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable randomness for template selection.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a non-empty pool.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for reproducible sessions and tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // A poisoned lock still holds a usable RNG.
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let source = ThreadRandom;
        for _ in 0..200 {
            assert!(source.pick(5) < 5);
        }
    }

    #[test]
    fn single_element_pool_always_zero() {
        assert_eq!(ThreadRandom.pick(1), 0);
        assert_eq!(SeededRandom::new(7).pick(1), 0);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick(5)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|i| *i < 5));
    }
}
