// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic random source that replays a fixed index sequence.

use std::sync::Mutex;

use solace_core::RandomSource;

/// Returns the scripted indices in order, cycling when exhausted.
///
/// Values are returned as-is, even when they exceed the pool size.
#[derive(Debug)]
pub struct ScriptedRandom {
    sequence: Vec<usize>,
    cursor: Mutex<usize>,
}

impl ScriptedRandom {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&self, _len: usize) -> usize {
        if self.sequence.is_empty() {
            return 0;
        }
        let mut cursor = match self.cursor.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let value = self.sequence[*cursor % self.sequence.len()];
        *cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_and_cycles() {
        let random = ScriptedRandom::new(vec![2, 0, 4]);
        let picks: Vec<usize> = (0..5).map(|_| random.pick(5)).collect();
        assert_eq!(picks, vec![2, 0, 4, 2, 0]);
    }

    #[test]
    fn empty_script_returns_zero() {
        assert_eq!(ScriptedRandom::new(vec![]).pick(3), 0);
    }
}
