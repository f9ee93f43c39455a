//! Uniform index selection for the randomised background and fallback picks.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero at call sites.
    fn next_index(&self, len: usize) -> usize;
}

/// Returns a uniformly distributed index in `0..len`, or `0` when `len` is zero.
pub fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let index = (js_sys::Math::random() * len as f64).floor() as usize;
        index.min(len - 1)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as usize;
        nanos % len
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Host randomness backed by [`random_index`].
pub struct HostRandom;

impl RandomSource for HostRandom {
    fn next_index(&self, len: usize) -> usize {
        random_index(len)
    }
}

#[derive(Debug, Clone, Default)]
/// Deterministic source that replays a fixed list of picks, wrapping each into range.
pub struct SequenceRandom {
    picks: Vec<usize>,
    cursor: Cell<usize>,
}

impl SequenceRandom {
    /// Builds a source replaying `picks` in order and cycling when exhausted.
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: Cell::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&self, len: usize) -> usize {
        if len == 0 || self.picks.is_empty() {
            return 0;
        }
        let at = self.cursor.get();
        self.cursor.set(at.wrapping_add(1));
        self.picks[at % self.picks.len()] % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_index_stays_in_range() {
        assert_eq!(random_index(0), 0);
        for _ in 0..64 {
            assert!(random_index(6) < 6);
        }
    }

    #[test]
    fn sequence_random_replays_and_wraps_picks() {
        let random = SequenceRandom::new(vec![4, 1]);
        assert_eq!(random.next_index(3), 1);
        assert_eq!(random.next_index(3), 1);
        assert_eq!(random.next_index(10), 4);
    }
}
