//! Coin faces and injectable sources of fair coin flips.
//!
//! Every random decision in the crate goes through [`CoinSource`]. Any
//! `rand::Rng` is a source; [`FixedFlips`] replays a scripted sequence for
//! tests and recorded sessions.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One face of a tossed coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Heads: counts toward the line value.
    Heads,
    /// Tails.
    Tails,
}

impl CoinFace {
    /// Map a boolean flip (true = heads) to a face.
    pub fn from_flip(heads: bool) -> Self {
        if heads { Self::Heads } else { Self::Tails }
    }

    /// Whether this face is heads.
    pub fn is_heads(self) -> bool {
        self == Self::Heads
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// A source of independent fair coin flips.
pub trait CoinSource {
    /// Flip one coin. Returns `true` for heads.
    fn flip(&mut self) -> bool;
}

impl<R: Rng> CoinSource for R {
    fn flip(&mut self) -> bool {
        self.random::<bool>()
    }
}

/// A scripted flip sequence. Once exhausted it keeps yielding tails.
#[derive(Debug, Clone, Default)]
pub struct FixedFlips {
    flips: VecDeque<bool>,
}

impl FixedFlips {
    /// Replay the given flips in order.
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
        }
    }

    /// Script whole lines by their heads count.
    ///
    /// Each count `h` becomes `h` heads followed by `3 - h` tails. Counts
    /// above 3 are clamped.
    pub fn from_heads(counts: &[u8]) -> Self {
        let flips = counts.iter().flat_map(|&h| {
            let h = h.min(3);
            (0..3).map(move |i| i < h)
        });
        Self::new(flips)
    }

    /// Number of scripted flips not yet consumed.
    pub fn remaining(&self) -> usize {
        self.flips.len()
    }
}

impl CoinSource for FixedFlips {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn face_from_flip() {
        assert_eq!(CoinFace::from_flip(true), CoinFace::Heads);
        assert_eq!(CoinFace::from_flip(false), CoinFace::Tails);
        assert!(CoinFace::Heads.is_heads());
        assert!(!CoinFace::Tails.is_heads());
    }

    #[test]
    fn face_display() {
        assert_eq!(CoinFace::Heads.to_string(), "heads");
        assert_eq!(CoinFace::Tails.to_string(), "tails");
    }

    #[test]
    fn fixed_flips_replay_in_order() {
        let mut src = FixedFlips::new([true, false, true]);
        assert_eq!(src.remaining(), 3);
        assert!(src.flip());
        assert!(!src.flip());
        assert!(src.flip());
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn exhausted_source_yields_tails() {
        let mut src = FixedFlips::new([]);
        assert!(!src.flip());
        assert!(!src.flip());
    }

    #[test]
    fn from_heads_scripts_whole_lines() {
        let mut src = FixedFlips::from_heads(&[2, 0]);
        let flips: Vec<bool> = (0..6).map(|_| src.flip()).collect();
        assert_eq!(flips, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn from_heads_clamps() {
        let mut src = FixedFlips::from_heads(&[7]);
        assert_eq!(src.remaining(), 3);
        assert!(src.flip() && src.flip() && src.flip());
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let fa: Vec<bool> = (0..32).map(|_| a.flip()).collect();
        let fb: Vec<bool> = (0..32).map(|_| b.flip()).collect();
        assert_eq!(fa, fb);
    }
}
