// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random draws for the coin and the dice

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on a die
pub const DIE_FACES: u8 = 6;

/// Outcome of a coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// Source of coin flips and die rolls
pub trait Roller: Send {
    /// Uniform binary outcome
    fn flip(&mut self) -> CoinFace;

    /// Uniform draw in `1..=6`
    fn roll(&mut self) -> u8;

    fn roll_two(&mut self) -> [u8; 2] {
        [self.roll(), self.roll()]
    }

    fn roll_three(&mut self) -> [u8; 3] {
        [self.roll(), self.roll(), self.roll()]
    }
}

/// Roller backed by a seedable PRNG
#[derive(Debug, Clone)]
pub struct RandRoller {
    rng: StdRng,
}

impl RandRoller {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic roller, same seed same game
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Roller for RandRoller {
    fn flip(&mut self) -> CoinFace {
        if self.rng.random_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedRoller;

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    #![cfg_attr(coverage_nightly, coverage(off))]

    use super::{CoinFace, Roller};
    use std::collections::VecDeque;

    /// Roller that replays queued outcomes.
    ///
    /// Once a queue runs dry it keeps returning heads, or ones for dice.
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedRoller {
        flips: VecDeque<CoinFace>,
        rolls: VecDeque<u8>,
    }

    impl ScriptedRoller {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_flips(mut self, flips: impl IntoIterator<Item = CoinFace>) -> Self {
            self.flips.extend(flips);
            self
        }

        pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u8>) -> Self {
            self.rolls.extend(rolls);
            self
        }

        /// Queue the draws for one full winning game
        pub fn with_game(self, two: [u8; 2], three: [u8; 3]) -> Self {
            self.with_flips([CoinFace::Heads])
                .with_rolls(two)
                .with_rolls(three)
        }
    }

    impl Roller for ScriptedRoller {
        fn flip(&mut self) -> CoinFace {
            self.flips.pop_front().unwrap_or(CoinFace::Heads)
        }

        fn roll(&mut self) -> u8 {
            self.rolls.pop_front().unwrap_or(1)
        }
    }
}

#[cfg(test)]
#[path = "dice_tests.rs"]
mod tests;
