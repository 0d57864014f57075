// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Animation delays between an action and its outcome

use crate::effect::{GameTimer, LossCause};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay for each deferred transition.
///
/// Written in config files as human durations (`"600ms"`, `"1.5s"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Coin spin before heads or tails takes effect
    #[serde(with = "humantime_serde")]
    pub coin_settle: Duration,
    /// Pause after tails before the game restarts
    #[serde(with = "humantime_serde")]
    pub tails_restart: Duration,
    #[serde(with = "humantime_serde")]
    pub two_dice_settle: Duration,
    /// Pause after rolling seven before the game restarts
    #[serde(with = "humantime_serde")]
    pub seven_restart: Duration,
    #[serde(with = "humantime_serde")]
    pub three_dice_settle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            coin_settle: Duration::from_millis(600),
            tails_restart: Duration::from_millis(1500),
            two_dice_settle: Duration::from_millis(500),
            seven_restart: Duration::from_millis(2000),
            three_dice_settle: Duration::from_millis(500),
        }
    }
}

impl Timing {
    /// Every delay zero, outcomes settle on the next tick
    pub fn instant() -> Self {
        Self {
            coin_settle: Duration::ZERO,
            tails_restart: Duration::ZERO,
            two_dice_settle: Duration::ZERO,
            seven_restart: Duration::ZERO,
            three_dice_settle: Duration::ZERO,
        }
    }

    /// Delay before `timer` fires
    pub fn delay_for(&self, timer: &GameTimer) -> Duration {
        match timer {
            GameTimer::SettleCoin { .. } => self.coin_settle,
            GameTimer::SettleTwoDice { .. } => self.two_dice_settle,
            GameTimer::SettleThreeDice { .. } => self.three_dice_settle,
            GameTimer::Restart {
                cause: LossCause::Tails,
            } => self.tails_restart,
            GameTimer::Restart {
                cause: LossCause::Seven,
            } => self.seven_restart,
        }
    }

    /// Longest wait from an action to a settled state
    pub fn longest_action(&self) -> Duration {
        (self.coin_settle + self.tails_restart)
            .max(self.two_dice_settle + self.seven_restart)
            .max(self.three_dice_settle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::CoinFace;

    #[test]
    fn defaults_match_the_animation_delays() {
        let timing = Timing::default();
        assert_eq!(
            timing.delay_for(&GameTimer::SettleCoin {
                face: CoinFace::Heads
            }),
            Duration::from_millis(600)
        );
        assert_eq!(
            timing.delay_for(&GameTimer::Restart {
                cause: LossCause::Tails
            }),
            Duration::from_millis(1500)
        );
        assert_eq!(
            timing.delay_for(&GameTimer::Restart {
                cause: LossCause::Seven
            }),
            Duration::from_millis(2000)
        );
        assert_eq!(timing.longest_action(), Duration::from_millis(2500));
    }

    #[test]
    fn parses_human_durations_and_fills_gaps_with_defaults() {
        let timing: Timing = toml::from_str(
            r#"
            coin_settle = "1s"
            seven_restart = "250ms"
            "#,
        )
        .unwrap();

        assert_eq!(timing.coin_settle, Duration::from_secs(1));
        assert_eq!(timing.seven_restart, Duration::from_millis(250));
        assert_eq!(timing.tails_restart, Duration::from_millis(1500));
    }

    #[test]
    fn instant_timing_never_waits() {
        assert_eq!(Timing::instant().longest_action(), Duration::ZERO);
    }
}
