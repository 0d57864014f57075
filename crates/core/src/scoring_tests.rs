// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    all_even = { [2, 4, 6], Parity::AllEven, 12 },
    all_odd = { [1, 3, 5], Parity::AllOdd, -9 },
    mixed = { [2, 3, 4], Parity::Mixed, 3 },
    mixed_negative = { [1, 6, 1], Parity::Mixed, -4 },
    all_sixes = { [6, 6, 6], Parity::AllEven, 18 },
    all_ones = { [1, 1, 1], Parity::AllOdd, -3 },
)]
fn scores_known_rolls(dice: [u8; 3], parity: Parity, score: i32) {
    let scored = ThreeDiceScore::new(dice);
    assert_eq!(scored.parity, parity);
    assert_eq!(scored.score, score);
}

#[test]
fn every_triple_follows_the_parity_rule() {
    for a in 1..=6u8 {
        for b in 1..=6u8 {
            for c in 1..=6u8 {
                let scored = ThreeDiceScore::new([a, b, c]);
                let (a, b, c) = (i32::from(a), i32::from(b), i32::from(c));
                let expected = if a % 2 == 0 && b % 2 == 0 && c % 2 == 0 {
                    a + b + c
                } else if a % 2 == 1 && b % 2 == 1 && c % 2 == 1 {
                    -(a + b + c)
                } else {
                    a - b + c
                };
                assert_eq!(scored.score, expected, "dice {a},{b},{c}");
            }
        }
    }
}

#[test]
fn exactly_six_pairs_sum_to_seven() {
    let losing = (1..=6u8)
        .flat_map(|a| (1..=6u8).map(move |b| [a, b]))
        .filter(|pair| is_losing_roll(*pair))
        .count();
    assert_eq!(losing, 6);
}

#[parameterized(
    all_even = { [2, 4, 6], "2 + 4 + 6 = 12 (All Even)" },
    all_odd = { [1, 3, 5], "-(1 + 3 + 5) = -9 (All Odd)" },
    mixed = { [2, 3, 4], "2 - 3 + 4 = 3 (Mixed)" },
)]
fn formula_shows_the_arithmetic(dice: [u8; 3], formula: &str) {
    assert_eq!(ThreeDiceScore::new(dice).formula(), formula);
}

#[test]
fn mixed_roll_subtracts_only_the_middle_die() {
    let scored = ThreeDiceScore::new([2, 3, 4]);
    assert_eq!(scored.polarity(0), Polarity::Positive);
    assert_eq!(scored.polarity(1), Polarity::Negative);
    assert_eq!(scored.polarity(2), Polarity::Positive);
}

#[test]
fn uniform_parity_colors_every_die_the_same() {
    let even = ThreeDiceScore::new([2, 4, 6]);
    let odd = ThreeDiceScore::new([1, 3, 5]);
    for i in 0..3 {
        assert_eq!(even.polarity(i), Polarity::Positive);
        assert_eq!(odd.polarity(i), Polarity::Negative);
    }
}
