// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    exact_hit = { "coin:heads", "coin:heads", true },
    exact_miss = { "coin:heads", "coin:tails", false },
    star_one_segment = { "coin:*", "coin:flipped", true },
    star_not_nested = { "dice:*", "dice:two:seven", false },
    star_in_the_middle = { "dice:*:rolled", "dice:three:rolled", true },
    double_star_nested = { "dice:**", "dice:two:seven", true },
    double_star_other_category = { "dice:**", "game:reset", false },
    everything = { "**", "stage:unlocked", true },
    bare_star = { "*", "game:complete", false },
    empty = { "", "game:reset", false },
    prefix_only = { "game", "game:reset", false },
)]
fn pattern_matching(pattern: &str, event: &str, expected: bool) {
    assert_eq!(EventPattern::new(pattern).matches(event), expected);
}

#[test]
fn subscription_matches_any_pattern() {
    let sub = Subscription::new(
        "outcomes",
        vec![EventPattern::new("game:complete"), EventPattern::new("coin:*")],
    );

    assert!(sub.matches("game:complete"));
    assert!(sub.matches("coin:tails"));
    assert!(!sub.matches("dice:two:rolled"));
}
