//! Round projection tests.
//!
//! Hand sizes follow common starting decks; expected counts come from
//! playing the "two per round, one short rest" rule out by hand.

use stamina_calc::projection::{project, project_rounds, Step};

/// Starting hands with nothing discarded yet.
#[test]
fn test_fresh_hands() {
    let cases = [(6, 5), (8, 7), (9, 8), (10, 9), (11, 10), (12, 11)];
    for (hand, rounds) in cases {
        assert_eq!(project_rounds(hand, 0), rounds, "hand of {}", hand);
    }
}

/// Mid-scenario piles reproduce the exact play-rest-play trace.
#[test]
fn test_mid_scenario_trace() {
    let projection = project(4, 4);
    assert_eq!(projection.rounds, 5);

    let rest_at = projection
        .steps
        .iter()
        .position(|s| matches!(s, Step::ShortRest { .. }))
        .expect("rest should be taken");
    assert_eq!(rest_at, 2);
    assert_eq!(projection.steps[rest_at], Step::ShortRest { hand: 7, discarded: 0 });
}

/// Once the rest is spent, a full discard pile is not recovered again.
#[test]
fn test_spent_rest_leaves_discard() {
    let projection = project(4, 4);
    assert!(projection.rested);
    assert_eq!(
        projection.steps.last(),
        Some(&Step::Play { hand: 1, discarded: 6 })
    );
}

/// Everything in the discard pile: rest first, then play.
#[test]
fn test_all_discarded() {
    assert_eq!(project_rounds(0, 12), 5);
    assert_eq!(project_rounds(0, 2), 0);
    assert_eq!(project_rounds(0, 3), 1);
}

/// Rest with a single card in discard is not available.
#[test]
fn test_rest_needs_two_discarded() {
    let projection = project(1, 1);
    assert_eq!(projection.rounds, 0);
    assert!(!projection.rested);
}

/// Large piles: half the hand, then half the rested pool rounded down.
#[test]
fn test_large_piles() {
    assert_eq!(project_rounds(100_000, 100_000), 50_000 + 99_999);
}
