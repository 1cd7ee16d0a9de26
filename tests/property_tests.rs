//! Property tests for the tracker and the projector.

use proptest::prelude::*;

use stamina_calc::core::{Category, PoolDeclaration, TrackerConfig};
use stamina_calc::projection::{project, project_rounds, Step};
use stamina_calc::tracker::{Command, ConsistencyTracker, ValidationState};

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        prop::option::of(-20i64..40).prop_map(Command::SetTotal),
        (category(), 0u32..30).prop_map(|(c, n)| Command::SetCategory(c, n)),
    ]
}

fn expected_state(pool: PoolDeclaration, placed: u64) -> ValidationState {
    match pool.total() {
        None => ValidationState::Undeclared,
        Some(total) if placed < u64::from(total) => ValidationState::Under,
        Some(total) if placed > u64::from(total) => ValidationState::Over,
        Some(_) => ValidationState::Balanced,
    }
}

proptest! {
    #[test]
    fn proptest_state_matches_inputs_after_every_command(
        commands in prop::collection::vec(command(), 0..40)
    ) {
        let mut tracker = ConsistencyTracker::new(TrackerConfig::undeclared());
        for command in commands {
            let returned = tracker.apply(command);

            let counts = tracker.counts();
            let sum = u64::from(counts.hand)
                + u64::from(counts.discarded)
                + u64::from(counts.lost)
                + u64::from(counts.active);
            prop_assert_eq!(tracker.placed_total(), sum);
            prop_assert_eq!(tracker.state(), expected_state(tracker.pool(), sum));
            prop_assert_eq!(returned, tracker.state());
            prop_assert_eq!(tracker.projected_rounds().is_some(), tracker.state().is_balanced());
        }
    }

    #[test]
    fn proptest_set_category_is_idempotent(
        setup in prop::collection::vec(command(), 0..10),
        category in category(),
        value in 0u32..30,
    ) {
        let mut once = ConsistencyTracker::new(TrackerConfig::undeclared());
        for command in &setup {
            once.apply(*command);
        }
        let mut twice = once.clone();

        once.set_category(category, value);
        twice.set_category(category, value);
        twice.set_category(category, value);

        prop_assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn proptest_independent_categories_commute(
        total in prop::option::of(0i64..40),
        hand in 0u32..20,
        discarded in 0u32..20,
    ) {
        let mut forward = ConsistencyTracker::new(TrackerConfig::undeclared());
        forward.set_total(total);
        forward.set_category(Category::Hand, hand);
        forward.set_category(Category::Discarded, discarded);

        let mut reverse = ConsistencyTracker::new(TrackerConfig::undeclared());
        reverse.set_total(total);
        reverse.set_category(Category::Discarded, discarded);
        reverse.set_category(Category::Hand, hand);

        prop_assert_eq!(forward.snapshot(), reverse.snapshot());
    }

    #[test]
    fn proptest_projection_terminates_with_consistent_trace(
        hand in 0u32..500,
        discarded in 0u32..500,
    ) {
        let projection = project(hand, discarded);

        let plays = projection
            .steps
            .iter()
            .filter(|s| matches!(s, Step::Play { .. }))
            .count() as u64;
        prop_assert_eq!(plays, projection.rounds);
        prop_assert_eq!(projection.rounds, project_rounds(hand, discarded));

        // Nothing playable is left over at the end.
        let (end_hand, end_discarded) = match projection.steps.last() {
            Some(Step::Play { hand, discarded }) | Some(Step::ShortRest { hand, discarded }) => {
                (*hand, *discarded)
            }
            None => (u64::from(hand), u64::from(discarded)),
        };
        prop_assert!(end_hand < 2);
        prop_assert!(projection.rested || end_discarded < 2);
    }

    #[test]
    fn proptest_projection_bounded_by_pool(
        hand in 0u32..500,
        discarded in 0u32..500,
    ) {
        // Each card can be played at most twice: once before and once after the rest.
        let pool = u64::from(hand) + u64::from(discarded);
        prop_assert!(project_rounds(hand, discarded) <= pool);
    }
}
