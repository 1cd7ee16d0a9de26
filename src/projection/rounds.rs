//! Round projection by simulation.
//!
//! Each round plays two cards from hand to the discard pile. Once the hand
//! can no longer cover a round, a single short rest returns the discard
//! pile to hand minus one card. The simulation stops when the hand holds
//! fewer than two cards and the rest is spent or has nothing to recover.
//!
//! Lost and active cards never enter the simulation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Cards played per round.
pub const CARDS_PER_ROUND: u64 = 2;

/// Minimum discard pile a short rest needs.
pub const MIN_REST_DISCARD: u64 = 2;

/// One simulated step, with the piles as they stand after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// A round was played.
    Play { hand: u64, discarded: u64 },
    /// The discard pile was recovered, losing one card.
    ShortRest { hand: u64, discarded: u64 },
}

/// Result of a projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Complete rounds playable.
    pub rounds: u64,

    /// Whether the short rest was taken.
    pub rested: bool,

    /// Steps in simulation order.
    pub steps: SmallVec<[Step; 16]>,
}

/// Simulate play from the given hand and discard pile, keeping every step.
///
/// The rest is available whenever the hand cannot cover a round, including
/// before the first play: `project(1, 5)` rests first and then plays two
/// rounds. The trace grows with the pile sizes; use [`project_rounds`] when
/// only the count is needed.
///
/// ```
/// use stamina_calc::projection::{project, Step};
///
/// let projection = project(2, 0);
/// assert_eq!(projection.rounds, 1);
/// assert_eq!(
///     projection.steps.as_slice(),
///     &[
///         Step::Play { hand: 0, discarded: 2 },
///         Step::ShortRest { hand: 1, discarded: 0 },
///     ]
/// );
/// ```
#[must_use]
pub fn project(hand: u32, discarded: u32) -> Projection {
    let mut hand = u64::from(hand);
    let mut discarded = u64::from(discarded);
    let mut projection = Projection {
        rounds: 0,
        rested: false,
        steps: SmallVec::new(),
    };

    loop {
        let step = if hand >= CARDS_PER_ROUND {
            hand -= CARDS_PER_ROUND;
            discarded += CARDS_PER_ROUND;
            projection.rounds += 1;
            Step::Play { hand, discarded }
        } else if !projection.rested && discarded >= MIN_REST_DISCARD {
            hand += discarded - 1;
            discarded = 0;
            projection.rested = true;
            Step::ShortRest { hand, discarded }
        } else {
            break;
        };

        trace!(?step, rounds = projection.rounds, "projection step");
        projection.steps.push(step);
    }

    projection
}

/// Number of complete rounds playable from the given hand and discard pile.
///
/// Same result as `project(hand, discarded).rounds`, computed in constant
/// time and space: the hand is played down in pairs, the one rest returns
/// the discard pile minus a card, and the rested hand is played down again.
///
/// ```
/// use stamina_calc::projection::project_rounds;
///
/// assert_eq!(project_rounds(4, 4), 5);
/// assert_eq!(project_rounds(0, 0), 0);
/// ```
#[must_use]
pub fn project_rounds(hand: u32, discarded: u32) -> u64 {
    let hand = u64::from(hand);
    let before_rest = hand / CARDS_PER_ROUND;

    let leftover = hand % CARDS_PER_ROUND;
    let discarded = u64::from(discarded) + before_rest * CARDS_PER_ROUND;
    if discarded < MIN_REST_DISCARD {
        return before_rest;
    }

    let rested_hand = leftover + discarded - 1;
    before_rest + rested_hand / CARDS_PER_ROUND
}
