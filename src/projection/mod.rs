//! Remaining-round projection.
//!
//! A pure function of the hand and discard pile sizes. The tracker calls it
//! only once the pool is balanced.
//!
//! Known limitation: lost and active cards are ignored. Active cards that
//! would return to the discard pile later are not accounted for.

pub mod rounds;

pub use rounds::{project, project_rounds, Projection, Step, CARDS_PER_ROUND, MIN_REST_DISCARD};
