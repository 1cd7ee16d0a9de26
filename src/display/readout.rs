//! Headline and counter text derived from a tracker.

use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::tracker::{ConsistencyTracker, ValidationState};

/// What the headline should tell the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readout {
    /// No total declared yet.
    PromptForTotal,
    /// This many cards still need a category.
    Missing(u64),
    /// This many cards are placed beyond the total.
    Extra(u64),
    /// Pool is balanced; this many rounds remain.
    Rounds(u64),
}

impl Readout {
    /// Derive the readout from the tracker's current state.
    #[must_use]
    pub fn from_tracker(tracker: &ConsistencyTracker) -> Self {
        match tracker.state() {
            ValidationState::Undeclared => Readout::PromptForTotal,
            ValidationState::Under => Readout::Missing(tracker.deficit().unwrap_or_default()),
            ValidationState::Over => Readout::Extra(tracker.surplus().unwrap_or_default()),
            ValidationState::Balanced => {
                Readout::Rounds(tracker.projected_rounds().unwrap_or_default())
            }
        }
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Readout::PromptForTotal => f.write_str("Enter the number of cards in your pool"),
            Readout::Missing(n) => write!(f, "{} {} not placed yet", n, cards(n)),
            Readout::Extra(n) => write!(f, "{} {} too many placed", n, cards(n)),
            Readout::Rounds(n) => write!(f, "You have {} {} left", n, plural(n, "round", "rounds")),
        }
    }
}

/// Label for one category's counter, e.g. `Cards in hand: 4`.
#[must_use]
pub fn category_label(tracker: &ConsistencyTracker, category: Category) -> String {
    format!("{}: {}", category.label(), tracker.count(category))
}

fn cards(n: u64) -> &'static str {
    plural(n, "card", "cards")
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
