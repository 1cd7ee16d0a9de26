//! Card categories and per-category counts.
//!
//! Every card in the pool sits in exactly one of four categories. The
//! tracker only stores how many cards each category holds, never which
//! cards they are.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::CommandError;

/// One of the four mutually exclusive places a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cards available to play.
    Hand,
    /// Played cards that a rest can recover.
    Discarded,
    /// Cards removed for the rest of the scenario.
    Lost,
    /// Cards with a persistent effect in play.
    Active,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Hand,
        Category::Discarded,
        Category::Lost,
        Category::Active,
    ];

    /// Lowercase name used on the command boundary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Hand => "hand",
            Category::Discarded => "discarded",
            Category::Lost => "lost",
            Category::Active => "active",
        }
    }

    /// Human-readable label for the category's counter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Hand => "Cards in hand",
            Category::Discarded => "Discarded cards",
            Category::Lost => "Lost cards",
            Category::Active => "Active cards",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CommandError::UnknownCategory(s.to_string()))
    }
}

/// Card counts for each category.
///
/// Indexable by [`Category`]:
///
/// ```
/// use stamina_calc::core::{Category, CategoryCounts};
///
/// let mut counts = CategoryCounts::default();
/// counts[Category::Hand] = 8;
/// counts[Category::Lost] = 1;
/// assert_eq!(counts.placed_total(), 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub hand: u32,
    pub discarded: u32,
    pub lost: u32,
    pub active: u32,
}

impl CategoryCounts {
    /// Create counts from explicit values.
    #[must_use]
    pub const fn new(hand: u32, discarded: u32, lost: u32, active: u32) -> Self {
        Self {
            hand,
            discarded,
            lost,
            active,
        }
    }

    /// Get the count for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self[category]
    }

    /// Sum of all four categories.
    ///
    /// Widened to `u64` so four saturated counters cannot overflow.
    #[must_use]
    pub fn placed_total(&self) -> u64 {
        Category::ALL.iter().map(|&c| u64::from(self[c])).sum()
    }

    /// Iterate over `(category, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self[c]))
    }
}

impl Index<Category> for CategoryCounts {
    type Output = u32;

    fn index(&self, category: Category) -> &u32 {
        match category {
            Category::Hand => &self.hand,
            Category::Discarded => &self.discarded,
            Category::Lost => &self.lost,
            Category::Active => &self.active,
        }
    }
}

impl IndexMut<Category> for CategoryCounts {
    fn index_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Hand => &mut self.hand,
            Category::Discarded => &mut self.discarded,
            Category::Lost => &mut self.lost,
            Category::Active => &mut self.active,
        }
    }
}
