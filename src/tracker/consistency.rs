//! The consistency tracker.
//!
//! Owns the declared pool and the category counts, and keeps the
//! validation state in step with them. Every mutation goes through
//! [`ConsistencyTracker::apply`], which updates the inputs and re-derives
//! the state before returning.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Category, CategoryCounts, PoolDeclaration, TrackerConfig};
use crate::projection;

use super::{Command, ValidationState};

/// Authoritative pool state for one session.
///
/// ```
/// use stamina_calc::core::{Category, TrackerConfig};
/// use stamina_calc::tracker::{ConsistencyTracker, ValidationState};
///
/// let mut tracker = ConsistencyTracker::new(TrackerConfig::default());
/// tracker.set_category(Category::Hand, 10);
/// assert_eq!(tracker.state(), ValidationState::Under);
///
/// tracker.set_category(Category::Discarded, 2);
/// assert_eq!(tracker.state(), ValidationState::Balanced);
/// assert!(tracker.projected_rounds().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ConsistencyTracker {
    config: TrackerConfig,
    pool: PoolDeclaration,
    counts: CategoryCounts,
    state: ValidationState,
}

impl ConsistencyTracker {
    /// Start a session: pool from config, every category empty.
    pub fn new(config: TrackerConfig) -> Self {
        let pool = config.initial_declaration();
        let counts = CategoryCounts::default();
        Self {
            state: ValidationState::evaluate(pool, counts.placed_total()),
            config,
            pool,
            counts,
        }
    }

    /// Apply a command and re-derive the validation state.
    ///
    /// Total for every command: nothing here can fail.
    pub fn apply(&mut self, command: Command) -> ValidationState {
        match command {
            Command::SetTotal(total) => self.pool = PoolDeclaration::from_input(total),
            Command::SetCategory(category, count) => self.counts[category] = count,
        }
        self.reconcile();

        debug!(
            kind = command.kind(),
            pool = %self.pool,
            placed = self.placed_total(),
            state = %self.state,
            "applied command"
        );
        self.state
    }

    /// Declare or clear the pool total.
    pub fn set_total(&mut self, total: Option<i64>) -> ValidationState {
        self.apply(Command::SetTotal(total))
    }

    /// Replace one category's count.
    pub fn set_category(&mut self, category: Category, count: u32) -> ValidationState {
        self.apply(Command::SetCategory(category, count))
    }

    /// Add one card to a category, up to [`range_max`](Self::range_max).
    ///
    /// No-op once the category has reached the bound.
    pub fn increment(&mut self, category: Category) -> ValidationState {
        let count = self.counts[category];
        if count >= self.range_max() {
            return self.state;
        }
        self.set_category(category, count + 1)
    }

    /// Remove one card from a category. No-op at zero.
    pub fn decrement(&mut self, category: Category) -> ValidationState {
        match self.counts[category].checked_sub(1) {
            Some(count) => self.set_category(category, count),
            None => self.state,
        }
    }

    fn reconcile(&mut self) {
        self.state = ValidationState::evaluate(self.pool, self.placed_total());
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn pool(&self) -> PoolDeclaration {
        self.pool
    }

    #[must_use]
    pub fn counts(&self) -> CategoryCounts {
        self.counts
    }

    #[must_use]
    pub fn count(&self, category: Category) -> u32 {
        self.counts[category]
    }

    /// Sum of all four categories.
    #[must_use]
    pub fn placed_total(&self) -> u64 {
        self.counts.placed_total()
    }

    #[must_use]
    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Upper bound for counter inputs: the declared total, or the
    /// configured default pool size while undeclared.
    #[must_use]
    pub fn range_max(&self) -> u32 {
        self.pool.total().unwrap_or(self.config.default_pool_size)
    }

    /// Cards still to place while `Under`.
    #[must_use]
    pub fn deficit(&self) -> Option<u64> {
        match (self.state, self.pool) {
            (ValidationState::Under, PoolDeclaration::Declared(total)) => {
                Some(u64::from(total) - self.placed_total())
            }
            _ => None,
        }
    }

    /// Cards placed beyond the declared total while `Over`.
    #[must_use]
    pub fn surplus(&self) -> Option<u64> {
        match (self.state, self.pool) {
            (ValidationState::Over, PoolDeclaration::Declared(total)) => {
                Some(self.placed_total() - u64::from(total))
            }
            _ => None,
        }
    }

    /// Rounds left, projected from hand and discard. Only when `Balanced`.
    #[must_use]
    pub fn projected_rounds(&self) -> Option<u64> {
        self.state
            .is_balanced()
            .then(|| projection::project_rounds(self.counts.hand, self.counts.discarded))
    }

    /// Everything a front-end needs to render, in one value.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            pool: self.pool,
            counts: self.counts,
            placed_total: self.placed_total(),
            state: self.state,
            rounds: self.projected_rounds(),
        }
    }
}

impl Default for ConsistencyTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

/// Read-only copy of the tracker's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub pool: PoolDeclaration,
    pub counts: CategoryCounts,
    pub placed_total: u64,
    pub state: ValidationState,
    /// Present only when `state` is `Balanced`.
    pub rounds: Option<u64>,
}
