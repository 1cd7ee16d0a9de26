//! Tracker configuration.
//!
//! The presentation layer configures the tracker at session start:
//! - `default_pool_size`: upper bound for counters while no total is declared
//! - `initial_total`: the declaration the session starts with
//!
//! The default pool size never feeds validation. An undeclared pool is
//! always reported as `Undeclared`, whatever the default is.

use serde::{Deserialize, Serialize};

use super::PoolDeclaration;

/// Pool size assumed for counter ranges when no total is declared.
pub const DEFAULT_POOL_SIZE: u32 = 12;

/// Session configuration for a [`ConsistencyTracker`](crate::tracker::ConsistencyTracker).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Counter range bound used while the pool is undeclared.
    pub default_pool_size: u32,

    /// Total declared when the session starts. `None` starts undeclared.
    pub initial_total: Option<u32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_pool_size: DEFAULT_POOL_SIZE,
            initial_total: Some(DEFAULT_POOL_SIZE),
        }
    }
}

impl TrackerConfig {
    /// Create the default configuration (12 cards, declared).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the session with no declared total.
    pub fn undeclared() -> Self {
        Self {
            initial_total: None,
            ..Self::default()
        }
    }

    /// Set the counter range bound used while undeclared.
    #[must_use]
    pub fn with_default_pool_size(mut self, size: u32) -> Self {
        self.default_pool_size = size;
        self
    }

    /// Set the total declared at session start.
    #[must_use]
    pub fn with_initial_total(mut self, total: u32) -> Self {
        self.initial_total = Some(total);
        self
    }

    /// Declaration the tracker starts with.
    #[must_use]
    pub fn initial_declaration(&self) -> PoolDeclaration {
        PoolDeclaration::from(self.initial_total)
    }
}
