//! Core data model: categories, counts, pool declaration, configuration.
//!
//! These types carry no behaviour beyond normalization. The tracker owns
//! them and keeps the derived values consistent.

pub mod category;
pub mod config;
pub mod pool;

pub use category::{Category, CategoryCounts};
pub use config::{TrackerConfig, DEFAULT_POOL_SIZE};
pub use pool::PoolDeclaration;
