//! # stamina-calc
//!
//! Tracks a pool of cards across four categories and projects how many
//! rounds of play remain before the pool runs dry.
//!
//! ## Design Principles
//!
//! 1. **Commands Never Fail**: Every tracker update is total. Over-filled or
//!    under-filled pools are ordinary validation states, not errors.
//!
//! 2. **Derived State Is Never Stale**: The placed total is computed from the
//!    counts, and the validation state is re-derived inside every command.
//!
//! 3. **Types Over Checks**: An undeclared pool, a command payload and a
//!    category name are all sum types, so mismatches fail to compile.
//!
//! ## Modules
//!
//! - `core`: Categories, counts, pool declaration, configuration
//! - `tracker`: Commands, validation state, the consistency tracker
//! - `projection`: Remaining-round simulation
//! - `display`: Headline and counter text for front-ends
//! - `error`: Boundary errors for malformed raw events

pub mod core;
pub mod display;
pub mod error;
pub mod projection;
pub mod tracker;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Category, CategoryCounts, PoolDeclaration, TrackerConfig, DEFAULT_POOL_SIZE};

pub use crate::tracker::{Command, ConsistencyTracker, RawEvent, TrackerSnapshot, ValidationState};

pub use crate::projection::{project, project_rounds, Projection, Step};

pub use crate::display::{category_label, Readout};

pub use crate::error::CommandError;
