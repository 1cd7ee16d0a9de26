//! Consistency tracking between the declared pool and placed cards.
//!
//! - `command`: tagged update commands and the raw-event boundary
//! - `validation`: the four-way validation state
//! - `consistency`: the tracker that applies commands and keeps the state current

pub mod command;
pub mod consistency;
pub mod validation;

pub use command::{Command, RawEvent};
pub use consistency::{ConsistencyTracker, TrackerSnapshot};
pub use validation::ValidationState;
