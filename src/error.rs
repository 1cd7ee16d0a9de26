//! Errors raised when building commands from loosely-typed events.
//!
//! Tracker operations themselves never fail. These errors only come from
//! the boundary where an integrating layer hands over raw event data.

use thiserror::Error;

/// A raw event could not be turned into a [`Command`](crate::tracker::Command).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The event kind is not one the tracker understands.
    #[error("unknown command kind '{0}'")]
    UnknownKind(String),

    /// The category name is not one of the four categories.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A category update arrived without naming a category.
    #[error("{kind} requires a category")]
    MissingCategory { kind: &'static str },

    /// A category update arrived without a value.
    #[error("{kind} requires a value")]
    MissingValue { kind: &'static str },

    /// A total update named a category.
    #[error("{kind} does not take a category (got '{category}')")]
    UnexpectedCategory {
        kind: &'static str,
        category: String,
    },
}
