//! Values a front-end renders from the tracker.

pub mod readout;

pub use readout::{category_label, Readout};
