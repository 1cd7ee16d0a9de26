//! Tracker bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::pool::clamp_count;
use crate::core::{Category, TrackerConfig, DEFAULT_POOL_SIZE};
use crate::display::{category_label, Readout};
use crate::error::CommandError;
use crate::tracker::{Command, ConsistencyTracker, RawEvent};

impl From<CommandError> for PyErr {
    fn from(err: CommandError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_category(name: &str) -> PyResult<Category> {
    Ok(name.parse::<Category>()?)
}

/// Python wrapper for ConsistencyTracker.
#[pyclass(name = "Tracker")]
#[derive(Clone, Debug)]
pub struct PyTracker(pub ConsistencyTracker);

#[pymethods]
impl PyTracker {
    /// Create a tracker. `total=None` starts undeclared.
    #[new]
    #[pyo3(signature = (total=Some(DEFAULT_POOL_SIZE), default_pool_size=DEFAULT_POOL_SIZE))]
    fn new(total: Option<u32>, default_pool_size: u32) -> Self {
        let config = TrackerConfig {
            default_pool_size,
            initial_total: total,
        };
        Self(ConsistencyTracker::new(config))
    }

    /// Declare the pool total, or clear it with `None`.
    #[pyo3(signature = (total=None))]
    fn set_total(&mut self, total: Option<i64>) -> String {
        self.0.set_total(total).to_string()
    }

    /// Replace one category's count. Negative counts clamp to zero.
    fn set_category(&mut self, category: &str, count: i64) -> PyResult<String> {
        let category = parse_category(category)?;
        Ok(self.0.set_category(category, clamp_count(count)).to_string())
    }

    /// Apply a raw event given as `kind`, `category`, `value`.
    #[pyo3(signature = (kind, category=None, value=None))]
    fn send(
        &mut self,
        kind: String,
        category: Option<String>,
        value: Option<i64>,
    ) -> PyResult<String> {
        let command = Command::try_from(RawEvent {
            kind,
            category,
            value,
        })?;
        Ok(self.0.apply(command).to_string())
    }

    fn increment(&mut self, category: &str) -> PyResult<String> {
        Ok(self.0.increment(parse_category(category)?).to_string())
    }

    fn decrement(&mut self, category: &str) -> PyResult<String> {
        Ok(self.0.decrement(parse_category(category)?).to_string())
    }

    /// Declared total, or `None` while undeclared.
    #[getter]
    fn total(&self) -> Option<u32> {
        self.0.pool().total()
    }

    /// Category counts as `(name, count)` pairs.
    #[getter]
    fn counts(&self) -> Vec<(&'static str, u32)> {
        self.0.counts().iter().map(|(c, n)| (c.name(), n)).collect()
    }

    #[getter]
    fn placed_total(&self) -> u64 {
        self.0.placed_total()
    }

    /// Validation state name.
    #[getter]
    fn state(&self) -> String {
        self.0.state().to_string()
    }

    #[getter]
    fn range_max(&self) -> u32 {
        self.0.range_max()
    }

    /// Rounds left, or `None` unless balanced.
    fn projected_rounds(&self) -> Option<u64> {
        self.0.projected_rounds()
    }

    /// Headline text for the current state.
    fn headline(&self) -> String {
        Readout::from_tracker(&self.0).to_string()
    }

    /// Counter label for a category, e.g. "Cards in hand: 4".
    fn label(&self, category: &str) -> PyResult<String> {
        Ok(category_label(&self.0, parse_category(category)?))
    }

    fn __repr__(&self) -> String {
        format!(
            "Tracker(pool={}, placed={}, state={})",
            self.0.pool(),
            self.0.placed_total(),
            self.0.state()
        )
    }
}
