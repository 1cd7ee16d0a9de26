//! Projection bindings for Python.

use pyo3::prelude::*;

use crate::projection::{self, Projection, Step};

/// Python wrapper for Projection.
#[pyclass(name = "Projection")]
#[derive(Clone, Debug)]
pub struct PyProjection(pub Projection);

#[pymethods]
impl PyProjection {
    /// Complete rounds playable.
    #[getter]
    fn rounds(&self) -> u64 {
        self.0.rounds
    }

    /// Whether the short rest was taken.
    #[getter]
    fn rested(&self) -> bool {
        self.0.rested
    }

    /// Steps as `(kind, hand, discarded)` tuples, kind being "play" or "rest".
    #[getter]
    fn steps(&self) -> Vec<(&'static str, u64, u64)> {
        self.0
            .steps
            .iter()
            .map(|step| match *step {
                Step::Play { hand, discarded } => ("play", hand, discarded),
                Step::ShortRest { hand, discarded } => ("rest", hand, discarded),
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Projection(rounds={}, rested={})",
            self.0.rounds,
            if self.0.rested { "True" } else { "False" }
        )
    }
}

/// Simulate play from the given hand and discard pile.
#[pyfunction]
#[pyo3(name = "project")]
pub fn py_project(hand: u32, discarded: u32) -> PyProjection {
    PyProjection(projection::project(hand, discarded))
}

/// Number of complete rounds playable from the given hand and discard pile.
#[pyfunction]
#[pyo3(name = "project_rounds")]
pub fn py_project_rounds(hand: u32, discarded: u32) -> u64 {
    projection::project_rounds(hand, discarded)
}
