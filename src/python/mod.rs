//! Python bindings for the stamina calculator.
//!
//! # Quick Start
//!
//! ```python
//! import stamina_calc as sc
//!
//! tracker = sc.Tracker(total=12)
//! tracker.set_category("hand", 4)
//! tracker.set_category("discarded", 4)
//! tracker.set_category("lost", 2)
//! tracker.set_category("active", 2)
//!
//! print(tracker.state)      # "balanced"
//! print(tracker.headline()) # "You have 5 rounds left"
//! ```

use pyo3::prelude::*;

mod py_projection;
mod py_tracker;

pub use py_projection::*;
pub use py_tracker::*;

/// stamina_calc: card pool tracking and round projection.
#[pymodule]
fn stamina_calc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTracker>()?;
    m.add_class::<PyProjection>()?;
    m.add_function(wrap_pyfunction!(py_project, m)?)?;
    m.add_function(wrap_pyfunction!(py_project_rounds, m)?)?;
    m.add("DEFAULT_POOL_SIZE", crate::core::DEFAULT_POOL_SIZE)?;
    Ok(())
}
