//! Python bindings for the tennis-sim match simulator.
//!
//! # Quick Start
//!
//! ```python
//! import tennis_sim as ts
//!
//! player = ts.PlayerStats(0.62, 0.74, 0.55, 0.08, 0.31, 0.52, 0.64, 0.42, 1.2)
//! opponent = ts.PlayerStats(0.58, 0.71, 0.51, 0.10, 0.29, 0.49, 0.60, 0.40, 1.0)
//!
//! result = ts.simulate(player, opponent, format="best5", num_simulations=5000,
//!                      progress=lambda done, total: print(done, total))
//! print(result.player1_win_pct, result.set_distributions)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_simulate;

pub use py_core::*;
pub use py_simulate::*;

/// tennis_sim: Monte Carlo tennis match simulation.
#[pymodule]
fn tennis_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerStats>()?;
    m.add_class::<PyAggregateResult>()?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    Ok(())
}
