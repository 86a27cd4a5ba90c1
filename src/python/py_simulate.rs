//! Simulation bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;

use crate::core::{MatchFormat, SimError, SimulationConfig};
use crate::monte_carlo::{AggregateResult, MonteCarlo, Progress};
use crate::stats::ObservedStats;

use super::py_core::PyPlayerStats;

/// Python wrapper for AggregateResult.
#[pyclass(name = "AggregateResult")]
#[derive(Clone, Debug)]
pub struct PyAggregateResult(pub AggregateResult);

#[pymethods]
impl PyAggregateResult {
    #[getter]
    fn player1_wins(&self) -> u32 {
        self.0.player1_wins
    }

    #[getter]
    fn player2_wins(&self) -> u32 {
        self.0.player2_wins
    }

    #[getter]
    fn player1_win_pct(&self) -> f64 {
        self.0.player1_win_pct
    }

    #[getter]
    fn player2_win_pct(&self) -> f64 {
        self.0.player2_win_pct
    }

    #[getter]
    fn total_simulations(&self) -> u32 {
        self.0.total_simulations
    }

    #[getter]
    fn average_total_games(&self) -> f64 {
        self.0.average_total_games
    }

    /// Final set counts, e.g. `{"2-0": 412, "2-1": 160, ...}`.
    #[getter]
    fn set_distributions(&self) -> HashMap<String, u32> {
        self.0
            .set_distributions
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect()
    }

    #[getter]
    fn has_observed_stats(&self) -> bool {
        self.0.observed_stats.is_some()
    }

    /// Average observed percentages as `{"player1": {...}, "player2": {...}}`,
    /// or `None` when tracking was off.
    #[getter]
    fn observed_stats(&self) -> Option<HashMap<String, HashMap<String, f64>>> {
        self.0.observed_stats.as_ref().map(|observed| {
            HashMap::from([
                ("player1".to_string(), observed_dict(&observed.player1)),
                ("player2".to_string(), observed_dict(&observed.player2)),
            ])
        })
    }

    /// Serialize the whole result, observed statistics included.
    fn to_json(&self) -> PyResult<String> {
        Ok(serde_json::to_string(&self.0).map_err(SimError::from)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "AggregateResult(player1_win_pct={:.4}, player2_win_pct={:.4}, total_simulations={})",
            self.0.player1_win_pct, self.0.player2_win_pct, self.0.total_simulations
        )
    }
}

fn observed_dict(stats: &ObservedStats) -> HashMap<String, f64> {
    stats
        .named_fields()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Run a Monte Carlo simulation.
///
/// `progress`, if given, is called as `progress(completed, total)` on the
/// calling thread. An exception it raises stops the run and propagates.
#[pyfunction]
#[pyo3(signature = (
    player1,
    player2,
    format = "best3",
    num_simulations = 1000,
    track_detailed_stats = false,
    seed = None,
    progress = None,
    parallel = false
))]
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    py: Python<'_>,
    player1: &PyPlayerStats,
    player2: &PyPlayerStats,
    format: &str,
    num_simulations: u32,
    track_detailed_stats: bool,
    seed: Option<u64>,
    progress: Option<PyObject>,
    parallel: bool,
) -> PyResult<PyAggregateResult> {
    let p1 = player1.stats();
    let p2 = player2.stats();
    p1.validate("player 1")?;
    p2.validate("player 2")?;

    let mut config = SimulationConfig::new()
        .with_format(format.parse::<MatchFormat>()?)
        .with_trials(num_simulations)
        .with_detailed_stats(track_detailed_stats)
        .with_parallel(parallel);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let driver = MonteCarlo::new(config)?;

    let Some(callback) = progress else {
        let result = py.allow_threads(|| driver.run(&p1, &p2, None))?;
        return Ok(PyAggregateResult(result));
    };

    let mut callback_error: Option<PyErr> = None;
    let mut sink = |completed: u32, total: u32| match callback.call1(py, (completed, total)) {
        Ok(_) => Progress::Continue,
        Err(err) => {
            callback_error = Some(err);
            Progress::Cancel
        }
    };

    let outcome = driver.run(&p1, &p2, Some(&mut sink));
    if let Some(err) = callback_error {
        return Err(err);
    }
    Ok(PyAggregateResult(outcome?))
}
