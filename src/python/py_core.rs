//! Core type bindings for Python.

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{PlayerStats, SimError};

impl From<SimError> for PyErr {
    fn from(err: SimError) -> PyErr {
        match err {
            SimError::Cancelled { .. } => PyRuntimeError::new_err(err.to_string()),
            SimError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for PlayerStats.
#[pyclass(name = "PlayerStats")]
#[derive(Clone, Debug)]
pub struct PyPlayerStats {
    #[pyo3(get, set)]
    pub first_serve_in_pct: f64,
    #[pyo3(get, set)]
    pub first_serve_win_pct: f64,
    #[pyo3(get, set)]
    pub second_serve_win_pct: f64,
    #[pyo3(get, set)]
    pub double_fault_per_second_serve: f64,
    #[pyo3(get, set)]
    pub vs_first_serve_win_pct: f64,
    #[pyo3(get, set)]
    pub vs_second_serve_win_pct: f64,
    #[pyo3(get, set)]
    pub break_point_save_pct: f64,
    #[pyo3(get, set)]
    pub break_point_conversion_pct: f64,
    #[pyo3(get, set)]
    pub dominance_ratio: f64,
}

#[pymethods]
impl PyPlayerStats {
    /// Create a statistics record. Values are checked when a simulation
    /// starts, not here.
    #[new]
    #[pyo3(signature = (
        first_serve_in_pct,
        first_serve_win_pct,
        second_serve_win_pct,
        double_fault_per_second_serve,
        vs_first_serve_win_pct,
        vs_second_serve_win_pct,
        break_point_save_pct,
        break_point_conversion_pct,
        dominance_ratio = 1.0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        first_serve_in_pct: f64,
        first_serve_win_pct: f64,
        second_serve_win_pct: f64,
        double_fault_per_second_serve: f64,
        vs_first_serve_win_pct: f64,
        vs_second_serve_win_pct: f64,
        break_point_save_pct: f64,
        break_point_conversion_pct: f64,
        dominance_ratio: f64,
    ) -> Self {
        Self {
            first_serve_in_pct,
            first_serve_win_pct,
            second_serve_win_pct,
            double_fault_per_second_serve,
            vs_first_serve_win_pct,
            vs_second_serve_win_pct,
            break_point_save_pct,
            break_point_conversion_pct,
            dominance_ratio,
        }
    }

    /// Probability that a second serve lands in.
    #[getter]
    fn second_serve_in_pct(&self) -> f64 {
        self.stats().second_serve_in_pct()
    }

    /// Raise ValueError if any field is out of range.
    fn validate(&self) -> PyResult<()> {
        self.stats().validate("player")?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "PlayerStats(first_serve_in_pct={}, first_serve_win_pct={}, dominance_ratio={})",
            self.first_serve_in_pct, self.first_serve_win_pct, self.dominance_ratio
        )
    }
}

impl PyPlayerStats {
    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            first_serve_in_pct: self.first_serve_in_pct,
            first_serve_win_pct: self.first_serve_win_pct,
            second_serve_win_pct: self.second_serve_win_pct,
            double_fault_per_second_serve: self.double_fault_per_second_serve,
            vs_first_serve_win_pct: self.vs_first_serve_win_pct,
            vs_second_serve_win_pct: self.vs_second_serve_win_pct,
            break_point_save_pct: self.break_point_save_pct,
            break_point_conversion_pct: self.break_point_conversion_pct,
            dominance_ratio: self.dominance_ratio,
        }
    }
}
