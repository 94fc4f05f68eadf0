//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CounterError, PlayerCount, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID from a 0-based seat index.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Convert a Python player count, raising `ValueError` outside 2-6.
pub(crate) fn player_count(count: usize) -> PyResult<PlayerCount> {
    PlayerCount::try_from(count).map_err(to_py_err)
}

pub(crate) fn to_py_err(err: CounterError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
