//! Layout bindings for Python.

use pyo3::prelude::*;

use crate::layout::{GridConfig, Placement};

use super::py_core::player_count;

/// Python wrapper for a compact-grid placement.
#[pyclass(name = "Placement")]
#[derive(Clone, Debug)]
pub struct PyPlacement(pub Placement);

#[pymethods]
impl PyPlacement {
    #[getter]
    fn col_start(&self) -> u8 {
        self.0.col_start
    }

    #[getter]
    fn row_start(&self) -> u8 {
        self.0.row_start
    }

    #[getter]
    fn row_span(&self) -> Option<u8> {
        self.0.row_span
    }

    /// Rotation class: "0", "180" or "side".
    #[getter]
    fn rotation(&self) -> &'static str {
        match self.0.rotation {
            crate::layout::RotationClass::Upright => "0",
            crate::layout::RotationClass::Inverted => "180",
            crate::layout::RotationClass::Side => "side",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Placement(col={}, row={}, span={:?}, rotation={})",
            self.0.col_start,
            self.0.row_start,
            self.0.row_span,
            self.rotation()
        )
    }
}

/// Grid shape and placements for a player count.
///
/// Returns `(cols, rows, placements)`.
#[pyfunction]
pub fn grid_layout(count: usize) -> PyResult<(u8, u8, Vec<PyPlacement>)> {
    let grid = GridConfig::for_count(player_count(count)?);
    let placements = grid.placements.iter().copied().map(PyPlacement).collect();
    Ok((grid.cols, grid.rows, placements))
}
