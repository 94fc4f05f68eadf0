//! Python bindings for the commander-counter engine.
//!
//! # Quick Start
//!
//! ```python
//! import commander_counter as cc
//!
//! board = cc.LifeCounter(player_count=4)
//! board.adjust_commander_damage(receiver=0, source=1, delta=5)
//! assert board.life(0) == 35
//!
//! cols, rows, placements = cc.grid_layout(3)
//! damage = board.commander_damage()  # numpy array, [receiver, source]
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;
mod py_layout;

pub use py_board::*;
pub use py_core::*;
pub use py_layout::*;

/// commander_counter: life, poison and commander damage for 2-6 players.
#[pymodule]
fn commander_counter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyLifeCounter>()?;
    m.add_class::<PyPlacement>()?;
    m.add_function(wrap_pyfunction!(grid_layout, m)?)?;
    Ok(())
}
