//! Board bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{BoardAction, CounterConfig, GameState, PlayerId};
use crate::rules::GameResult;

use super::py_core::{player_count, to_py_err, PyPlayerId};

/// Python wrapper for the board.
///
/// Players are addressed by 0-based seat index.
#[pyclass(name = "LifeCounter")]
pub struct PyLifeCounter {
    state: GameState,
}

#[pymethods]
impl PyLifeCounter {
    /// Create a new board.
    ///
    /// # Arguments
    /// - player_count: Number of players (2-6)
    /// - config_json: Optional JSON overriding `CounterConfig` fields
    #[new]
    #[pyo3(signature = (player_count = 4, config_json = None))]
    fn new(player_count: usize, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => CounterConfig::from_json(json).map_err(to_py_err)?,
            None => CounterConfig::default(),
        };
        let mut state = GameState::new(config);
        state.try_set_player_count(player_count).map_err(to_py_err)?;
        Ok(Self { state })
    }

    /// Get the number of players.
    #[getter]
    fn player_count(&self) -> usize {
        self.state.player_count().get()
    }

    /// Change the number of players (2-6), keeping existing seats.
    #[setter]
    fn set_player_count(&mut self, count: usize) -> PyResult<()> {
        self.state.set_player_count(player_count(count)?);
        Ok(())
    }

    fn name(&self, player: u8) -> Option<String> {
        self.state.player(PlayerId::new(player)).map(|p| p.name.clone())
    }

    fn life(&self, player: u8) -> Option<i64> {
        self.state.player(PlayerId::new(player)).map(|p| p.life)
    }

    fn poison(&self, player: u8) -> Option<u32> {
        self.state.player(PlayerId::new(player)).map(|p| p.poison)
    }

    fn set_name(&mut self, player: u8, name: String) -> bool {
        self.state.set_name(PlayerId::new(player), name)
    }

    fn adjust_life(&mut self, player: u8, delta: i64) -> Option<i64> {
        self.state.adjust_life(PlayerId::new(player), delta)
    }

    fn adjust_poison(&mut self, player: u8, delta: i64) -> Option<u32> {
        self.state.adjust_poison(PlayerId::new(player), delta)
    }

    /// Adjust commander damage; returns the delta actually applied.
    fn adjust_commander_damage(&mut self, receiver: u8, source: u8, delta: i64) -> i64 {
        self.state
            .adjust_commander_damage(PlayerId::new(receiver), PlayerId::new(source), delta)
    }

    /// Apply an action given as JSON, e.g. `{"type": "reset"}`.
    fn apply_json(&mut self, json: &str) -> PyResult<()> {
        let action: BoardAction = serde_json::from_str(json)
            .map_err(|err| pyo3::exceptions::PyValueError::new_err(err.to_string()))?;
        self.state.apply(&action);
        Ok(())
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn is_eliminated(&self, player: u8) -> bool {
        self.state.is_eliminated(PlayerId::new(player))
    }

    /// Seats still in the game.
    fn survivors(&self) -> Vec<PyPlayerId> {
        self.state.survivors().into_iter().map(PyPlayerId).collect()
    }

    /// Winning seat, if exactly one player remains.
    fn winner(&self) -> Option<PyPlayerId> {
        match self.state.outcome() {
            Some(GameResult::Winner(p)) => Some(PyPlayerId(p)),
            _ => None,
        }
    }

    /// Life totals as a numpy array.
    fn life_totals<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        let totals: Vec<i64> = self.state.roster().iter().map(|(_, p)| p.life).collect();
        PyArray1::from_vec_bound(py, totals)
    }

    /// Commander damage as an N x N numpy array indexed `[receiver, source]`.
    fn commander_damage<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let n = self.state.player_count().get();
        let matrix = self.state.commander_damage();
        let flat: Vec<u32> = self
            .state
            .player_ids()
            .flat_map(|r| self.state.player_ids().map(move |s| matrix.get(r, s)))
            .collect();
        PyArray1::from_vec_bound(py, flat).reshape([n, n])
    }

    /// Copy the board.
    fn copy(&self) -> Self {
        Self {
            state: self.state.snapshot(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.state.outcome() {
            Some(GameResult::Winner(p)) => format!("winner={p}"),
            Some(GameResult::Draw) => "draw".to_string(),
            None => "ongoing".to_string(),
        };
        format!("LifeCounter(players={}, {status})", self.state.player_count().get())
    }
}
