//! Core board types: players, configuration, actions, state, errors.
//!
//! `GameState` is the single owner of everything mutable at the table.
//! The other modules (`damage`, `rules`, `layout`, `surface`) provide the
//! pieces it is built from and the queries evaluated over it.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::BoardAction;
pub use config::{CounterConfig, PlayerCount};
pub use error::{CounterError, CounterResult};
pub use player::{PlayerId, PlayerState, Roster};
pub use state::GameState;
