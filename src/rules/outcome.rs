//! Table outcome derived from elimination.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a finished game.
///
/// Derived from the elimination query like everything else; a correction
/// that brings a player back un-finishes the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one player is still standing.
    Winner(PlayerId),
    /// Every player is eliminated.
    Draw,
}

impl GameResult {
    /// Decide the result from the players still alive.
    ///
    /// Returns `None` while two or more players remain.
    #[must_use]
    pub fn from_survivors(survivors: &[PlayerId]) -> Option<Self> {
        match survivors {
            [] => Some(GameResult::Draw),
            [winner] => Some(GameResult::Winner(*winner)),
            _ => None,
        }
    }
}
