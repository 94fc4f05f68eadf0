//! Player identification and the per-player roster.
//!
//! ## PlayerId
//!
//! Positional player identifier. A player's index in the roster is its only
//! identity; the same index keys the commander damage matrix.
//!
//! ## Roster
//!
//! Ordered player store backed by `im::Vector` so board snapshots clone in
//! O(1). Operations on an index outside the roster are ignored.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::PlayerCount;

/// Positional player identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` players.
    ///
    /// ```
    /// use commander_counter::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Counters tracked for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name. Any string is accepted, including an empty one.
    pub name: String,
    /// Life total. Unbounded in both directions.
    pub life: i64,
    /// Poison counters. Never negative.
    pub poison: u32,
}

impl PlayerState {
    /// Fresh state for the seat `id`.
    #[must_use]
    pub fn new(id: PlayerId, starting_life: i64) -> Self {
        Self {
            name: id.to_string(),
            life: starting_life,
            poison: 0,
        }
    }
}

/// Ordered roster of players for the active game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vector<PlayerState>,
    starting_life: i64,
}

impl Roster {
    /// Create a roster of default players.
    #[must_use]
    pub fn new(count: PlayerCount, starting_life: i64) -> Self {
        let players = PlayerId::all(count.get())
            .map(|id| PlayerState::new(id, starting_life))
            .collect();
        Self {
            players,
            starting_life,
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if the roster has no players. Never the case for a live board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Life every player returns to on reset.
    #[must_use]
    pub fn starting_life(&self) -> i64 {
        self.starting_life
    }

    /// Get a player's state.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player.index())
    }

    /// Iterate over (PlayerId, &PlayerState) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Resize to exactly `count` players.
    ///
    /// Players below the new count keep their state; new seats get a
    /// default player; seats beyond the count are dropped.
    pub fn resize(&mut self, count: PlayerCount) {
        let target = count.get();
        if self.players.len() > target {
            self.players.truncate(target);
        }
        while self.players.len() < target {
            let id = PlayerId(self.players.len() as u8);
            self.players.push_back(PlayerState::new(id, self.starting_life));
        }
    }

    /// Replace a player's name. Returns false if the player does not exist.
    pub fn set_name(&mut self, player: PlayerId, name: impl Into<String>) -> bool {
        match self.players.get_mut(player.index()) {
            Some(state) => {
                state.name = name.into();
                true
            }
            None => {
                debug!("set_name ignored for missing {player}");
                false
            }
        }
    }

    /// Add `delta` to a player's life. Returns the new life total.
    pub fn adjust_life(&mut self, player: PlayerId, delta: i64) -> Option<i64> {
        let Some(state) = self.players.get_mut(player.index()) else {
            debug!("adjust_life ignored for missing {player}");
            return None;
        };
        state.life = state.life.saturating_add(delta);
        trace!("{player} life {delta:+} -> {}", state.life);
        Some(state.life)
    }

    /// Add `delta` to a player's poison, clamped at zero. Returns the new count.
    pub fn adjust_poison(&mut self, player: PlayerId, delta: i64) -> Option<u32> {
        let Some(state) = self.players.get_mut(player.index()) else {
            debug!("adjust_poison ignored for missing {player}");
            return None;
        };
        let raw = i64::from(state.poison).saturating_add(delta).max(0);
        state.poison = u32::try_from(raw).unwrap_or(u32::MAX);
        trace!("{player} poison {delta:+} -> {}", state.poison);
        Some(state.poison)
    }

    /// Restore starting life and clear poison. Names and count are kept.
    pub fn reset(&mut self) {
        let starting_life = self.starting_life;
        for state in self.players.iter_mut() {
            state.life = starting_life;
            state.poison = 0;
        }
    }
}
