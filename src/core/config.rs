//! Board configuration types.
//!
//! - `PlayerCount`: The five supported table sizes (2-6)
//! - `CounterConfig`: Starting life, lethal thresholds, quick adjustments and
//!   device breakpoints
//!
//! Hosts usually run with `CounterConfig::default()`. A JSON document can
//! override any subset of fields via `CounterConfig::from_json`.

use serde::{Deserialize, Serialize};

use super::error::{CounterError, CounterResult};

/// Number of players seated at the device.
///
/// Only 2-6 players are supported; every layout and resize operation is
/// keyed by this enum so an unsupported count can never reach the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PlayerCount {
    Two,
    Three,
    #[default]
    Four,
    Five,
    Six,
}

impl PlayerCount {
    /// All supported counts in ascending order.
    pub const ALL: [PlayerCount; 5] = [
        PlayerCount::Two,
        PlayerCount::Three,
        PlayerCount::Four,
        PlayerCount::Five,
        PlayerCount::Six,
    ];

    /// Get the count as a plain number.
    ///
    /// ```
    /// use commander_counter::core::PlayerCount;
    ///
    /// assert_eq!(PlayerCount::Five.get(), 5);
    /// ```
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
            PlayerCount::Five => 5,
            PlayerCount::Six => 6,
        }
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = CounterError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            2 => Ok(PlayerCount::Two),
            3 => Ok(PlayerCount::Three),
            4 => Ok(PlayerCount::Four),
            5 => Ok(PlayerCount::Five),
            6 => Ok(PlayerCount::Six),
            other => Err(CounterError::InvalidPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.get()
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Players", self.get())
    }
}

/// Board configuration.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Life every player starts with and returns to on reset (default: 40).
    pub starting_life: i64,

    /// Poison counters at which a player is eliminated (default: 10).
    pub poison_lethal: u32,

    /// Commander damage from a single source at which a player is
    /// eliminated (default: 21).
    pub commander_damage_lethal: u32,

    /// Table size for a fresh session (default: 4).
    pub default_player_count: PlayerCount,

    /// Life deltas offered as one-tap buttons on the full board.
    pub quick_adjustments: Vec<i64>,

    /// Viewports narrower than this are mobile (default: 768).
    pub mobile_breakpoint: u32,

    /// Landscape viewports at most this tall are mobile (default: 860).
    pub landscape_max_height: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            starting_life: 40,
            poison_lethal: 10,
            commander_damage_lethal: 21,
            default_player_count: PlayerCount::Four,
            quick_adjustments: vec![-10, -5, 5, 10],
            mobile_breakpoint: 768,
            landscape_max_height: 860,
        }
    }
}

impl CounterConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> CounterResult<Self> {
        let config: CounterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are usable.
    pub fn validate(&self) -> CounterResult<()> {
        if self.starting_life <= 0 {
            return Err(CounterError::InvalidConfig(format!(
                "starting_life must be positive, got {}",
                self.starting_life
            )));
        }
        if self.poison_lethal == 0 {
            return Err(CounterError::InvalidConfig("poison_lethal must be positive".into()));
        }
        if self.commander_damage_lethal == 0 {
            return Err(CounterError::InvalidConfig(
                "commander_damage_lethal must be positive".into(),
            ));
        }
        if self.quick_adjustments.contains(&0) {
            return Err(CounterError::InvalidConfig(
                "quick_adjustments must not contain 0".into(),
            ));
        }
        Ok(())
    }

    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the poison threshold.
    #[must_use]
    pub fn with_poison_lethal(mut self, poison: u32) -> Self {
        self.poison_lethal = poison;
        self
    }

    /// Set the single-source commander damage threshold.
    #[must_use]
    pub fn with_commander_damage_lethal(mut self, damage: u32) -> Self {
        self.commander_damage_lethal = damage;
        self
    }

    /// Set the table size used for new sessions.
    #[must_use]
    pub fn with_player_count(mut self, count: PlayerCount) -> Self {
        self.default_player_count = count;
        self
    }

    /// Replace the quick life adjustments.
    #[must_use]
    pub fn with_quick_adjustments(mut self, deltas: Vec<i64>) -> Self {
        self.quick_adjustments = deltas;
        self
    }
}
