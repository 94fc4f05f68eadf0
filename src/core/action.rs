//! Board actions: one variant per user interaction.
//!
//! Every button press or input change on a panel maps to exactly one
//! `BoardAction`. Hosts that prefer a single entry point (a message loop,
//! a Python binding, a scripted replay in tests) dispatch these through
//! `GameState::apply` instead of calling the individual methods.

use serde::{Deserialize, Serialize};

use super::config::PlayerCount;
use super::player::PlayerId;

/// A single user interaction with the board.
///
/// ## Example
///
/// ```
/// use commander_counter::core::{BoardAction, GameState, PlayerId};
///
/// let mut board = GameState::default();
/// board.apply(&BoardAction::AdjustCommanderDamage {
///     receiver: PlayerId::new(0),
///     source: PlayerId::new(1),
///     delta: 3,
/// });
///
/// assert_eq!(board.player(PlayerId::new(0)).unwrap().life, 37);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardAction {
    SetPlayerCount { count: PlayerCount },
    SetName { player: PlayerId, name: String },
    AdjustLife { player: PlayerId, delta: i64 },
    AdjustPoison { player: PlayerId, delta: i64 },
    AdjustCommanderDamage { receiver: PlayerId, source: PlayerId, delta: i64 },
    ToggleRotation { player: PlayerId },
    OpenCommanderDamage { player: PlayerId },
    OpenPoison { player: PlayerId },
    CloseDialog,
    Reset,
}

impl BoardAction {
    /// The player this action targets, if it targets one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BoardAction::SetName { player, .. }
            | BoardAction::AdjustLife { player, .. }
            | BoardAction::AdjustPoison { player, .. }
            | BoardAction::ToggleRotation { player }
            | BoardAction::OpenCommanderDamage { player }
            | BoardAction::OpenPoison { player } => Some(*player),
            BoardAction::AdjustCommanderDamage { receiver, .. } => Some(*receiver),
            BoardAction::SetPlayerCount { .. } | BoardAction::CloseDialog | BoardAction::Reset => {
                None
            }
        }
    }

    /// True if the action can change life, poison or damage.
    #[must_use]
    pub fn changes_counters(&self) -> bool {
        matches!(
            self,
            BoardAction::AdjustLife { .. }
                | BoardAction::AdjustPoison { .. }
                | BoardAction::AdjustCommanderDamage { .. }
                | BoardAction::Reset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_player() {
        let action = BoardAction::AdjustCommanderDamage {
            receiver: PlayerId::new(2),
            source: PlayerId::new(0),
            delta: 1,
        };
        assert_eq!(action.player(), Some(PlayerId::new(2)));
        assert_eq!(BoardAction::Reset.player(), None);
        assert_eq!(
            BoardAction::OpenPoison { player: PlayerId::new(1) }.player(),
            Some(PlayerId::new(1))
        );
    }

    #[test]
    fn test_changes_counters() {
        assert!(BoardAction::Reset.changes_counters());
        let poison = BoardAction::AdjustPoison { player: PlayerId::new(0), delta: 1 };
        assert!(poison.changes_counters());
        assert!(!BoardAction::CloseDialog.changes_counters());
        let rename = BoardAction::SetName { player: PlayerId::new(0), name: "A".into() };
        assert!(!rename.changes_counters());
    }

    #[test]
    fn test_serialization() {
        let action = BoardAction::SetPlayerCount { count: PlayerCount::Five };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"set_player_count","count":5}"#);

        let parsed: BoardAction =
            serde_json::from_str(r#"{"type":"adjust_life","player":1,"delta":-3}"#).unwrap();
        assert_eq!(parsed, BoardAction::AdjustLife { player: PlayerId::new(1), delta: -3 });
    }
}
