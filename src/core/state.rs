//! Game state for one session at the table.
//!
//! ## GameState
//!
//! Owns every mutable part of the board:
//! - Player count (the only driver of roster size and layout)
//! - Roster (names, life, poison)
//! - Commander damage matrix
//! - Per-player manual rotation flags
//! - The open dialog, if any
//!
//! Every transition that touches more than one component is a single
//! `&mut self` method, so a reader never sees a roster of one size next to
//! a matrix of another, or damage that has not yet been mirrored into life.
//! All storage is `im`-backed; `snapshot()` is O(1).

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::BoardAction;
use super::config::{CounterConfig, PlayerCount};
use super::error::CounterResult;
use super::player::{PlayerId, PlayerState, Roster};
use crate::damage::CommanderDamage;
use crate::layout::{DesktopLayout, GridConfig};
use crate::rules::{EliminationCauses, EliminationRules, GameResult};
use crate::surface::ActiveDialog;

/// Complete board state for the active session.
///
/// Sessions start from `CounterConfig` defaults and are never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: CounterConfig,
    rules: EliminationRules,
    player_count: PlayerCount,
    roster: Roster,
    damage: CommanderDamage,
    rotated: Vector<bool>,
    dialog: ActiveDialog,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl GameState {
    /// Create a fresh board.
    ///
    /// ## Defaults
    ///
    /// - `player_count`: `config.default_player_count`
    /// - Every player at `config.starting_life`, 0 poison
    /// - Empty damage matrix, no rotations, no dialog
    #[must_use]
    pub fn new(config: CounterConfig) -> Self {
        let count = config.default_player_count;
        Self {
            rules: EliminationRules::from(&config),
            player_count: count,
            roster: Roster::new(count, config.starting_life),
            damage: CommanderDamage::new(count),
            rotated: std::iter::repeat(false).take(count.get()).collect(),
            dialog: ActiveDialog::None,
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &EliminationRules {
        &self.rules
    }

    #[must_use]
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count.get())
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.roster.get(player)
    }

    #[must_use]
    pub fn commander_damage(&self) -> &CommanderDamage {
        &self.damage
    }

    #[must_use]
    pub fn active_dialog(&self) -> ActiveDialog {
        self.dialog
    }

    /// O(1) copy for hosts that render from an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // === Player Count ===

    /// Change the table size.
    ///
    /// Roster, damage matrix and rotation flags are resized together,
    /// keeping every value whose index stays in range. A dialog open for a
    /// player who left the table is closed.
    pub fn set_player_count(&mut self, count: PlayerCount) {
        if count != self.player_count {
            debug!("player count {} -> {}", self.player_count.get(), count.get());
        }
        let n = count.get();
        self.player_count = count;
        self.roster.resize(count);
        self.damage.resize(count);
        if self.rotated.len() > n {
            self.rotated.truncate(n);
        }
        while self.rotated.len() < n {
            self.rotated.push_back(false);
        }
        self.dialog.retain_in_range(n);
    }

    /// Change the table size from a raw number.
    pub fn try_set_player_count(&mut self, count: usize) -> CounterResult<()> {
        self.set_player_count(PlayerCount::try_from(count)?);
        Ok(())
    }

    // === Counters ===

    /// Rename a player. Any string is accepted.
    pub fn set_name(&mut self, player: PlayerId, name: impl Into<String>) -> bool {
        self.roster.set_name(player, name)
    }

    /// Change a player's life by `delta`. Returns the new total.
    pub fn adjust_life(&mut self, player: PlayerId, delta: i64) -> Option<i64> {
        self.roster.adjust_life(player, delta)
    }

    /// Change a player's poison by `delta`, clamped at zero. Returns the new count.
    pub fn adjust_poison(&mut self, player: PlayerId, delta: i64) -> Option<u32> {
        self.roster.adjust_poison(player, delta)
    }

    /// Change commander damage dealt to `receiver` by `source`.
    ///
    /// The receiver loses one life per point of damage actually applied and
    /// regains one per point removed. A decrement below zero only counts the
    /// part that was applied: removing 5 from 2 damage restores 2 life.
    /// Returns the applied delta.
    pub fn adjust_commander_damage(
        &mut self,
        receiver: PlayerId,
        source: PlayerId,
        delta: i64,
    ) -> i64 {
        let applied = self.damage.adjust(receiver, source, delta);
        if applied != 0 {
            self.roster.adjust_life(receiver, -applied);
        }
        applied
    }

    /// Start a new game with the same players.
    ///
    /// Restores starting life, clears poison and commander damage. Names,
    /// player count and rotation flags are kept.
    pub fn reset(&mut self) {
        debug!("resetting {}-player game", self.player_count.get());
        self.roster.reset();
        self.damage.reset();
    }

    // === Rotation ===

    /// Flip a panel's manual 180° rotation. Returns the new flag.
    pub fn toggle_rotation(&mut self, player: PlayerId) -> Option<bool> {
        let flag = self.rotated.get_mut(player.index())?;
        *flag = !*flag;
        Some(*flag)
    }

    #[must_use]
    pub fn is_rotated(&self, player: PlayerId) -> bool {
        self.rotated.get(player.index()).copied().unwrap_or(false)
    }

    // === Dialogs ===

    /// Open the commander damage editor for a player.
    pub fn open_damage_dialog(&mut self, player: PlayerId) -> bool {
        self.dialog
            .open(ActiveDialog::CommanderDamage(player), self.player_count.get())
    }

    /// Open the poison editor for a player.
    pub fn open_poison_dialog(&mut self, player: PlayerId) -> bool {
        self.dialog
            .open(ActiveDialog::Poison(player), self.player_count.get())
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    // === Elimination ===

    /// Check whether a player is out. Recomputed on every call.
    #[must_use]
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.rules.is_eliminated(&self.roster, &self.damage, player)
    }

    /// Every condition currently eliminating a player.
    #[must_use]
    pub fn elimination_causes(&self, player: PlayerId) -> EliminationCauses {
        self.rules.causes(&self.roster, &self.damage, player)
    }

    /// Players that are out, in seat order.
    #[must_use]
    pub fn eliminated_players(&self) -> SmallVec<[PlayerId; 6]> {
        self.player_ids().filter(|&p| self.is_eliminated(p)).collect()
    }

    /// Players still in the game, in seat order.
    #[must_use]
    pub fn survivors(&self) -> SmallVec<[PlayerId; 6]> {
        self.player_ids().filter(|&p| !self.is_eliminated(p)).collect()
    }

    /// Winner or draw once at most one player remains.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        GameResult::from_survivors(&self.survivors())
    }

    // === Layout ===

    /// Compact board grid for the current player count.
    #[must_use]
    pub fn grid(&self) -> &'static GridConfig {
        GridConfig::for_count(self.player_count)
    }

    /// Full board arrangement for the current player count.
    #[must_use]
    pub fn desktop_layout(&self) -> DesktopLayout {
        DesktopLayout::for_count(self.player_count)
    }

    // === Dispatch ===

    /// Apply one user interaction.
    pub fn apply(&mut self, action: &BoardAction) {
        match action {
            BoardAction::SetPlayerCount { count } => self.set_player_count(*count),
            BoardAction::SetName { player, name } => {
                self.set_name(*player, name.clone());
            }
            BoardAction::AdjustLife { player, delta } => {
                self.adjust_life(*player, *delta);
            }
            BoardAction::AdjustPoison { player, delta } => {
                self.adjust_poison(*player, *delta);
            }
            BoardAction::AdjustCommanderDamage { receiver, source, delta } => {
                self.adjust_commander_damage(*receiver, *source, *delta);
            }
            BoardAction::ToggleRotation { player } => {
                self.toggle_rotation(*player);
            }
            BoardAction::OpenCommanderDamage { player } => {
                self.open_damage_dialog(*player);
            }
            BoardAction::OpenPoison { player } => {
                self.open_poison_dialog(*player);
            }
            BoardAction::CloseDialog => self.close_dialog(),
            BoardAction::Reset => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_default_board() {
        let board = GameState::default();

        assert_eq!(board.player_count(), PlayerCount::Four);
        assert_eq!(board.roster().len(), 4);
        assert_eq!(board.commander_damage().len(), 4);
        assert_eq!(board.active_dialog(), ActiveDialog::None);
        for player in board.player_ids() {
            let state = board.player(player).unwrap();
            assert_eq!(state.life, 40);
            assert_eq!(state.poison, 0);
            assert!(!board.is_rotated(player));
        }
    }

    #[test]
    fn test_set_player_count_resizes_everything() {
        let mut board = GameState::default();
        for count in PlayerCount::ALL {
            board.set_player_count(count);
            assert_eq!(board.roster().len(), count.get());
            assert_eq!(board.commander_damage().len(), count.get());
            assert_eq!(board.grid().placements.len(), count.get());
        }
    }

    #[test]
    fn test_try_set_player_count() {
        let mut board = GameState::default();
        assert!(board.try_set_player_count(6).is_ok());
        assert_eq!(board.player_count(), PlayerCount::Six);
        assert!(board.try_set_player_count(7).is_err());
        assert_eq!(board.player_count(), PlayerCount::Six);
    }

    #[test]
    fn test_commander_damage_mirrors_life() {
        let mut board = GameState::default();

        assert_eq!(board.adjust_commander_damage(p(0), p(1), 2), 2);
        assert_eq!(board.player(p(0)).unwrap().life, 38);

        assert_eq!(board.adjust_commander_damage(p(0), p(1), -5), -2);
        assert_eq!(board.commander_damage().get(p(0), p(1)), 0);
        assert_eq!(board.player(p(0)).unwrap().life, 40);

        // Removing damage that is not there changes nothing
        assert_eq!(board.adjust_commander_damage(p(0), p(1), -1), 0);
        assert_eq!(board.player(p(0)).unwrap().life, 40);
    }

    #[test]
    fn test_self_damage_is_noop() {
        let mut board = GameState::default();
        assert_eq!(board.adjust_commander_damage(p(2), p(2), 4), 0);
        assert_eq!(board.player(p(2)).unwrap().life, 40);
    }

    #[test]
    fn test_reset_keeps_names_count_and_rotation() {
        let mut board = GameState::default();
        board.set_player_count(PlayerCount::Three);
        board.set_name(p(0), "Alice");
        board.adjust_poison(p(1), 4);
        board.adjust_commander_damage(p(2), p(0), 9);
        board.toggle_rotation(p(1));

        board.reset();

        assert_eq!(board.player_count(), PlayerCount::Three);
        assert_eq!(board.player(p(0)).unwrap().name, "Alice");
        assert_eq!(board.player(p(1)).unwrap().poison, 0);
        assert_eq!(board.player(p(2)).unwrap().life, 40);
        assert_eq!(board.commander_damage().get(p(2), p(0)), 0);
        assert!(board.is_rotated(p(1)));
    }

    #[test]
    fn test_rotation_flags_follow_resize() {
        let mut board = GameState::default();
        board.toggle_rotation(p(1));
        board.toggle_rotation(p(3));

        board.set_player_count(PlayerCount::Two);
        assert!(board.is_rotated(p(1)));
        assert!(!board.is_rotated(p(3)));

        board.set_player_count(PlayerCount::Four);
        assert!(board.is_rotated(p(1)));
        assert!(!board.is_rotated(p(3)));
        assert_eq!(board.toggle_rotation(p(5)), None);
    }

    #[test]
    fn test_dialog_closed_when_player_leaves() {
        let mut board = GameState::default();
        board.set_player_count(PlayerCount::Five);

        assert!(board.open_damage_dialog(p(4)));
        board.set_player_count(PlayerCount::Three);
        assert_eq!(board.active_dialog(), ActiveDialog::None);

        board.set_player_count(PlayerCount::Five);
        assert_eq!(board.active_dialog(), ActiveDialog::None);
    }

    #[test]
    fn test_dialog_kept_when_player_stays() {
        let mut board = GameState::default();
        assert!(board.open_poison_dialog(p(1)));
        board.set_player_count(PlayerCount::Two);
        assert_eq!(board.active_dialog(), ActiveDialog::Poison(p(1)));
    }

    #[test]
    fn test_outcome() {
        let mut board = GameState::default();
        board.set_player_count(PlayerCount::Three);
        assert_eq!(board.outcome(), None);

        board.adjust_life(p(0), -40);
        board.adjust_poison(p(1), 10);
        assert_eq!(board.eliminated_players().as_slice(), &[p(0), p(1)]);
        assert_eq!(board.outcome(), Some(GameResult::Winner(p(2))));

        board.adjust_commander_damage(p(2), p(0), 21);
        assert_eq!(board.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = GameState::default();
        let snapshot = board.snapshot();

        board.adjust_commander_damage(p(0), p(1), 5);

        assert_eq!(snapshot.player(p(0)).unwrap().life, 40);
        assert_eq!(snapshot.commander_damage().get(p(0), p(1)), 0);
        assert_eq!(board.player(p(0)).unwrap().life, 35);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut board = GameState::default();
        let script = [
            BoardAction::SetPlayerCount { count: PlayerCount::Six },
            BoardAction::SetName { player: p(5), name: "Frank".into() },
            BoardAction::AdjustLife { player: p(5), delta: -10 },
            BoardAction::AdjustPoison { player: p(5), delta: 2 },
            BoardAction::AdjustCommanderDamage { receiver: p(5), source: p(0), delta: 6 },
            BoardAction::ToggleRotation { player: p(5) },
            BoardAction::OpenPoison { player: p(5) },
        ];
        for action in &script {
            board.apply(action);
        }

        let frank = board.player(p(5)).unwrap();
        assert_eq!(frank.name, "Frank");
        assert_eq!(frank.life, 24);
        assert_eq!(frank.poison, 2);
        assert!(board.is_rotated(p(5)));
        assert_eq!(board.active_dialog().poison_player(), Some(p(5)));

        board.apply(&BoardAction::CloseDialog);
        board.apply(&BoardAction::Reset);
        assert_eq!(board.active_dialog(), ActiveDialog::None);
        assert_eq!(board.player(p(5)).unwrap().life, 40);
    }

    #[test]
    fn test_custom_starting_life() {
        let config = CounterConfig::default()
            .with_starting_life(20)
            .with_player_count(PlayerCount::Two);
        let mut board = GameState::new(config);

        assert_eq!(board.player(p(1)).unwrap().life, 20);
        board.set_player_count(PlayerCount::Three);
        assert_eq!(board.player(p(2)).unwrap().life, 20);
    }
}
