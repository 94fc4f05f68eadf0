//! Interactive session: board, mode and side panel measurements together.

use log::debug;
use rustc_hash::FxHashMap;

use super::mode::{BoardMode, DeviceSignals, ModeSelector, ModeTransition, OrientationLock};
use super::view::BoardView;
use crate::core::{BoardAction, CounterConfig, GameState, PlayerId};
use crate::layout::{RotationClass, SidePanel, SideTransform, Size};

/// One game at the table, from the host's point of view.
///
/// Wraps the board with the pieces that depend on the device: the current
/// mode (and its orientation lock), and the live measurements of sideways
/// panels. Board interaction is refused behind the portrait gate.
#[derive(Debug)]
pub struct Session<L: OrientationLock> {
    board: GameState,
    selector: ModeSelector<L>,
    side_panels: FxHashMap<PlayerId, SidePanel>,
}

impl<L: OrientationLock> Session<L> {
    /// Start a session with a fresh board.
    pub fn new(config: CounterConfig, signals: DeviceSignals, lock: L) -> Self {
        Self {
            board: GameState::new(config),
            selector: ModeSelector::new(signals, lock),
            side_panels: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &GameState {
        &self.board
    }

    #[must_use]
    pub fn mode(&self) -> BoardMode {
        self.selector.mode()
    }

    /// Apply a user interaction.
    ///
    /// Returns false if the board is gated, or if the action opens the
    /// poison editor anywhere but the compact board.
    pub fn apply(&mut self, action: &BoardAction) -> bool {
        let mode = self.mode();
        if !mode.accepts_input() {
            debug!("portrait gate: ignoring {action:?}");
            return false;
        }
        if matches!(action, BoardAction::OpenPoison { .. }) && mode != BoardMode::CompactBoard {
            debug!("no poison editor on {mode:?}: ignoring {action:?}");
            return false;
        }

        let target = action.player().filter(|_| action.changes_counters());
        let was_eliminated = target.map(|player| self.board.is_eliminated(player));
        self.board.apply(action);
        if let (Some(player), Some(before)) = (target, was_eliminated) {
            let after = self.board.is_eliminated(player);
            if before != after {
                debug!("{player} eliminated: {after}");
            }
        }

        if let BoardAction::SetPlayerCount { .. } = action {
            let grid = self.board.grid();
            self.side_panels.retain(|player, _| {
                grid.placement(*player)
                    .is_some_and(|p| p.rotation == RotationClass::Side)
            });
        }
        true
    }

    /// Feed new device signals.
    ///
    /// Leaving the compact board closes the poison editor, which only exists
    /// there.
    pub fn update_signals(&mut self, signals: DeviceSignals) -> Option<ModeTransition> {
        let transition = self.selector.update(signals)?;
        let poison_open = self.board.active_dialog().poison_player().is_some();
        if transition.to == BoardMode::FullBoard && poison_open {
            self.board.close_dialog();
        }
        Some(transition)
    }

    /// Record a measurement of a side panel's container.
    ///
    /// Returns the transform to apply, or `None` if the player's panel is
    /// not sideways in the current grid or has no width yet.
    pub fn observe_side_panel(
        &mut self,
        player: PlayerId,
        container: Size,
    ) -> Option<SideTransform> {
        let is_side = self
            .board
            .grid()
            .placement(player)
            .is_some_and(|p| p.rotation == RotationClass::Side);
        if !is_side {
            return None;
        }
        self.side_panels.entry(player).or_default().observe(container)
    }

    /// Latest transform for a side panel.
    #[must_use]
    pub fn side_transform(&self, player: PlayerId) -> Option<SideTransform> {
        self.side_panels.get(&player).and_then(SidePanel::transform)
    }

    /// Build the view for the current frame.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::build(&self.board, self.mode())
    }

    /// End the session, releasing the orientation lock.
    ///
    /// The board is handed back for inspection; it is never persisted.
    pub fn end(self) -> (GameState, L) {
        let lock = self.selector.shutdown();
        (self.board, lock)
    }
}
