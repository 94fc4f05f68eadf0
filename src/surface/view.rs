//! Render-ready views of the board.
//!
//! Hosts draw from these instead of reaching into `GameState`. Each view is
//! built fresh from the current state, so elimination and lethal flags are
//! never stale.

use serde::{Deserialize, Serialize};

use super::dialog::ActiveDialog;
use super::mode::BoardMode;
use crate::core::{GameState, PlayerId};
use crate::layout::{DesktopCell, Placement, RotationClass};

/// Commander damage received from one opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRow {
    pub source: PlayerId,
    pub source_name: String,
    pub damage: u32,
    /// This source alone is lethal.
    pub lethal: bool,
}

/// Rows for every opponent of `receiver`, in seat order.
#[must_use]
pub fn damage_rows(state: &GameState, receiver: PlayerId) -> Vec<DamageRow> {
    state
        .commander_damage()
        .row(receiver)
        .filter_map(|(source, damage)| {
            let opponent = state.player(source)?;
            Some(DamageRow {
                source,
                source_name: opponent.name.clone(),
                damage,
                lethal: state.rules().is_lethal_commander_damage(damage),
            })
        })
        .collect()
}

/// One player's panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    pub player: PlayerId,
    pub name: String,
    pub life: i64,
    pub poison: u32,
    pub eliminated: bool,
    /// Rotation to draw the panel with.
    pub rotation: RotationClass,
    /// Seat in the compact grid.
    pub placement: Option<Placement>,
    /// Cell hints on the full board.
    pub desktop_cell: Option<DesktopCell>,
    /// Inline commander damage list (full board only).
    pub damage_rows: Vec<DamageRow>,
}

/// Poison editor contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoisonView {
    pub player: PlayerId,
    pub name: String,
    pub poison: u32,
    pub lethal: bool,
}

/// The open editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogView {
    CommanderDamage {
        receiver: PlayerId,
        receiver_name: String,
        rows: Vec<DamageRow>,
    },
    Poison(PoisonView),
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub mode: BoardMode,
    /// Panels in seat order. Empty behind the portrait gate.
    pub panels: Vec<PanelView>,
    pub dialog: Option<DialogView>,
    /// One-tap life buttons (full board only).
    pub quick_adjustments: Vec<i64>,
}

impl BoardView {
    /// Build the view of `state` for `mode`.
    ///
    /// The poison editor only exists on the compact board; on the full
    /// board only the shared commander damage dialog is shown.
    #[must_use]
    pub fn build(state: &GameState, mode: BoardMode) -> Self {
        let (panels, quick_adjustments) = match mode {
            BoardMode::PortraitGate => {
                return Self {
                    mode,
                    panels: Vec::new(),
                    dialog: None,
                    quick_adjustments: Vec::new(),
                };
            }
            BoardMode::CompactBoard => (compact_panels(state), Vec::new()),
            BoardMode::FullBoard => (full_panels(state), state.config().quick_adjustments.clone()),
        };

        let dialog = match state.active_dialog() {
            ActiveDialog::CommanderDamage(receiver) => {
                state.player(receiver).map(|p| DialogView::CommanderDamage {
                    receiver,
                    receiver_name: p.name.clone(),
                    rows: damage_rows(state, receiver),
                })
            }
            ActiveDialog::Poison(player) if mode == BoardMode::CompactBoard => {
                state.player(player).map(|p| {
                    DialogView::Poison(PoisonView {
                        player,
                        name: p.name.clone(),
                        poison: p.poison,
                        lethal: state.rules().is_lethal_poison(p.poison),
                    })
                })
            }
            _ => None,
        };

        Self {
            mode,
            panels,
            dialog,
            quick_adjustments,
        }
    }

    /// Panel for one player.
    #[must_use]
    pub fn panel(&self, player: PlayerId) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.player == player)
    }
}

fn base_panel(state: &GameState, player: PlayerId, rotation: RotationClass) -> Option<PanelView> {
    let p = state.player(player)?;
    Some(PanelView {
        player,
        name: p.name.clone(),
        life: p.life,
        poison: p.poison,
        eliminated: state.is_eliminated(player),
        rotation,
        placement: None,
        desktop_cell: None,
        damage_rows: Vec::new(),
    })
}

fn compact_panels(state: &GameState) -> Vec<PanelView> {
    let grid = state.grid();
    state
        .player_ids()
        .zip(grid.placements)
        .filter_map(|(player, placement)| {
            let mut panel = base_panel(state, player, placement.rotation)?;
            panel.placement = Some(*placement);
            Some(panel)
        })
        .collect()
}

fn full_panels(state: &GameState) -> Vec<PanelView> {
    let layout = state.desktop_layout();
    state
        .player_ids()
        .filter_map(|player| {
            let rotation = if state.is_rotated(player) {
                RotationClass::Inverted
            } else {
                RotationClass::Upright
            };
            let mut panel = base_panel(state, player, rotation)?;
            panel.desktop_cell = layout.cell(player);
            panel.damage_rows = damage_rows(state, player);
            Some(panel)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerCount;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_portrait_gate_hides_board() {
        let mut board = GameState::default();
        board.open_damage_dialog(p(0));

        let view = BoardView::build(&board, BoardMode::PortraitGate);
        assert!(view.panels.is_empty());
        assert!(view.dialog.is_none());
    }

    #[test]
    fn test_compact_panels_follow_grid() {
        let mut board = GameState::default();
        board.set_player_count(PlayerCount::Five);
        board.toggle_rotation(p(0));

        let view = BoardView::build(&board, BoardMode::CompactBoard);
        assert_eq!(view.panels.len(), 5);
        // Manual rotation only applies on the full board
        assert_eq!(view.panels[0].rotation, RotationClass::Upright);
        assert_eq!(view.panels[4].rotation, RotationClass::Side);
        assert_eq!(view.panels[4].placement.unwrap().row_span, Some(2));
        assert!(view.panels.iter().all(|panel| panel.damage_rows.is_empty()));
        assert!(view.quick_adjustments.is_empty());
    }

    #[test]
    fn test_full_panels_use_manual_rotation() {
        let mut board = GameState::default();
        board.toggle_rotation(p(2));
        board.adjust_commander_damage(p(1), p(3), 21);

        let view = BoardView::build(&board, BoardMode::FullBoard);
        assert_eq!(view.panel(p(2)).unwrap().rotation, RotationClass::Inverted);
        assert_eq!(view.panel(p(0)).unwrap().rotation, RotationClass::Upright);
        assert_eq!(view.quick_adjustments, vec![-10, -5, 5, 10]);

        let victim = view.panel(p(1)).unwrap();
        assert!(victim.eliminated);
        assert_eq!(victim.life, 19);
        assert_eq!(victim.damage_rows.len(), 3);
        let lethal: Vec<_> = victim.damage_rows.iter().filter(|r| r.lethal).collect();
        assert_eq!(lethal.len(), 1);
        assert_eq!(lethal[0].source, p(3));
    }

    #[test]
    fn test_damage_dialog_rows() {
        let mut board = GameState::default();
        board.set_name(p(1), "Bea");
        board.adjust_commander_damage(p(0), p(1), 7);
        board.open_damage_dialog(p(0));

        let view = BoardView::build(&board, BoardMode::CompactBoard);
        let Some(DialogView::CommanderDamage { receiver, rows, .. }) = view.dialog else {
            panic!("expected commander damage dialog");
        };
        assert_eq!(receiver, p(0));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].source_name, "Bea");
        assert_eq!(rows[0].damage, 7);
        assert!(!rows[0].lethal);
    }

    #[test]
    fn test_poison_dialog_compact_only() {
        let mut board = GameState::default();
        board.adjust_poison(p(3), 10);
        board.open_poison_dialog(p(3));

        let compact = BoardView::build(&board, BoardMode::CompactBoard);
        assert_eq!(
            compact.dialog,
            Some(DialogView::Poison(PoisonView {
                player: p(3),
                name: "Player 4".into(),
                poison: 10,
                lethal: true,
            }))
        );

        let full = BoardView::build(&board, BoardMode::FullBoard);
        assert_eq!(full.dialog, None);
    }
}
