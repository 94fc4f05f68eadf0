//! Board behaviour tests.
//!
//! End-to-end checks of the public API: resizing, the damage/life coupling,
//! elimination, reset and dialog selection, for every supported table size.

use commander_counter::core::{BoardAction, CounterConfig, GameState, PlayerCount, PlayerId};
use commander_counter::rules::{EliminationCause, GameResult};
use commander_counter::surface::{
    ActiveDialog, BoardMode, DeviceSignals, DialogView, NoOrientationLock, Session,
};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Every count yields a roster and matrix of exactly that size; resizing
/// again to the same count changes nothing.
#[test]
fn test_resize_every_count() {
    let mut board = GameState::default();
    for count in PlayerCount::ALL {
        board.set_player_count(count);
        assert_eq!(board.roster().len(), count.get());
        assert_eq!(board.commander_damage().len(), count.get());
        for r in board.player_ids() {
            assert_eq!(board.commander_damage().row(r).count(), count.get() - 1);
        }

        board.adjust_life(p(0), -1);
        let before = board.snapshot();
        board.set_player_count(count);
        assert_eq!(board, before);
    }
}

/// Shrinking 5 -> 3 -> 5 keeps players 0-2 and re-defaults players 3-4.
#[test]
fn test_shrink_and_regrow() {
    let mut board = GameState::default();
    board.set_player_count(PlayerCount::Five);
    for player in board.player_ids().collect::<Vec<_>>() {
        board.adjust_life(player, -(player.index() as i64) - 1);
        board.adjust_poison(player, player.index() as i64 + 1);
        board.set_name(player, format!("Seat {}", player.index()));
    }
    board.adjust_commander_damage(p(1), p(2), 4);
    board.adjust_commander_damage(p(3), p(0), 6);

    board.set_player_count(PlayerCount::Three);
    board.set_player_count(PlayerCount::Five);

    for i in 0..3u8 {
        let state = board.player(p(i)).unwrap();
        assert_eq!(state.name, format!("Seat {i}"));
        assert_eq!(state.poison, u32::from(i) + 1);
    }
    assert_eq!(board.player(p(1)).unwrap().life, 40 - 2 - 4);
    assert_eq!(board.commander_damage().get(p(1), p(2)), 4);

    for i in 3..5u8 {
        let state = board.player(p(i)).unwrap();
        assert_eq!(state.name, format!("Player {}", i + 1));
        assert_eq!(state.life, 40);
        assert_eq!(state.poison, 0);
    }
    assert_eq!(board.commander_damage().get(p(3), p(0)), 0);
}

/// Removing 5 damage from a cell holding 2 clears it and restores exactly 2 life.
#[test]
fn test_damage_decrement_clamps() {
    let mut board = GameState::default();
    board.adjust_commander_damage(p(1), p(0), 2);
    assert_eq!(board.player(p(1)).unwrap().life, 38);

    let applied = board.adjust_commander_damage(p(1), p(0), -5);
    assert_eq!(applied, -2);
    assert_eq!(board.commander_damage().get(p(1), p(0)), 0);
    assert_eq!(board.player(p(1)).unwrap().life, 40);
}

/// Life lost equals the net applied damage over a mixed sequence.
#[test]
fn test_damage_sequence_accounting() {
    let mut board = GameState::default();
    let receiver = p(2);
    let steps = [(p(0), 5), (p(1), 3), (p(0), -7), (p(3), 10), (p(1), -1), (p(0), 2)];

    let total: i64 = steps
        .iter()
        .map(|&(source, delta)| board.adjust_commander_damage(receiver, source, delta))
        .sum();

    assert_eq!(total, 14);
    assert_eq!(40 - board.player(receiver).unwrap().life, total);
}

/// Two opponents at 10 each is not lethal; one opponent at 21 is.
#[test]
fn test_commander_damage_single_source_rule() {
    let mut board = GameState::default();
    board.adjust_life(p(0), 20); // keep life positive throughout
    board.adjust_commander_damage(p(0), p(1), 10);
    board.adjust_commander_damage(p(0), p(2), 10);
    assert_eq!(board.player(p(0)).unwrap().life, 40);
    assert!(!board.is_eliminated(p(0)));

    let mut board = GameState::default();
    board.adjust_commander_damage(p(0), p(1), 21);
    assert_eq!(board.player(p(0)).unwrap().life, 19);
    assert!(board.is_eliminated(p(0)));
    assert_eq!(
        board.elimination_causes(p(0)).as_slice(),
        &[EliminationCause::CommanderDamage { source: p(1) }]
    );
}

/// Eliminated players keep accepting adjustments.
#[test]
fn test_elimination_does_not_lock_counters() {
    let mut board = GameState::default();
    board.adjust_life(p(3), -40);
    assert!(board.is_eliminated(p(3)));

    assert_eq!(board.adjust_life(p(3), -3), Some(-3));
    assert_eq!(board.adjust_poison(p(3), 2), Some(2));
    assert_eq!(board.adjust_commander_damage(p(3), p(0), 1), 1);

    assert_eq!(board.adjust_life(p(3), 10), Some(6));
    assert!(!board.is_eliminated(p(3)));
}

/// Reset restores life and poison, zeroes damage, keeps names and count.
#[test]
fn test_reset() {
    let mut board = GameState::default();
    board.set_player_count(PlayerCount::Six);
    board.set_name(p(5), "Fay");
    for player in board.player_ids().collect::<Vec<_>>() {
        board.adjust_poison(player, 3);
        board.adjust_commander_damage(player, p(((player.index() + 1) % 6) as u8), 8);
    }

    board.apply(&BoardAction::Reset);

    assert_eq!(board.player_count(), PlayerCount::Six);
    assert_eq!(board.player(p(5)).unwrap().name, "Fay");
    for player in board.player_ids() {
        let state = board.player(player).unwrap();
        assert_eq!((state.life, state.poison), (40, 0));
        assert_eq!(board.commander_damage().total_received(player), 0);
    }
}

/// A dialog for a player removed by a resize does not survive.
#[test]
fn test_dialog_for_removed_player() {
    let mut board = GameState::default();
    board.set_player_count(PlayerCount::Six);

    board.open_damage_dialog(p(5));
    board.close_dialog();
    board.open_damage_dialog(p(5));
    board.set_player_count(PlayerCount::Four);
    assert_eq!(board.active_dialog(), ActiveDialog::None);
    assert_eq!(board.active_dialog().damage_player(), None);

    // Stale selection is a deselect, not an error
    assert!(!board.open_poison_dialog(p(5)));
    assert_eq!(board.active_dialog(), ActiveDialog::None);
}

/// A short game on a phone, from rotate prompt to a winner.
#[test]
fn test_phone_session() {
    let mut session = Session::new(
        CounterConfig::default(),
        DeviceSignals::new(true, false),
        NoOrientationLock,
    );
    assert_eq!(session.mode(), BoardMode::PortraitGate);
    assert!(session.view().panels.is_empty());

    session.update_signals(DeviceSignals::new(true, true));
    assert_eq!(session.mode(), BoardMode::CompactBoard);

    session.apply(&BoardAction::SetPlayerCount { count: PlayerCount::Three });
    session.apply(&BoardAction::OpenCommanderDamage { player: p(0) });
    for _ in 0..21 {
        session.apply(&BoardAction::AdjustCommanderDamage {
            receiver: p(0),
            source: p(2),
            delta: 1,
        });
    }

    let view = session.view();
    assert!(view.panel(p(0)).unwrap().eliminated);
    match &view.dialog {
        Some(DialogView::CommanderDamage { rows, .. }) => {
            let from_two = rows.iter().find(|r| r.source == p(2)).unwrap();
            assert_eq!(from_two.damage, 21);
            assert!(from_two.lethal);
        }
        other => panic!("unexpected dialog {other:?}"),
    }

    session.apply(&BoardAction::CloseDialog);
    session.apply(&BoardAction::OpenPoison { player: p(1) });
    for _ in 0..10 {
        session.apply(&BoardAction::AdjustPoison { player: p(1), delta: 1 });
    }

    assert_eq!(session.board().outcome(), Some(GameResult::Winner(p(2))));
}
