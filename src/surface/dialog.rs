//! Single-dialog selection.
//!
//! The commander damage editor and the poison editor each work on one
//! selected player. At most one of them is open. A dialog stays open until
//! it is dismissed; a request to open the other one meanwhile is refused.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which editor is open, and for whom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Commander damage received by the player.
    CommanderDamage(PlayerId),
    /// Poison counters of the player.
    Poison(PlayerId),
}

impl ActiveDialog {
    /// Player the open dialog is scoped to.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            ActiveDialog::None => None,
            ActiveDialog::CommanderDamage(p) | ActiveDialog::Poison(p) => Some(p),
        }
    }

    /// Player selected for the commander damage dialog.
    #[must_use]
    pub fn damage_player(self) -> Option<PlayerId> {
        match self {
            ActiveDialog::CommanderDamage(p) => Some(p),
            _ => None,
        }
    }

    /// Player selected for the poison dialog.
    #[must_use]
    pub fn poison_player(self) -> Option<PlayerId> {
        match self {
            ActiveDialog::Poison(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != ActiveDialog::None
    }

    /// Try to open `dialog` on a roster of `player_count` players.
    ///
    /// Returns true if `dialog` is now the open dialog. Selecting a player
    /// outside the roster deselects instead.
    pub fn open(&mut self, dialog: ActiveDialog, player_count: usize) -> bool {
        let Some(player) = dialog.player() else {
            self.close();
            return true;
        };
        if player.index() >= player_count {
            debug!("dialog selection {player} out of range, deselecting");
            *self = ActiveDialog::None;
            return false;
        }
        if self.is_open() && *self != dialog {
            debug!("refusing {dialog:?} while {:?} is open", *self);
            return false;
        }
        *self = dialog;
        true
    }

    /// Dismiss whichever dialog is open.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("closing {:?}", *self);
        }
        *self = ActiveDialog::None;
    }

    /// Force-close a dialog whose player is no longer on the roster.
    ///
    /// Returns true if a dialog was closed.
    pub fn retain_in_range(&mut self, player_count: usize) -> bool {
        match self.player() {
            Some(player) if player.index() >= player_count => {
                debug!("{player} left the table, closing {:?}", *self);
                *self = ActiveDialog::None;
                true
            }
            _ => false,
        }
    }
}
