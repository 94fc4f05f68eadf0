//! Elimination evaluation.
//!
//! A player is out when any of three independent conditions holds:
//!
//! 1. Life at or below zero
//! 2. Poison counters at or above the poison threshold (default 10)
//! 3. Commander damage from one single opponent at or above the commander
//!    threshold (default 21). Damage from different opponents is never summed.
//!
//! Elimination is a query, never stored. Counters on an eliminated player
//! stay adjustable, so a player can come back (e.g. after a misclick is fixed).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CounterConfig, PlayerId, Roster};
use crate::damage::CommanderDamage;

/// Why a player is eliminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    /// Life total at or below zero.
    LifeDepleted,
    /// Poison counters reached the threshold.
    Poisoned,
    /// One opponent's commander dealt lethal damage.
    CommanderDamage {
        /// The opponent whose commander dealt the damage.
        source: PlayerId,
    },
}

/// Causes for one player; rarely more than one.
pub type EliminationCauses = SmallVec<[EliminationCause; 2]>;

/// Thresholds for the three elimination conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationRules {
    /// Poison at or above this eliminates.
    pub poison_lethal: u32,
    /// Single-source commander damage at or above this eliminates.
    pub commander_damage_lethal: u32,
}

impl Default for EliminationRules {
    fn default() -> Self {
        Self {
            poison_lethal: 10,
            commander_damage_lethal: 21,
        }
    }
}

impl From<&CounterConfig> for EliminationRules {
    fn from(config: &CounterConfig) -> Self {
        Self {
            poison_lethal: config.poison_lethal,
            commander_damage_lethal: config.commander_damage_lethal,
        }
    }
}

impl EliminationRules {
    /// Check whether a player is eliminated. Unknown players are not.
    #[must_use]
    pub fn is_eliminated(
        &self,
        roster: &Roster,
        damage: &CommanderDamage,
        player: PlayerId,
    ) -> bool {
        let Some(state) = roster.get(player) else {
            return false;
        };
        state.life <= 0
            || state.poison >= self.poison_lethal
            || damage
                .row(player)
                .any(|(_, dealt)| dealt >= self.commander_damage_lethal)
    }

    /// List every condition currently eliminating a player.
    ///
    /// Commander damage causes are listed in seat order of the source.
    #[must_use]
    pub fn causes(
        &self,
        roster: &Roster,
        damage: &CommanderDamage,
        player: PlayerId,
    ) -> EliminationCauses {
        let mut causes = EliminationCauses::new();
        let Some(state) = roster.get(player) else {
            return causes;
        };

        if state.life <= 0 {
            causes.push(EliminationCause::LifeDepleted);
        }
        if state.poison >= self.poison_lethal {
            causes.push(EliminationCause::Poisoned);
        }
        causes.extend(
            damage
                .row(player)
                .filter(|&(_, dealt)| dealt >= self.commander_damage_lethal)
                .map(|(source, _)| EliminationCause::CommanderDamage { source }),
        );
        causes
    }

    /// True if `damage` from one source is lethal on its own.
    #[must_use]
    pub fn is_lethal_commander_damage(&self, damage: u32) -> bool {
        damage >= self.commander_damage_lethal
    }

    /// True if a poison count is lethal.
    #[must_use]
    pub fn is_lethal_poison(&self, poison: u32) -> bool {
        poison >= self.poison_lethal
    }
}
