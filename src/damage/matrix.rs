//! Commander damage matrix.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{PlayerCount, PlayerId};

/// Square table of commander damage, indexed `[receiver][source]`.
///
/// ## Invariants
///
/// - Every cell is non-negative (`u32`)
/// - The diagonal is always 0; self-damage adjustments are ignored
/// - The table is always `len() x len()`
///
/// The matrix only tracks damage. Mirroring damage into life totals is done
/// by `GameState::adjust_commander_damage`, which uses the applied delta
/// returned from [`CommanderDamage::adjust`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommanderDamage {
    rows: Vector<Vector<u32>>,
}

impl CommanderDamage {
    /// Create a zeroed matrix.
    #[must_use]
    pub fn new(count: PlayerCount) -> Self {
        let n = count.get();
        let rows = (0..n).map(|_| Self::zero_row(n)).collect();
        Self { rows }
    }

    fn zero_row(len: usize) -> Vector<u32> {
        std::iter::repeat(0).take(len).collect()
    }

    /// Side length of the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Damage dealt to `receiver` by `source`. Out-of-range cells read as 0.
    #[must_use]
    pub fn get(&self, receiver: PlayerId, source: PlayerId) -> u32 {
        self.rows
            .get(receiver.index())
            .and_then(|row| row.get(source.index()))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over (source, damage) pairs for a receiver, skipping the diagonal.
    pub fn row(&self, receiver: PlayerId) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.rows
            .get(receiver.index())
            .into_iter()
            .flat_map(|row| row.iter().copied().enumerate())
            .filter(move |&(source, _)| source != receiver.index())
            .map(|(source, damage)| (PlayerId(source as u8), damage))
    }

    /// Sum of commander damage a receiver has taken from all sources.
    ///
    /// Display only: lethal commander damage is judged per source.
    #[must_use]
    pub fn total_received(&self, receiver: PlayerId) -> u64 {
        self.row(receiver).map(|(_, damage)| u64::from(damage)).sum()
    }

    /// The opponent who has dealt the most damage to `receiver`, if any.
    ///
    /// Ties resolve to the lowest seat.
    #[must_use]
    pub fn max_from_single_source(&self, receiver: PlayerId) -> Option<(PlayerId, u32)> {
        self.row(receiver)
            .filter(|&(_, damage)| damage > 0)
            .fold(None, |best, (source, damage)| match best {
                Some((_, top)) if top >= damage => best,
                _ => Some((source, damage)),
            })
    }

    /// Resize to `count x count`, keeping the overlapping top-left block.
    pub fn resize(&mut self, count: PlayerCount) {
        let n = count.get();
        self.rows.truncate(n.min(self.rows.len()));
        for row in self.rows.iter_mut() {
            row.truncate(n.min(row.len()));
            while row.len() < n {
                row.push_back(0);
            }
        }
        while self.rows.len() < n {
            self.rows.push_back(Self::zero_row(n));
        }
    }

    /// Adjust damage dealt to `receiver` by `source`, clamped at zero.
    ///
    /// Returns the delta actually applied, which differs from `delta` when
    /// a decrement would go below zero. Self-damage and out-of-range cells
    /// are a no-op returning 0.
    pub fn adjust(&mut self, receiver: PlayerId, source: PlayerId, delta: i64) -> i64 {
        if receiver == source {
            debug!("ignoring self commander damage for {receiver}");
            return 0;
        }
        let Some(cell) = self
            .rows
            .get_mut(receiver.index())
            .and_then(|row| row.get_mut(source.index()))
        else {
            debug!("ignoring commander damage {source} -> {receiver}: out of range");
            return 0;
        };

        let current = i64::from(*cell);
        let updated = u32::try_from(current.saturating_add(delta).max(0)).unwrap_or(u32::MAX);
        *cell = updated;

        let applied = i64::from(updated) - current;
        trace!(
            "commander damage {source} -> {receiver}: {delta:+} applied {applied:+} = {updated}"
        );
        applied
    }

    /// Zero every cell.
    pub fn reset(&mut self) {
        for row in self.rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = 0;
            }
        }
    }
}
