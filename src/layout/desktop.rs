//! Full board arrangement.
//!
//! On a large screen panels are not rotated by seat. Players sit in a
//! regular grid; only 3 and 5 players need explicit hints so the odd panel
//! does not leave a hole.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{PlayerCount, PlayerId};

/// Layout hints for one panel on the full board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopCell {
    /// Explicit column line, or auto-flow.
    pub col_start: Option<u8>,
    /// Explicit row line, or auto-flow.
    pub row_start: Option<u8>,
    pub col_span: u8,
    pub row_span: u8,
    /// Center the panel within its span.
    pub centered: bool,
    /// Cap on the panel width, in host units.
    pub max_width: Option<u32>,
}

impl DesktopCell {
    const AUTO: Self = Self {
        col_start: None,
        row_start: None,
        col_span: 1,
        row_span: 1,
        centered: false,
        max_width: None,
    };

    const fn at(col: u8, row: u8) -> Self {
        Self {
            col_start: Some(col),
            row_start: Some(row),
            ..Self::AUTO
        }
    }
}

/// Columns and per-player cells for the full board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopLayout {
    /// Relative column widths; the length is the column count.
    pub column_weights: SmallVec<[f32; 3]>,
    /// `cells[i]` belongs to roster index `i`.
    pub cells: SmallVec<[DesktopCell; 6]>,
}

impl DesktopLayout {
    /// Build the arrangement for a player count.
    #[must_use]
    pub fn for_count(count: PlayerCount) -> Self {
        let mut cells: SmallVec<[DesktopCell; 6]> = smallvec![DesktopCell::AUTO; count.get()];
        let column_weights = match count {
            PlayerCount::Two | PlayerCount::Four => smallvec![1.0, 1.0],
            PlayerCount::Three => {
                cells[2] = DesktopCell {
                    col_span: 2,
                    centered: true,
                    max_width: Some(520),
                    ..DesktopCell::AUTO
                };
                smallvec![1.0, 1.0]
            }
            PlayerCount::Five => {
                cells[0] = DesktopCell::at(1, 1);
                cells[1] = DesktopCell::at(2, 1);
                cells[2] = DesktopCell::at(1, 2);
                cells[3] = DesktopCell::at(2, 2);
                cells[4] = DesktopCell {
                    row_span: 2,
                    ..DesktopCell::at(3, 1)
                };
                smallvec![1.0, 1.0, 0.85]
            }
            PlayerCount::Six => smallvec![1.0, 1.0, 1.0],
        };
        Self {
            column_weights,
            cells,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.column_weights.len()
    }

    /// Cell for one player.
    #[must_use]
    pub fn cell(&self, player: PlayerId) -> Option<DesktopCell> {
        self.cells.get(player.index()).copied()
    }
}
