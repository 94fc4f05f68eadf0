//! Compact board grid table.
//!
//! Each supported player count maps to one fixed grid. Players seated on
//! the near edge of the device get upright panels in the bottom row, players
//! on the far edge get inverted panels in the top row, and for odd counts one
//! player sits at the end of the table with a sideways panel spanning both
//! rows of the first column.
//!
//! Grid coordinates are 1-based, matching CSS grid lines.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerCount, PlayerId};

/// How a panel is turned to face its player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationClass {
    /// Facing the near edge (0°).
    #[serde(rename = "0")]
    Upright,
    /// Facing the far edge (180°).
    #[serde(rename = "180")]
    Inverted,
    /// Facing the short edge; content rotated 90° and transposed.
    #[serde(rename = "side")]
    Side,
}

impl RotationClass {
    /// Rotation applied to the panel content, in degrees.
    #[must_use]
    pub const fn degrees(self) -> i16 {
        match self {
            RotationClass::Upright => 0,
            RotationClass::Inverted => 180,
            RotationClass::Side => -90,
        }
    }
}

/// Where one player's panel sits in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub col_start: u8,
    pub row_start: u8,
    /// Rows covered when more than one.
    pub row_span: Option<u8>,
    pub rotation: RotationClass,
}

impl Placement {
    const fn upright(col_start: u8, row_start: u8) -> Self {
        Self {
            col_start,
            row_start,
            row_span: None,
            rotation: RotationClass::Upright,
        }
    }

    const fn inverted(col_start: u8, row_start: u8) -> Self {
        Self {
            col_start,
            row_start,
            row_span: None,
            rotation: RotationClass::Inverted,
        }
    }

    const fn side(col_start: u8) -> Self {
        Self {
            col_start,
            row_start: 1,
            row_span: Some(2),
            rotation: RotationClass::Side,
        }
    }

    /// Rows covered, at least 1.
    #[must_use]
    pub fn rows_covered(&self) -> u8 {
        self.row_span.unwrap_or(1)
    }

    /// Every (column, row) cell this panel occupies.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (self.row_start..self.row_start + self.rows_covered()).map(move |row| (self.col_start, row))
    }
}

/// Grid shape and placements for one player count.
///
/// `placements[i]` belongs to roster index `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    pub cols: u8,
    pub rows: u8,
    pub placements: &'static [Placement],
}

static TWO_PLAYERS: GridConfig = GridConfig {
    cols: 1,
    rows: 2,
    placements: &[Placement::upright(1, 2), Placement::inverted(1, 1)],
};

static THREE_PLAYERS: GridConfig = GridConfig {
    cols: 2,
    rows: 2,
    placements: &[
        Placement::upright(2, 2),
        Placement::inverted(2, 1),
        Placement::side(1),
    ],
};

static FOUR_PLAYERS: GridConfig = GridConfig {
    cols: 2,
    rows: 2,
    placements: &[
        Placement::upright(1, 2),
        Placement::upright(2, 2),
        Placement::inverted(1, 1),
        Placement::inverted(2, 1),
    ],
};

static FIVE_PLAYERS: GridConfig = GridConfig {
    cols: 3,
    rows: 2,
    placements: &[
        Placement::upright(2, 2),
        Placement::upright(3, 2),
        Placement::inverted(2, 1),
        Placement::inverted(3, 1),
        Placement::side(1),
    ],
};

static SIX_PLAYERS: GridConfig = GridConfig {
    cols: 3,
    rows: 2,
    placements: &[
        Placement::upright(1, 2),
        Placement::upright(2, 2),
        Placement::upright(3, 2),
        Placement::inverted(1, 1),
        Placement::inverted(2, 1),
        Placement::inverted(3, 1),
    ],
};

impl GridConfig {
    /// Look up the grid for a player count.
    ///
    /// ```
    /// use commander_counter::core::PlayerCount;
    /// use commander_counter::layout::{GridConfig, RotationClass};
    ///
    /// let grid = GridConfig::for_count(PlayerCount::Three);
    /// assert_eq!((grid.cols, grid.rows), (2, 2));
    /// assert_eq!(grid.placements[2].rotation, RotationClass::Side);
    /// ```
    #[must_use]
    pub fn for_count(count: PlayerCount) -> &'static GridConfig {
        match count {
            PlayerCount::Two => &TWO_PLAYERS,
            PlayerCount::Three => &THREE_PLAYERS,
            PlayerCount::Four => &FOUR_PLAYERS,
            PlayerCount::Five => &FIVE_PLAYERS,
            PlayerCount::Six => &SIX_PLAYERS,
        }
    }

    /// Placement for one player, if the player is seated in this grid.
    #[must_use]
    pub fn placement(&self, player: PlayerId) -> Option<Placement> {
        self.placements.get(player.index()).copied()
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Players whose panels are sideways.
    pub fn side_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(|(_, p)| p.rotation == RotationClass::Side)
            .map(|(i, _)| PlayerId(i as u8))
    }
}
