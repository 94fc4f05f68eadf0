//! # commander-counter
//!
//! A shared-device score tracker for 2-6 player commander games.
//!
//! ## Design Principles
//!
//! 1. **Index Is Identity**: A player is its seat index. The same index keys
//!    the roster, the damage matrix, the rotation flags and the layout.
//!
//! 2. **Derived, Never Stored**: Elimination, outcome and layout are queries
//!    over the current state. Nothing can go stale after an edit.
//!
//! 3. **Atomic Transitions**: Changing the player count or commander damage
//!    touches several components in a single `&mut self` call.
//!
//! 4. **Clamp, Don't Fail**: Out-of-range players are ignored, poison and
//!    damage stop at zero, life is unbounded.
//!
//! ## Modules
//!
//! - `core`: Player IDs, roster, configuration, actions, board state, errors
//! - `damage`: Commander damage matrix
//! - `rules`: Elimination conditions and game outcome
//! - `layout`: Compact grid table, sideways panel transform, full board hints
//! - `surface`: Mode selection, dialogs, render views, sessions

pub mod core;
pub mod damage;
pub mod layout;
pub mod rules;
pub mod surface;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardAction, CounterConfig, CounterError, CounterResult, GameState, PlayerCount, PlayerId,
    PlayerState, Roster,
};

pub use crate::damage::CommanderDamage;

pub use crate::rules::{EliminationCause, EliminationRules, GameResult};

pub use crate::layout::{
    DesktopCell, DesktopLayout, GridConfig, Placement, RotationClass, SidePanel, SideTransform,
    Size,
};

pub use crate::surface::{
    ActiveDialog, BoardMode, BoardView, DeviceSignals, ModeSelector, OrientationLock, Session,
};
