//! Panel layout.
//!
//! - `GridConfig`: Fixed compact-board grid per player count, with each
//!   panel's rotation class
//! - `SidePanel`: Live transform for sideways panels, driven by host
//!   measurements
//! - `DesktopLayout`: Full-board arrangement hints
//!
//! Layout is derived from `PlayerCount` alone and never stored on the board.

pub mod desktop;
pub mod grid;
pub mod side;

pub use desktop::{DesktopCell, DesktopLayout};
pub use grid::{GridConfig, Placement, RotationClass};
pub use side::{SidePanel, SideTransform, Size};
