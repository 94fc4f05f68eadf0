//! Interaction surface.
//!
//! - `ModeSelector`: Portrait gate, compact board or full board from
//!   injected device signals, with best-effort orientation locking
//! - `ActiveDialog`: The single open editor (commander damage or poison)
//! - `BoardView`: Render-ready panels and dialog contents
//! - `Session`: Board, mode and side panel measurements for one game

pub mod dialog;
pub mod mode;
pub mod session;
pub mod view;

pub use dialog::ActiveDialog;
pub use mode::{
    BoardMode, DeviceSignals, LockError, ModeSelector, ModeTransition, NoOrientationLock,
    OrientationLock, Viewport,
};
pub use session::Session;
pub use view::{damage_rows, BoardView, DamageRow, DialogView, PanelView, PoisonView};
