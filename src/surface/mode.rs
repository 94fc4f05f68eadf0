//! Board mode selection.
//!
//! The host reports two device signals; the selector derives one of three
//! modes from them:
//!
//! | mobile | landscape | mode           |
//! |--------|-----------|----------------|
//! | yes    | no        | `PortraitGate` |
//! | yes    | yes       | `CompactBoard` |
//! | no     | any       | `FullBoard`    |
//!
//! While the device is mobile the selector keeps a landscape orientation
//! lock requested through [`OrientationLock`]. Lock failures are logged and
//! otherwise ignored.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CounterConfig;

/// Device signals supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSignals {
    /// Small or touch-first device.
    pub is_mobile: bool,
    /// Viewport currently wider than tall.
    pub is_landscape: bool,
}

/// Viewport size in CSS pixels, for hosts without their own classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl DeviceSignals {
    #[must_use]
    pub const fn new(is_mobile: bool, is_landscape: bool) -> Self {
        Self {
            is_mobile,
            is_landscape,
        }
    }

    /// Classify a viewport using the configured breakpoints.
    ///
    /// A viewport is mobile when narrower than `mobile_breakpoint`, or when
    /// it is landscape and no taller than `landscape_max_height` (a phone
    /// turned sideways). `is_landscape` reports that short landscape case,
    /// so a large landscape monitor is never treated as a rotated phone.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, config: &CounterConfig) -> Self {
        let landscape = viewport.width > viewport.height;
        let landscape_mobile = landscape && viewport.height <= config.landscape_max_height;
        let portrait_mobile = viewport.width < config.mobile_breakpoint;
        Self {
            is_mobile: portrait_mobile || landscape_mobile,
            is_landscape: landscape_mobile,
        }
    }
}

/// What the board shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardMode {
    /// Mobile in portrait: board blocked behind a "rotate your device" prompt.
    PortraitGate,
    /// Mobile in landscape: seat grid with compact panels and dialogs.
    CompactBoard,
    /// Large screen: full panels with inline commander damage.
    FullBoard,
}

impl BoardMode {
    /// Mode for a set of device signals.
    #[must_use]
    pub const fn select(signals: DeviceSignals) -> Self {
        match (signals.is_mobile, signals.is_landscape) {
            (true, false) => BoardMode::PortraitGate,
            (true, true) => BoardMode::CompactBoard,
            (false, _) => BoardMode::FullBoard,
        }
    }

    /// True if the mode is one of the mobile modes.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, BoardMode::PortraitGate | BoardMode::CompactBoard)
    }

    /// True if players can interact with the board.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        !matches!(self, BoardMode::PortraitGate)
    }
}

/// Failure reported by a host orientation lock.
#[derive(Error, Debug)]
pub enum LockError {
    #[error("orientation lock not supported")]
    Unsupported,
    #[error("orientation lock rejected: {0}")]
    Rejected(String),
}

/// Host facility for pinning the screen orientation.
///
/// Implementations should return quickly; the selector never waits on the
/// lock and ignores every error.
pub trait OrientationLock {
    /// Request landscape orientation.
    fn lock_landscape(&mut self) -> Result<(), LockError>;

    /// Release a previous lock.
    fn unlock(&mut self) -> Result<(), LockError>;
}

/// Orientation lock for hosts that cannot lock.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOrientationLock;

impl OrientationLock for NoOrientationLock {
    fn lock_landscape(&mut self) -> Result<(), LockError> {
        Err(LockError::Unsupported)
    }

    fn unlock(&mut self) -> Result<(), LockError> {
        Err(LockError::Unsupported)
    }
}

/// A mode change reported by [`ModeSelector::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: BoardMode,
    pub to: BoardMode,
}

/// Tracks the board mode and the orientation lock across signal changes.
#[derive(Debug)]
pub struct ModeSelector<L: OrientationLock> {
    mode: BoardMode,
    lock: L,
}

impl<L: OrientationLock> ModeSelector<L> {
    /// Start in the mode for `signals`, locking orientation if mobile.
    pub fn new(signals: DeviceSignals, lock: L) -> Self {
        let mut selector = Self {
            mode: BoardMode::select(signals),
            lock,
        };
        if selector.mode.is_mobile() {
            selector.request_lock();
        }
        debug!("starting in {:?}", selector.mode);
        selector
    }

    #[must_use]
    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    #[must_use]
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Feed new device signals. Returns the transition if the mode changed.
    pub fn update(&mut self, signals: DeviceSignals) -> Option<ModeTransition> {
        let next = BoardMode::select(signals);
        if next == self.mode {
            return None;
        }

        let from = self.mode;
        match (from.is_mobile(), next.is_mobile()) {
            (false, true) => self.request_lock(),
            (true, false) => self.release_lock(),
            _ => {}
        }
        self.mode = next;
        debug!("board mode {from:?} -> {next:?}");
        Some(ModeTransition { from, to: next })
    }

    /// Leave the board, releasing the lock if one was requested.
    pub fn shutdown(mut self) -> L {
        if self.mode.is_mobile() {
            self.release_lock();
        }
        self.lock
    }

    fn request_lock(&mut self) {
        if let Err(err) = self.lock.lock_landscape() {
            debug!("ignoring orientation lock failure: {err}");
        }
    }

    fn release_lock(&mut self) {
        if let Err(err) = self.lock.unlock() {
            debug!("ignoring orientation unlock failure: {err}");
        }
    }
}
