//! Sideways panel transform.
//!
//! A side panel occupies a tall, narrow grid cell but its content is laid
//! out as a normal short, wide panel. The content box therefore swaps width
//! and height, is centered on the cell, and turned -90° about its center.
//!
//! The host owns measurement (a resize observer, a terminal size event,
//! whatever it has) and feeds every new size into [`SidePanel::observe`].
//! The transform must be recomputed on every measurement, not only when the
//! layout is first assigned.

use serde::{Deserialize, Serialize};

/// Measured size of a container, in host units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Placement of the rotated content box inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideTransform {
    /// Content box width (the container's height).
    pub width: f32,
    /// Content box height (the container's width).
    pub height: f32,
    /// Offset from the container center, as a percentage of the content box.
    pub translate_percent: (f32, f32),
    /// Rotation about the content center.
    pub rotate_degrees: f32,
}

impl SideTransform {
    /// Compute the transform for a measured container.
    ///
    /// Returns `None` until the container has a non-zero width; hosts should
    /// not render the content before then.
    #[must_use]
    pub fn for_container(container: Size) -> Option<Self> {
        if container.width <= 0.0 {
            return None;
        }
        Some(Self {
            width: container.height,
            height: container.width,
            translate_percent: (-50.0, -50.0),
            rotate_degrees: -90.0,
        })
    }
}

/// Tracks the latest measurement of one side panel's container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SidePanel {
    measured: Option<Size>,
}

impl SidePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new container measurement and return the updated transform.
    pub fn observe(&mut self, container: Size) -> Option<SideTransform> {
        self.measured = Some(container);
        SideTransform::for_container(container)
    }

    /// Transform for the latest measurement, if any.
    #[must_use]
    pub fn transform(&self) -> Option<SideTransform> {
        self.measured.and_then(SideTransform::for_container)
    }

    /// Latest measurement.
    #[must_use]
    pub fn measured(&self) -> Option<Size> {
        self.measured
    }
}
