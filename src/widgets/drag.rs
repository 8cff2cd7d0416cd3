//! Pointer drag bookkeeping shared by the vector widgets.
//!
//! ## Purpose
//!
//! A drag starts when the pointer goes down within a few pixels of a vector
//! endpoint. The offset between the pointer and the endpoint is kept for the
//! whole drag so the endpoint does not jump under the cursor.
//!
//! ## Invariants
//!
//! * At most one handle is dragged at a time.

use num_traits::Float;

use crate::primitives::vector::Vector2;

/// Endpoint hit radius in canvas pixels.
pub const DEFAULT_HIT_THRESHOLD: f64 = 15.0;

/// Pointer cursor to show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Cursor {
    /// Not over a draggable endpoint.
    #[default]
    Default,
    /// Over a draggable endpoint, or dragging.
    Grab,
}

/// Active drag of handle `H`, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag<T, H> {
    active: Option<(H, Vector2<T>)>,
}

impl<T: Float, H: Copy> Default for Drag<T, H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Float, H: Copy> Drag<T, H> {
    /// Start dragging `handle`, grabbed at `pointer` while its endpoint is
    /// drawn at `endpoint` (both in canvas pixels).
    pub fn begin(&mut self, handle: H, pointer: Vector2<T>, endpoint: Vector2<T>) {
        self.active = Some((handle, pointer - endpoint));
    }

    /// Handle being dragged and where its endpoint should now be drawn.
    pub fn target(&self, pointer: Vector2<T>) -> Option<(H, Vector2<T>)> {
        self.active.map(|(h, offset)| (h, pointer - offset))
    }

    /// Stop dragging.
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Handle being dragged, if any.
    #[inline]
    pub fn handle(&self) -> Option<H> {
        self.active.map(|(h, _)| h)
    }

    /// True while a drag is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
