//! Cosine-similarity widget.
//!
//! ## Purpose
//!
//! Two unit vectors A and B sit on a circle; the user drags either endpoint
//! around it. Every snapshot reports their dot product, magnitudes, cosine
//! and angle, plus the arc marking the angle.
//!
//! ## Design notes
//!
//! * **Unit circle**: Dragged positions are normalized back onto the circle.
//!   A pointer exactly at the center maps to `(0, 1)`.
//! * **Overlap**: When both endpoints are under the pointer, A is grabbed.
//!
//! ## Invariants
//!
//! * Both vectors are non-zero; dragged or set vectors have unit length.

use num_traits::{Float, FloatConst};

use crate::engine::formula::cosine_calculation;
use crate::engine::output::CosineSnapshot;
use crate::engine::validator::Validator;
use crate::math::similarity::{AngleArc, CosineSimilarity, cosine_similarity};
use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;
use crate::primitives::viewport::Viewport;
use crate::render::Widget;
use crate::widgets::drag::{Cursor, DEFAULT_HIT_THRESHOLD, Drag};

/// Draggable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Handle {
    /// Vector A.
    A,
    /// Vector B.
    B,
}

/// Geometry of the cosine widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineWidgetConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Endpoint hit radius in pixels.
    pub hit_threshold: f64,
}

impl Default for CosineWidgetConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            radius: 150.0,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
        }
    }
}

/// State of the cosine-similarity demo.
#[derive(Debug, Clone, PartialEq)]
pub struct CosineWidget<T> {
    a: Vector2<T>,
    b: Vector2<T>,
    viewport: Viewport<T>,
    hit_threshold: T,
    drag: Drag<T, Handle>,
}

#[inline]
fn c<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

impl<T: Float + FloatConst> Default for CosineWidget<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FloatConst> CosineWidget<T> {
    /// Widget with A at 45° and B at 90°.
    pub fn new() -> Self {
        Self::build(CosineWidgetConfig::default())
    }

    /// Widget with custom geometry.
    pub fn with_config(config: CosineWidgetConfig) -> Result<Self, VizError> {
        Validator::validate_positive(c::<T>(config.width), "width")?;
        Validator::validate_positive(c::<T>(config.height), "height")?;
        Validator::validate_positive(c::<T>(config.radius), "radius")?;
        Ok(Self::build(config))
    }

    fn build(config: CosineWidgetConfig) -> Self {
        Self {
            a: Vector2::new(c(0.71), c(0.71)),
            b: Vector2::unit_y(),
            viewport: Viewport::centered(c(config.width), c(config.height), c(config.radius)),
            hit_threshold: c(config.hit_threshold),
            drag: Drag::default(),
        }
    }

    /// Vector A.
    #[inline]
    pub fn a(&self) -> Vector2<T> {
        self.a
    }

    /// Vector B.
    #[inline]
    pub fn b(&self) -> Vector2<T> {
        self.b
    }

    /// Coordinate mapping of the canvas.
    #[inline]
    pub fn viewport(&self) -> &Viewport<T> {
        &self.viewport
    }

    /// Point `handle` in the direction of `v`.
    ///
    /// Returns `VizError::ZeroVector` for a zero direction.
    pub fn set(&mut self, handle: Handle, v: Vector2<T>) -> Result<(), VizError> {
        Validator::validate_point(v, "vector")?;
        let unit = v.normalized().ok_or(VizError::ZeroVector)?;
        self.place(handle, unit);
        Ok(())
    }

    fn place(&mut self, handle: Handle, unit: Vector2<T>) {
        match handle {
            Handle::A => self.a = unit,
            Handle::B => self.b = unit,
        }
    }

    fn endpoint_of(&self, handle: Handle) -> Vector2<T> {
        match handle {
            Handle::A => self.a,
            Handle::B => self.b,
        }
    }

    /// Handle whose endpoint is under `screen`, A first.
    pub fn handle_at(&self, screen: Vector2<T>) -> Option<Handle> {
        [Handle::A, Handle::B]
            .into_iter()
            .find(|&h| self.hits(h, screen))
    }

    fn hits(&self, handle: Handle, screen: Vector2<T>) -> bool {
        let endpoint = self.endpoint_of(handle);
        self.viewport.hit_test(screen, endpoint, self.hit_threshold)
    }

    /// Pointer pressed at `screen`; returns the grabbed handle.
    pub fn pointer_down(&mut self, screen: Vector2<T>) -> Option<Handle> {
        let handle = self.handle_at(screen)?;
        let endpoint = self.viewport.to_screen(self.endpoint_of(handle));
        self.drag.begin(handle, screen, endpoint);
        tracing::trace!(?handle, "vector drag started");
        Some(handle)
    }

    /// Pointer moved to `screen`; returns true when a vector changed.
    pub fn pointer_move(&mut self, screen: Vector2<T>) -> bool {
        let Some((handle, target)) = self.drag.target(screen) else {
            return false;
        };
        let logical = self.viewport.to_logical(target);
        if !logical.is_finite() {
            return false;
        }
        let unit = logical.normalized().unwrap_or_else(Vector2::unit_y);
        self.place(handle, unit);
        tracing::trace!(?handle, "vector moved");
        true
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Cursor for a pointer hovering at `screen`.
    pub fn hover(&self, screen: Vector2<T>) -> Cursor {
        if self.drag.is_active() || self.handle_at(screen).is_some() {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// Handle being dragged, if any.
    #[inline]
    pub fn dragging(&self) -> Option<Handle> {
        self.drag.handle()
    }

    /// Similarity of A and B.
    pub fn similarity(&self) -> Result<CosineSimilarity<T>, VizError> {
        cosine_similarity(self.a, self.b)
    }
}

impl<T: Float + FloatConst> Widget for CosineWidget<T> {
    type Snapshot = CosineSnapshot<T>;

    fn snapshot(&self) -> CosineSnapshot<T> {
        // both vectors are kept non-zero
        let similarity = self.similarity().unwrap_or_default();
        CosineSnapshot {
            a: self.a,
            b: self.b,
            similarity,
            arc: AngleArc::between(self.a, self.b),
            formula: cosine_calculation(self.a, self.b, &similarity),
        }
    }
}
