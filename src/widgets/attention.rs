//! Query/key attention widget.
//!
//! ## Purpose
//!
//! This module holds the state of the attention demo: three fixed labelled
//! keys and a query vector the user drags around the plane. Every snapshot
//! carries the dot product of the query with each key and the resulting
//! attention weights.
//!
//! ## Design notes
//!
//! * **Screen input**: Pointer methods take canvas pixel positions; the
//!   widget's `Viewport` converts them to logical coordinates.
//! * **Clamping**: The query is clamped per component to `[-1, 1]`.
//!
//! ## Invariants
//!
//! * `|query.x| <= max_coord` and `|query.y| <= max_coord`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::algorithms::attention::{AttentionScaling, AttentionWeights, Key, attend};
use crate::engine::formula::attention_calculation;
use crate::engine::output::AttentionSnapshot;
use crate::engine::validator::Validator;
use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;
use crate::primitives::viewport::Viewport;
use crate::render::Widget;
use crate::widgets::drag::{Cursor, DEFAULT_HIT_THRESHOLD, Drag};

/// Geometry and model settings of the attention widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttentionWidgetConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pixels per logical unit.
    pub scale: f64,
    /// Largest absolute query component.
    pub max_coord: f64,
    /// Endpoint hit radius in pixels.
    pub hit_threshold: f64,
    /// Dot-product scaling.
    pub scaling: AttentionScaling,
    /// Softmax temperature.
    pub temperature: f64,
}

impl Default for AttentionWidgetConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            scale: 150.0,
            max_coord: 1.0,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            scaling: AttentionScaling::None,
            temperature: 1.0,
        }
    }
}

/// State of the attention demo.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionWidget<T> {
    keys: Vec<Key<T>>,
    query: Vector2<T>,
    viewport: Viewport<T>,
    max_coord: T,
    hit_threshold: T,
    scaling: AttentionScaling,
    temperature: T,
    drag: Drag<T, ()>,
}

#[inline]
fn c<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

impl<T: Float> Default for AttentionWidget<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AttentionWidget<T> {
    /// Widget with the default keys and geometry.
    pub fn new() -> Self {
        Self::build(AttentionWidgetConfig::default())
    }

    /// Widget with the default keys and custom geometry.
    pub fn with_config(config: AttentionWidgetConfig) -> Result<Self, VizError> {
        Validator::validate_temperature(c::<T>(config.temperature))?;
        Validator::validate_positive(c::<T>(config.width), "width")?;
        Validator::validate_positive(c::<T>(config.height), "height")?;
        Validator::validate_positive(c::<T>(config.scale), "scale")?;
        Validator::validate_positive(c::<T>(config.max_coord), "max_coord")?;
        Ok(Self::build(config))
    }

    fn build(config: AttentionWidgetConfig) -> Self {
        Self {
            keys: vec![
                Key::new("水", Vector2::new(c(0.7), c(0.5))),
                Key::new("風", Vector2::new(c(0.5), c(0.71))),
                Key::new("有", Vector2::new(c(-0.6), c(0.7))),
            ],
            query: Vector2::new(c(0.62), c(0.62)),
            viewport: Viewport::centered(c(config.width), c(config.height), c(config.scale)),
            max_coord: c(config.max_coord),
            hit_threshold: c(config.hit_threshold),
            scaling: config.scaling,
            temperature: c(config.temperature),
            drag: Drag::default(),
        }
    }

    /// Current query vector.
    #[inline]
    pub fn query(&self) -> Vector2<T> {
        self.query
    }

    /// Fixed keys.
    #[inline]
    pub fn keys(&self) -> &[Key<T>] {
        &self.keys
    }

    /// Coordinate mapping of the canvas.
    #[inline]
    pub fn viewport(&self) -> &Viewport<T> {
        &self.viewport
    }

    /// Place the query directly, clamped into range.
    pub fn set_query(&mut self, query: Vector2<T>) -> Result<(), VizError> {
        Validator::validate_point(query, "query")?;
        self.query = query.clamp_components(self.max_coord);
        Ok(())
    }

    /// Pointer pressed at `screen`; returns true when a drag started.
    pub fn pointer_down(&mut self, screen: Vector2<T>) -> bool {
        let endpoint = self.viewport.to_screen(self.query);
        if self.viewport.hit_test(screen, self.query, self.hit_threshold) {
            self.drag.begin((), screen, endpoint);
            tracing::trace!("query drag started");
            true
        } else {
            false
        }
    }

    /// Pointer moved to `screen`; returns true when the query changed.
    pub fn pointer_move(&mut self, screen: Vector2<T>) -> bool {
        let Some(((), target)) = self.drag.target(screen) else {
            return false;
        };
        let logical = self.viewport.to_logical(target);
        if !logical.is_finite() {
            return false;
        }
        self.query = logical.clamp_components(self.max_coord);
        tracing::trace!(
            x = self.query.x.to_f64().unwrap_or(f64::NAN),
            y = self.query.y.to_f64().unwrap_or(f64::NAN),
            "query moved"
        );
        true
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Cursor for a pointer hovering at `screen`.
    pub fn hover(&self, screen: Vector2<T>) -> Cursor {
        if self.drag.is_active() || self.viewport.hit_test(screen, self.query, self.hit_threshold) {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// True while the query is being dragged.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Scores and weights of the current query.
    pub fn weights(&self) -> AttentionWeights<T> {
        attend(self.query, &self.keys, self.scaling, self.temperature)
    }
}

impl<T: Float> Widget for AttentionWidget<T> {
    type Snapshot = AttentionSnapshot<T>;

    fn snapshot(&self) -> AttentionSnapshot<T> {
        let AttentionWeights { scores, weights } = self.weights();
        let formula = attention_calculation(&self.keys, &scores, &weights);
        AttentionSnapshot {
            query: self.query,
            keys: self.keys.clone(),
            scores,
            weights,
            dragging: self.drag.is_active(),
            formula,
        }
    }
}
