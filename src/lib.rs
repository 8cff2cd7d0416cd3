//! # attnviz: Interactive Attention, Softmax and PCA Models for Rust
//!
//! The numeric and state core behind a set of small interactive teaching
//! widgets: temperature-scaled softmax over next-word candidates, query/key
//! dot-product attention, cosine similarity of two vectors, a step-by-step
//! 2-D PCA walkthrough and a covariance explorer.
//!
//! Widgets turn user input (drag positions in canvas pixels, clicks, slider
//! values) into derived values and hand an immutable snapshot to a
//! [`Renderer`](prelude::Renderer). Nothing here draws; any canvas, terminal
//! or WASM front end can implement the renderer.
//!
//! ## Quick Start
//!
//! ### Softmax with temperature
//!
//! ```rust
//! use attnviz::prelude::*;
//!
//! let model = Softmax::new().temperature(0.5).build()?;
//! let probs = model.apply(&[0.2, 2.1, 1.2, 0.05, 0.6])?;
//!
//! assert_eq!(probs.len(), 5);
//! assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! assert!(probs[1] > 0.79);
//! # Result::<(), VizError>::Ok(())
//! ```
//!
//! ### Dot-product attention
//!
//! ```rust
//! use attnviz::prelude::*;
//!
//! let model = Attention::new().scaling(AttentionScaling::SqrtDim).build()?;
//! let keys = [
//!     Key::new("water", Vector2::new(0.7, 0.5)),
//!     Key::new("wind", Vector2::new(-0.6, 0.7)),
//! ];
//! let out = model.attend(Vector2::new(0.62, 0.62), &keys)?;
//!
//! assert_eq!(out.strongest(), Some(0));
//! # Result::<(), VizError>::Ok(())
//! ```
//!
//! ### Principal components of a point cloud
//!
//! ```rust
//! use attnviz::prelude::*;
//!
//! let points = [
//!     Vector2::new(1.0_f64, 1.0),
//!     Vector2::new(2.0, 2.0),
//!     Vector2::new(3.0, 3.0),
//! ];
//! let result = Pca::new().solver(EigenSolver::ClosedForm).build()?.fit(&points)?;
//!
//! assert!((result.eigen.eigenvalues[0] - 2.0).abs() < 1e-12);
//! assert!(result.eigen.eigenvalues[1].abs() < 1e-12);
//! # Result::<(), VizError>::Ok(())
//! ```
//!
//! ## Widgets
//!
//! Every widget owns its state, changes it only through transition methods,
//! and implements [`Widget`](prelude::Widget). A `Vec` of snapshots is itself
//! a renderer, which is handy for recording a session:
//!
//! ```rust
//! use attnviz::prelude::*;
//!
//! let mut pca = PcaWidget::<f64>::new();
//! for (x, y) in [(-1.0, -1.2), (0.0, 0.1), (1.0, 0.9), (2.0, 2.2)] {
//!     pca.add_point(Vector2::new(x, y))?;
//! }
//! pca.analyze()?;
//! pca.show_step(3)?;
//! pca.toggle(RevealToggle::Pc1)?;
//!
//! let mut frames: Vec<PcaSnapshot<f64>> = Vec::new();
//! pca.redraw(&mut frames).unwrap();
//!
//! assert_eq!(frames[0].stage, PcaStage::Analyzed);
//! assert!(frames[0].reveal.pc1);
//! # Result::<(), VizError>::Ok(())
//! ```
//!
//! | Widget               | Input                       | Snapshot            |
//! |----------------------|-----------------------------|---------------------|
//! | `SoftmaxWidget`      | example, temperature, words | `SoftmaxSnapshot`   |
//! | `AttentionWidget`    | query drag                  | `AttentionSnapshot` |
//! | `CosineWidget`       | A/B drag                    | `CosineSnapshot`    |
//! | `PcaWidget`          | clicks, steps, toggles      | `PcaSnapshot`       |
//! | `CovarianceExplorer` | three sliders               | `ExplorerSnapshot`  |
//!
//! ## Error Handling
//!
//! All fallible operations return [`VizError`](prelude::VizError). Widget
//! state is left untouched when an operation fails.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (recomputes at `debug`, drags at `trace`,
//! numeric fallbacks at `warn`) and never installs a subscriber.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to build without `std`; `alloc` is required.
//!
//! ```toml
//! [dependencies]
//! attnviz = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains `Vector2`, the labelled logit set, the canvas `Viewport`
// and the `VizError` type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains stable softmax, cosine similarity, covariance, the closed-form
// 2x2 eigendecomposition and projection.
mod math;

// Layer 3: Algorithms - the numeric pipelines.
//
// Contains dot-product attention, the PCA pipeline and example point
// cloud generation.
mod algorithms;

// Layer 4: Engine - validation and output.
//
// Contains the `Validator`, snapshot types and formula text.
mod engine;

// Layer 5: Render - the rendering seam.
//
// Contains the `Renderer` and `Widget` traits.
mod render;

// Layer 6: Widgets - interactive state.
//
// Contains one owned state object per demo, with transition methods.
mod widgets;

// High-level fluent API.
//
// Provides the `Softmax`, `Attention` and `Pca` builders and re-exports
// the widget types.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard attnviz prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use attnviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AngleArc, Attention, AttentionBuilder, AttentionModel, AttentionScaling,
        AttentionSnapshot, AttentionWeights, AttentionWidget, AttentionWidgetConfig,
        CosineSimilarity, CosineSnapshot, CosineWidget, CosineWidgetConfig, CovarianceExplorer,
        CovarianceMatrix, CovarianceSign, Cursor, EigenDecomposition, EigenSolver, Ellipse,
        ExplorerConfig, ExplorerShape, ExplorerSnapshot, Handle, Key, Pca, PcaBuilder, PcaModel,
        PcaResult, PcaSnapshot, PcaStage, PcaWidget, PcaWidgetConfig, PointCloudShape, Renderer,
        RevealState, RevealToggle, Softmax, SoftmaxBuilder, SoftmaxModel, SoftmaxSnapshot,
        SoftmaxWidget, SoftmaxWidgetConfig, SpreadClass, Vector2, VizError, Widget,
        cosine_similarity,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal pipelines.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and output.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal rendering seam.
    pub mod render {
        pub use crate::render::*;
    }
    /// Internal widgets.
    pub mod widgets {
        pub use crate::widgets::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
