//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the widgets:
//! - Stable softmax with temperature
//! - Cosine similarity and angle arcs
//! - Mean, centering and sample covariance
//! - Closed-form 2x2 eigendecomposition (with a nalgebra cross-check)
//! - Projection onto a principal axis
//!
//! These are reusable mathematical building blocks with no widget-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Widgets
//!   ↓
//! Layer 5: Render
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean, centering, covariance and Cholesky factor.
pub mod covariance;

/// Closed-form symmetric 2x2 eigendecomposition.
pub mod eigen;

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Projection onto an axis.
pub mod projection;

/// Cosine similarity.
pub mod similarity;

/// Numerically stable softmax.
pub mod softmax;
