//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer combines the math building blocks into the two numeric
//! pipelines behind the widgets, plus example data generation:
//! - Dot-product attention over labelled keys
//! - The PCA pipeline (mean → centering → covariance → eigen → projection)
//! - Random example clouds and standard-normal samples
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dot-product attention.
pub mod attention;

/// Principal component analysis.
pub mod pca;

/// Example point clouds and normal samples.
pub mod sampling;
