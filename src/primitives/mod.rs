//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the basic data structures shared by every other layer:
//! - `Vector2` for points and directions
//! - `LabeledLogitSet` for the softmax word list
//! - `Viewport` for pointer-to-logical coordinate mapping
//! - `VizError` for validation failures
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Labelled logit collection.
pub mod logits;

/// Two-dimensional vectors.
pub mod vector;

/// Coordinate mapping between logical space and canvas pixels.
pub mod viewport;
