//! Layer 6: Widgets
//!
//! # Purpose
//!
//! This layer holds the interactive state of each demo as an owned value
//! with transition methods:
//! - Softmax temperature demo
//! - Query/key attention with a draggable query
//! - Cosine similarity of two draggable unit vectors
//! - Step-by-step PCA walkthrough
//! - Covariance explorer
//!
//! Every widget implements `Widget` and produces an immutable snapshot on
//! request. Pointer input arrives in canvas pixels.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Widgets ← You are here
//!   ↓
//! Layer 5: Render
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Query/key attention widget.
pub mod attention;

/// Cosine-similarity widget.
pub mod cosine;

/// Shared drag bookkeeping.
pub mod drag;

/// Covariance explorer.
pub mod explorer;

/// PCA walkthrough widget.
pub mod pca;

/// Softmax temperature widget.
pub mod softmax;
