//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the numeric pipelines and the widgets:
//! - Input validation (`Validator`)
//! - Snapshot types produced for renderers
//! - Formula text for the companion panels
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
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// LaTeX formula text.
pub mod formula;

/// Widget snapshots.
pub mod output;

/// Input validation.
pub mod validator;
