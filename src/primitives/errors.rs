//! Error types for widget input validation and numeric preconditions.
//!
//! ## Purpose
//!
//! This module defines the single error type surfaced by the crate. Errors are
//! limited to input-validation failures at the widget boundary (bad labels,
//! capacity limits, out-of-range steps) and to the few numeric preconditions
//! the core cannot recover from (non-positive temperature, zero vectors).
//!
//! ## Design notes
//!
//! * **no_std friendly**: `Display` is implemented by hand; `std::error::Error`
//!   is only implemented when the `std` feature is enabled.
//! * **Comparable**: Errors are `Clone + PartialEq` so tests can match them exactly.
//!
//! ## Key concepts
//!
//! * **Recoverable fallbacks are not errors**: covariance on fewer than two
//!   points and a negative eigenvalue radicand are handled in `math` and never
//!   produce a `VizError`.
//!
//! ## Non-goals
//!
//! * This module does not log or report errors to the user.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum VizError {
    /// An operation that needs at least one value was given none.
    EmptyInput,

    /// Softmax temperature was zero, negative or non-finite.
    InvalidTemperature(f64),

    /// A value was NaN or infinite.
    InvalidNumericValue(String),

    /// A label was empty after trimming.
    EmptyLabel,

    /// A label already exists (compared case-insensitively).
    DuplicateLabel(String),

    /// Adding an item would exceed the configured maximum.
    TooManyItems {
        /// Maximum number of items allowed.
        max: usize,
    },

    /// Removing the item would leave the collection empty.
    LastItem,

    /// An index does not address an existing item.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current number of items.
        len: usize,
    },

    /// Not enough points for the requested analysis.
    TooFewPoints {
        /// Number of points available.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A point lies outside the widget's logical bounds.
    OutOfBounds {
        /// Logical x coordinate.
        x: f64,
        /// Logical y coordinate.
        y: f64,
    },

    /// A vector with zero magnitude was used where a direction is required.
    ZeroVector,

    /// A variance slider value was zero, negative or non-finite.
    InvalidVariance(f64),

    /// A walkthrough step outside `1..=4` was requested.
    InvalidStep(usize),

    /// A reveal toggle or step was requested before analysis ran.
    NotAnalyzed,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::EmptyInput => write!(f, "Input is empty"),
            VizError::InvalidTemperature(t) => {
                write!(f, "Invalid temperature: {} (must be > 0 and finite)", t)
            }
            VizError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            VizError::EmptyLabel => write!(f, "Label must not be empty"),
            VizError::DuplicateLabel(label) => write!(f, "Label '{}' already exists", label),
            VizError::TooManyItems { max } => write!(f, "Maximum of {} items allowed", max),
            VizError::LastItem => write!(f, "At least one item must remain"),
            VizError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for {} items", index, len)
            }
            VizError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            VizError::OutOfBounds { x, y } => {
                write!(f, "Point ({}, {}) lies outside the plotting area", x, y)
            }
            VizError::ZeroVector => write!(f, "Vector has zero magnitude"),
            VizError::InvalidVariance(v) => {
                write!(f, "Invalid variance: {} (must be > 0 and finite)", v)
            }
            VizError::InvalidStep(step) => {
                write!(f, "Invalid step: {} (must be between 1 and 4)", step)
            }
            VizError::NotAnalyzed => write!(f, "Points have not been analyzed yet"),
            VizError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VizError {}
