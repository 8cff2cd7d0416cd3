//! Input validation for widget state and model configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions run at the widget boundary
//! and at builder `build()` time. It checks temperatures, logits, labels,
//! collection limits, point counts, plot bounds, variances and step numbers.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Temperature and variances must be positive and finite.
//! * **Finite Checks**: Scores and coordinates must be finite (no NaN/Inf).
//! * **Collection Limits**: Word lists are capped and never emptied.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not compute anything beyond the checks themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;

/// Number of steps in the PCA walkthrough.
pub const PCA_STEPS: usize = 4;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for widget input and model configuration.
///
/// Provides static methods that return `Result<(), VizError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Numeric Input Validation
    // ========================================================================

    /// Validate a softmax temperature.
    pub fn validate_temperature<T: Float>(temperature: T) -> Result<(), VizError> {
        if !temperature.is_finite() || temperature <= T::zero() {
            return Err(VizError::InvalidTemperature(
                temperature.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that every score is finite.
    pub fn validate_scores<T: Float>(scores: &[T]) -> Result<(), VizError> {
        for (i, &val) in scores.iter().enumerate() {
            if !val.is_finite() {
                return Err(VizError::InvalidNumericValue(format!(
                    "scores[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), VizError> {
        if !val.is_finite() {
            return Err(VizError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate a strictly positive, finite geometry value.
    pub fn validate_positive<T: Float>(val: T, name: &str) -> Result<(), VizError> {
        if !val.is_finite() || val <= T::zero() {
            return Err(VizError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate both coordinates of a point for finiteness.
    pub fn validate_point<T: Float>(p: Vector2<T>, name: &str) -> Result<(), VizError> {
        if !p.is_finite() {
            return Err(VizError::InvalidNumericValue(format!(
                "{}=({}, {})",
                name,
                p.x.to_f64().unwrap_or(f64::NAN),
                p.y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate a slider variance.
    pub fn validate_variance<T: Float>(variance: T) -> Result<(), VizError> {
        if !variance.is_finite() || variance <= T::zero() {
            return Err(VizError::InvalidVariance(
                variance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Collection Validation
    // ========================================================================

    /// Validate a label after trimming.
    pub fn validate_label(label: &str) -> Result<(), VizError> {
        if label.trim().is_empty() {
            return Err(VizError::EmptyLabel);
        }
        Ok(())
    }

    /// Validate that one more item fits under `max`.
    pub fn validate_capacity(len: usize, max: usize) -> Result<(), VizError> {
        if len >= max {
            return Err(VizError::TooManyItems { max });
        }
        Ok(())
    }

    /// Validate removing the item at `index` from a collection of `len`.
    ///
    /// # Notes
    ///
    /// * The "keep one" rule is checked before the index.
    pub fn validate_removal(index: usize, len: usize) -> Result<(), VizError> {
        if len <= 1 {
            return Err(VizError::LastItem);
        }
        if index >= len {
            return Err(VizError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Validate that an index selects one of `len` items.
    pub fn validate_index(index: usize, len: usize) -> Result<(), VizError> {
        if index >= len {
            return Err(VizError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    // ========================================================================
    // Point Cloud Validation
    // ========================================================================

    /// Validate that at least `min` points are available.
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), VizError> {
        if got < min {
            return Err(VizError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Validate that a point lies within `[min, max]` on both axes.
    pub fn validate_in_bounds<T: Float>(p: Vector2<T>, bounds: [T; 2]) -> Result<(), VizError> {
        let [min, max] = bounds;
        let inside = |v: T| v >= min && v <= max;
        if !inside(p.x) || !inside(p.y) {
            return Err(VizError::OutOfBounds {
                x: p.x.to_f64().unwrap_or(f64::NAN),
                y: p.y.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a PCA walkthrough step number (1-based).
    pub fn validate_step(step: usize) -> Result<(), VizError> {
        if step == 0 || step > PCA_STEPS {
            return Err(VizError::InvalidStep(step));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), VizError> {
        if let Some(param) = duplicate_param {
            return Err(VizError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
