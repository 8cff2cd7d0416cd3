//! Cosine similarity and the angle between two vectors.
//!
//! ## Purpose
//!
//! This module computes the quantities displayed by the cosine-similarity
//! widget: dot product, magnitudes, cosine, and the angle between the vectors,
//! plus the shortest arc used to mark that angle.
//!
//! ## Invariants
//!
//! * The cosine is clamped to `[-1, 1]` before `acos`, so rounding never
//!   produces a NaN angle.
//! * The arc sweep is the shortest signed rotation from `a` to `b`, in `(-π, π]`.

use num_traits::{Float, FloatConst};

use crate::primitives::errors::VizError;
use crate::primitives::vector::Vector2;

/// Result of comparing two vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CosineSimilarity<T> {
    /// `a · b`
    pub dot_product: T,
    /// `|a|`
    pub magnitude_a: T,
    /// `|b|`
    pub magnitude_b: T,
    /// `a · b / (|a| |b|)`
    pub cosine: T,
    /// Angle between the vectors in radians, in `[0, π]`.
    pub angle_rad: T,
    /// Angle between the vectors in degrees, in `[0, 180]`.
    pub angle_deg: T,
}

impl<T: Float> Default for CosineSimilarity<T> {
    fn default() -> Self {
        Self {
            dot_product: T::zero(),
            magnitude_a: T::zero(),
            magnitude_b: T::zero(),
            cosine: T::zero(),
            angle_rad: T::zero(),
            angle_deg: T::zero(),
        }
    }
}

/// Compare two vectors.
///
/// Returns `VizError::ZeroVector` when either operand has zero length.
pub fn cosine_similarity<T: Float + FloatConst>(
    a: Vector2<T>,
    b: Vector2<T>,
) -> Result<CosineSimilarity<T>, VizError> {
    let dot_product = a.dot(b);
    let magnitude_a = a.norm();
    let magnitude_b = b.norm();

    if magnitude_a == T::zero() || magnitude_b == T::zero() {
        return Err(VizError::ZeroVector);
    }

    let cosine = dot_product / (magnitude_a * magnitude_b);
    let angle_rad = cosine.max(-T::one()).min(T::one()).acos();

    Ok(CosineSimilarity {
        dot_product,
        magnitude_a,
        magnitude_b,
        cosine,
        angle_rad,
        angle_deg: angle_rad.to_degrees(),
    })
}

/// Arc marking the angle between two vectors, in logical radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AngleArc<T> {
    /// Smaller of the two bounding angles.
    pub start: T,
    /// Larger of the two bounding angles.
    pub end: T,
    /// Signed rotation from `a` to `b`, in `(-π, π]`.
    pub sweep: T,
}

impl<T: Float + FloatConst> AngleArc<T> {
    /// Shortest arc from the direction of `a` to the direction of `b`.
    pub fn between(a: Vector2<T>, b: Vector2<T>) -> Self {
        let angle_a = a.angle();
        let angle_b = b.angle();
        let tau = T::TAU();

        let diff = angle_b - angle_a;
        let wrapped = if diff > T::zero() { diff - tau } else { diff + tau };
        let sweep = if diff.abs() <= wrapped.abs() {
            diff
        } else {
            wrapped
        };
        // opposite vectors turn counter-clockwise
        let sweep = if sweep <= -T::PI() { sweep + tau } else { sweep };

        let (start, end) = if sweep >= T::zero() {
            (angle_a, angle_a + sweep)
        } else {
            (angle_a + sweep, angle_a)
        };

        Self { start, end, sweep }
    }

    /// Bisector of the arc, where the angle label goes.
    #[inline]
    pub fn mid(&self) -> T {
        (self.start + self.end) / (T::one() + T::one())
    }
}
