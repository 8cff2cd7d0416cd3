//! Mean, centering and 2x2 sample covariance.
//!
//! ## Purpose
//!
//! This module computes the first half of the PCA pipeline: the componentwise
//! mean of a point cloud, the mean-centered cloud, and the unbiased sample
//! covariance matrix of the centered cloud. It also provides the Cholesky
//! factor used to shape standard-normal samples into a given covariance.
//!
//! ## Design notes
//!
//! * **Unbiased**: The covariance divides by `n - 1`.
//! * **Fallback**: Fewer than two points have no defined spread; the matrix
//!   falls back to the identity instead of failing.
//!
//! ## Invariants
//!
//! * Centered points sum to `(0, 0)` up to rounding.
//! * A covariance computed from data is positive semi-definite:
//!   `var_x >= 0`, `var_y >= 0`, `var_x * var_y >= cov_xy²`.
//!
//! ## Non-goals
//!
//! * Weighted or population (n-denominator) covariance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::primitives::vector::Vector2;

// ============================================================================
// Mean and Centering
// ============================================================================

/// Componentwise arithmetic mean; `(0, 0)` for an empty slice.
pub fn mean<T: Float>(points: &[Vector2<T>]) -> Vector2<T> {
    if points.is_empty() {
        return Vector2::zero();
    }
    let sum = points
        .iter()
        .fold(Vector2::zero(), |acc: Vector2<T>, &p| acc + p);
    let n = T::from(points.len()).unwrap_or_else(T::one);
    Vector2::new(sum.x / n, sum.y / n)
}

/// Subtract `center` from every point.
pub fn center<T: Float>(points: &[Vector2<T>], center: Vector2<T>) -> Vec<Vector2<T>> {
    points.iter().map(|&p| p - center).collect()
}

// ============================================================================
// Covariance Matrix
// ============================================================================

/// Symmetric 2x2 covariance matrix `[[var_x, cov_xy], [cov_xy, var_y]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CovarianceMatrix<T> {
    /// Variance along x.
    pub var_x: T,
    /// Variance along y.
    pub var_y: T,
    /// Covariance between x and y.
    pub cov_xy: T,
}

impl<T: Float> Default for CovarianceMatrix<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> CovarianceMatrix<T> {
    /// Build a matrix from its three distinct entries.
    #[inline]
    pub fn new(var_x: T, var_y: T, cov_xy: T) -> Self {
        Self {
            var_x,
            var_y,
            cov_xy,
        }
    }

    /// The identity matrix, used when no spread is defined.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::one(), T::zero())
    }

    /// Unbiased sample covariance of already-centered points.
    ///
    /// # Formula
    ///
    /// ```text
    /// var_x  = Σ x²  / (n - 1)
    /// var_y  = Σ y²  / (n - 1)
    /// cov_xy = Σ xy / (n - 1)
    /// ```
    ///
    /// Falls back to the identity for `n < 2`.
    pub fn from_centered(centered: &[Vector2<T>]) -> Self {
        let n = centered.len();
        if n < 2 {
            tracing::warn!(points = n, "covariance undefined, using identity");
            return Self::identity();
        }

        let (sxx, syy, sxy) = centered
            .iter()
            .fold((T::zero(), T::zero(), T::zero()), |(sxx, syy, sxy), p| {
                (sxx + p.x * p.x, syy + p.y * p.y, sxy + p.x * p.y)
            });

        let factor = T::one() / T::from(n - 1).unwrap_or_else(T::one);
        Self::new(sxx * factor, syy * factor, sxy * factor)
    }

    /// Sum of the diagonal (total variance).
    #[inline]
    pub fn trace(&self) -> T {
        self.var_x + self.var_y
    }

    /// Determinant `var_x * var_y - cov_xy²`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.var_x * self.var_y - self.cov_xy * self.cov_xy
    }

    /// Largest admissible `|cov_xy|` for the current variances, `√(var_x var_y)`.
    #[inline]
    pub fn max_covariance(&self) -> T {
        (self.var_x * self.var_y).max(T::zero()).sqrt()
    }

    /// Pearson correlation, or `None` when either variance is zero.
    pub fn correlation(&self) -> Option<T> {
        let denom = (self.var_x * self.var_y).sqrt();
        if denom > T::zero() && denom.is_finite() {
            Some(self.cov_xy / denom)
        } else {
            None
        }
    }

    /// Copy with `cov_xy` clamped into `[-max_covariance, max_covariance]`.
    pub fn clamped(&self) -> Self {
        let max = self.max_covariance();
        Self::new(self.var_x, self.var_y, self.cov_xy.max(-max).min(max))
    }

    /// True when the PSD conditions hold within `tol`.
    pub fn is_positive_semidefinite(&self, tol: T) -> bool {
        self.var_x >= -tol && self.var_y >= -tol && self.determinant() >= -tol
    }

    /// Lower-triangular Cholesky factor, or `None` when `var_x` is not positive.
    ///
    /// A negative Schur complement from rounding is clamped to zero.
    pub fn cholesky(&self) -> Option<Cholesky<T>> {
        if self.var_x <= T::zero() {
            return None;
        }
        let l00 = self.var_x.sqrt();
        let l10 = self.cov_xy / l00;
        let l11_sq = self.var_y - self.cov_xy * self.cov_xy / self.var_x;
        Some(Cholesky {
            l00,
            l10,
            l11: l11_sq.max(T::zero()).sqrt(),
        })
    }
}

/// Lower-triangular factor `L` with `L Lᵀ = Σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cholesky<T> {
    /// `L[0][0]`
    pub l00: T,
    /// `L[1][0]`
    pub l10: T,
    /// `L[1][1]`
    pub l11: T,
}

impl<T: Float> Cholesky<T> {
    /// Map a standard-normal pair `z` to `L z`.
    #[inline]
    pub fn transform(&self, z: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.l00 * z.x, self.l10 * z.x + self.l11 * z.y)
    }
}
