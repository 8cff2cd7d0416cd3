//! Closed-form eigendecomposition of a symmetric 2x2 matrix.
//!
//! ## Purpose
//!
//! This module turns a `CovarianceMatrix` into its principal components:
//! two non-negative eigenvalues in descending order and a unit eigenvector
//! for each, plus the display quantities derived from them (variance
//! explained, standard deviations, rotation angle, spread class, confidence
//! ellipse).
//!
//! ## Design notes
//!
//! * **Closed form**: For `[[a, b], [b, c]]` the eigenvalues follow from the
//!   trace and determinant, so no iteration is needed.
//! * **One vector formula**: Both eigenvectors come from `(λ - c, b)` applied
//!   to their own eigenvalue and are normalized independently. The second
//!   vector is never derived by rotating the first.
//! * **Backends**: `EigenSolver::Nalgebra` runs the same covariance through
//!   `nalgebra::SymmetricEigen` and canonicalizes the result, for
//!   cross-checking.
//!
//! ## Key concepts
//!
//! * **Discriminant**: `trace²/4 - det` is non-negative in exact arithmetic
//!   for symmetric matrices; rounding can push it slightly below zero, in
//!   which case it is clamped.
//! * **Sign convention**: For `|b| > ε` the y component of every eigenvector
//!   has the sign of `b` (true of `(λ - c, b)` by construction). Axis-aligned
//!   vectors have a positive non-zero component.
//!
//! ## Invariants
//!
//! * `λ1 >= λ2 >= 0`.
//! * `λ1 + λ2 == trace` whenever neither eigenvalue was floored.
//! * Eigenvectors have unit length.
//!
//! ## Non-goals
//!
//! * Matrices larger than 2x2.

use core::fmt;

use num_traits::{Float, FloatConst};

use crate::math::covariance::CovarianceMatrix;
use crate::math::linalg::FloatLinalg;
use crate::primitives::vector::Vector2;

/// Below this magnitude the off-diagonal term is treated as zero.
pub const OFF_DIAGONAL_EPSILON: f64 = 1e-10;

/// Multiplier of `√λ` for the confidence ellipse semi-axes.
pub const ELLIPSE_SIGMA: f64 = 2.0;

// ============================================================================
// Solver Selection
// ============================================================================

/// Which eigen solver computes the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EigenSolver {
    /// Trace/determinant formula.
    #[default]
    ClosedForm,

    /// `nalgebra::SymmetricEigen`, reordered and re-signed to match
    /// `ClosedForm`.
    Nalgebra,
}

impl EigenSolver {
    /// Decompose `cov` with this solver.
    pub fn decompose<T: FloatLinalg + FloatConst>(
        &self,
        cov: &CovarianceMatrix<T>,
    ) -> EigenDecomposition<T> {
        match self {
            Self::ClosedForm => EigenDecomposition::from_covariance(cov),
            Self::Nalgebra => EigenDecomposition::from_covariance_nalgebra(cov),
        }
    }
}

// ============================================================================
// Spread Classification
// ============================================================================

/// Qualitative shape of a point cloud from its eigenvalue ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SpreadClass {
    /// Ratio above 3.
    Elongated,
    /// Ratio above 1.5.
    Moderate,
    /// Ratio of at most 1.5.
    Round,
}

impl SpreadClass {
    /// Classify a standard-deviation ratio `√(λ1/λ2)`.
    pub fn from_ratio<T: Float>(ratio: T) -> Self {
        let ratio = ratio.to_f64().unwrap_or(1.0);
        if ratio > 3.0 {
            Self::Elongated
        } else if ratio > 1.5 {
            Self::Moderate
        } else {
            Self::Round
        }
    }
}

impl fmt::Display for SpreadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elongated => write!(f, "Elongated"),
            Self::Moderate => write!(f, "Moderately spread"),
            Self::Round => write!(f, "Nearly circular"),
        }
    }
}

// ============================================================================
// Confidence Ellipse
// ============================================================================

/// Ellipse aligned with the principal components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ellipse<T> {
    /// Center in logical coordinates.
    pub center: Vector2<T>,
    /// Semi-axis along PC1.
    pub semi_major: T,
    /// Semi-axis along PC2.
    pub semi_minor: T,
    /// Rotation of the major axis in radians.
    pub rotation: T,
}

// ============================================================================
// Eigen Decomposition
// ============================================================================

/// Eigen-pairs of a symmetric 2x2 matrix, largest first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EigenDecomposition<T> {
    /// `[λ1, λ2]` with `λ1 >= λ2 >= 0`.
    pub eigenvalues: [T; 2],
    /// Unit eigenvectors `[v1, v2]` matching `eigenvalues`.
    pub eigenvectors: [Vector2<T>; 2],
    /// Trace of the source matrix.
    pub trace: T,
    /// Determinant of the source matrix.
    pub determinant: T,
}

impl<T: Float + FloatConst> EigenDecomposition<T> {
    /// Closed-form decomposition.
    ///
    /// # Formula
    ///
    /// ```text
    /// disc = √max(0, trace²/4 - det)
    /// λ1 = trace/2 + disc,   λ2 = trace/2 - disc
    /// v  = normalize(λ - c, b)        if |b| > ε
    /// ```
    pub fn from_covariance(cov: &CovarianceMatrix<T>) -> Self {
        let two = T::one() + T::one();
        let trace = cov.trace();
        let determinant = cov.determinant();

        let half = trace / two;
        let radicand = half * half - determinant;
        if radicand < T::zero() {
            tracing::debug!(
                radicand = radicand.to_f64().unwrap_or(f64::NAN),
                "negative discriminant clamped to zero"
            );
        }
        let disc = radicand.max(T::zero()).sqrt();

        let mut l1 = half + disc;
        let mut l2 = half - disc;
        if l1 < l2 {
            core::mem::swap(&mut l1, &mut l2);
        }

        let eps = T::from(OFF_DIAGONAL_EPSILON).unwrap_or_else(T::epsilon);
        let eigenvectors = if cov.cov_xy.abs() > eps {
            [Self::vector_for(l1, cov), Self::vector_for(l2, cov)]
        } else {
            Self::axis_aligned(cov)
        };

        Self {
            eigenvalues: [l1.max(T::zero()), l2.max(T::zero())],
            eigenvectors,
            trace,
            determinant,
        }
    }

    /// Unit eigenvector `normalize(λ - c, b)`.
    fn vector_for(lambda: T, cov: &CovarianceMatrix<T>) -> Vector2<T> {
        let raw = Vector2::new(lambda - cov.var_y, cov.cov_xy);
        // |b| > ε rules out a zero vector here
        raw.normalized().unwrap_or_else(Vector2::unit_x)
    }

    /// Coordinate axes with the larger-variance axis first; ties favour x.
    fn axis_aligned(cov: &CovarianceMatrix<T>) -> [Vector2<T>; 2] {
        if cov.var_x >= cov.var_y {
            [Vector2::unit_x(), Vector2::unit_y()]
        } else {
            [Vector2::unit_y(), Vector2::unit_x()]
        }
    }

    /// Percentage of total variance along each component; 50/50 when the
    /// total is zero.
    pub fn variance_explained(&self) -> [T; 2] {
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        let total = self.eigenvalues[0] + self.eigenvalues[1];
        if total > T::zero() {
            let pc1 = self.eigenvalues[0] / total * hundred;
            [pc1, hundred - pc1]
        } else {
            let half = hundred / (T::one() + T::one());
            [half, half]
        }
    }

    /// Standard deviation `√λ` along each component.
    #[inline]
    pub fn std_devs(&self) -> [T; 2] {
        [self.eigenvalues[0].sqrt(), self.eigenvalues[1].sqrt()]
    }

    /// Angle of PC1 in radians, `atan2(v1.y, v1.x)`.
    #[inline]
    pub fn rotation_angle(&self) -> T {
        self.eigenvectors[0].angle()
    }

    /// Angle of PC1 in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> T {
        self.rotation_angle().to_degrees()
    }

    /// `√(λ1/λ2)` when the determinant is positive, otherwise 1.
    pub fn eigenvalue_ratio(&self) -> T {
        if self.determinant > T::zero() && self.eigenvalues[1] > T::zero() {
            (self.eigenvalues[0] / self.eigenvalues[1]).sqrt()
        } else {
            T::one()
        }
    }

    /// Spread class of the ratio.
    #[inline]
    pub fn spread(&self) -> SpreadClass {
        SpreadClass::from_ratio(self.eigenvalue_ratio())
    }

    /// Ellipse with semi-axes `k·√λ` rotated onto PC1.
    pub fn ellipse(&self, center: Vector2<T>, k: T) -> Ellipse<T> {
        let [s1, s2] = self.std_devs();
        Ellipse {
            center,
            semi_major: k * s1,
            semi_minor: k * s2,
            rotation: self.rotation_angle(),
        }
    }

    /// Unit vector of the first principal component.
    #[inline]
    pub fn pc1(&self) -> Vector2<T> {
        self.eigenvectors[0]
    }

    /// Unit vector of the second principal component.
    #[inline]
    pub fn pc2(&self) -> Vector2<T> {
        self.eigenvectors[1]
    }
}

impl<T: FloatLinalg + FloatConst> EigenDecomposition<T> {
    /// Decomposition through the nalgebra backend, canonicalized to the
    /// closed-form ordering and sign convention.
    pub fn from_covariance_nalgebra(cov: &CovarianceMatrix<T>) -> Self {
        let (values, vectors) = T::symmetric_eigen_2x2(cov.var_x, cov.var_y, cov.cov_xy);

        let (mut pairs0, mut pairs1) = ((values[0], vectors[0]), (values[1], vectors[1]));
        if pairs0.0 < pairs1.0 {
            core::mem::swap(&mut pairs0, &mut pairs1);
        }

        let eps = T::from(OFF_DIAGONAL_EPSILON).unwrap_or_else(T::epsilon);
        let eigenvectors = if cov.cov_xy.abs() > eps {
            [
                Self::orient(pairs0.1, cov.cov_xy),
                Self::orient(pairs1.1, cov.cov_xy),
            ]
        } else {
            Self::axis_aligned(cov)
        };

        Self {
            eigenvalues: [pairs0.0.max(T::zero()), pairs1.0.max(T::zero())],
            eigenvectors,
            trace: cov.trace(),
            determinant: cov.determinant(),
        }
    }

    /// Flip `v` so its y component has the sign of `b`.
    fn orient(v: Vector2<T>, b: T) -> Vector2<T> {
        if (v.y < T::zero()) != (b < T::zero()) {
            -v
        } else {
            v
        }
    }
}
