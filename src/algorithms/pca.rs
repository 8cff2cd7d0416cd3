//! Two-dimensional principal component analysis.
//!
//! ## Purpose
//!
//! This module runs the full PCA pipeline on a point cloud: mean, centering,
//! covariance, eigendecomposition and projection of every centered point onto
//! the first principal component.
//!
//! ## Design notes
//!
//! * **Recompute from scratch**: Each call derives every quantity from the
//!   points; nothing is cached between calls.
//! * **Solver choice**: The eigen step is delegated to an `EigenSolver`, so the
//!   closed form and the nalgebra backend run on identical covariances.
//!
//! ## Key concepts
//!
//! * **Covariance sign**: The sign of `cov_xy` (with a ±0.1 dead zone) is what
//!   the walkthrough explains to the reader.
//!
//! ## Invariants
//!
//! * `centered.len() == projections.len() == points.len()`.
//! * Centered points sum to zero up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not enforce the minimum point count; callers validate it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

use num_traits::{Float, FloatConst};

use crate::math::covariance::{CovarianceMatrix, center, mean};
use crate::math::eigen::{ELLIPSE_SIGMA, EigenDecomposition, EigenSolver, Ellipse};
use crate::math::linalg::FloatLinalg;
use crate::math::projection::{Projection, project_all};
use crate::primitives::vector::Vector2;

/// Half-width of the band around zero treated as "no covariance".
pub const COVARIANCE_DEAD_ZONE: f64 = 0.1;

// ============================================================================
// Covariance Sign
// ============================================================================

/// Direction of the linear relationship between x and y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CovarianceSign {
    /// `cov_xy > 0.1`: x and y increase together.
    Positive,
    /// `cov_xy < -0.1`: y decreases as x increases.
    Negative,
    /// `|cov_xy| <= 0.1`.
    NearZero,
}

impl CovarianceSign {
    /// Classify a covariance value.
    pub fn of<T: Float>(cov_xy: T) -> Self {
        let cov = cov_xy.to_f64().unwrap_or(0.0);
        if cov > COVARIANCE_DEAD_ZONE {
            Self::Positive
        } else if cov < -COVARIANCE_DEAD_ZONE {
            Self::Negative
        } else {
            Self::NearZero
        }
    }
}

impl fmt::Display for CovarianceSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::NearZero => write!(f, "≈ 0"),
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Everything derived from one point cloud.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PcaResult<T> {
    /// Componentwise mean.
    pub mean: Vector2<T>,
    /// Points minus the mean, in input order.
    pub centered: Vec<Vector2<T>>,
    /// Sample covariance of `centered`.
    pub covariance: CovarianceMatrix<T>,
    /// Eigen-pairs of `covariance`.
    pub eigen: EigenDecomposition<T>,
    /// Projection of each centered point onto PC1.
    pub projections: Vec<Projection<T>>,
}

impl<T: Float + FloatConst> PcaResult<T> {
    /// Number of analysed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.centered.len()
    }

    /// True when no points were analysed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.centered.is_empty()
    }

    /// Percentage of variance along PC1 and PC2.
    #[inline]
    pub fn variance_explained(&self) -> [T; 2] {
        self.eigen.variance_explained()
    }

    /// Sign class of the covariance.
    #[inline]
    pub fn covariance_sign(&self) -> CovarianceSign {
        CovarianceSign::of(self.covariance.cov_xy)
    }

    /// Two-sigma ellipse centered on the origin of the centered cloud.
    pub fn confidence_ellipse(&self) -> Ellipse<T> {
        let k = T::from(ELLIPSE_SIGMA).unwrap_or_else(T::one);
        self.eigen.ellipse(Vector2::zero(), k)
    }

    /// Projections mapped back to the original (uncentered) coordinates.
    pub fn projected_points(&self) -> Vec<Vector2<T>> {
        self.projections.iter().map(|p| p.point + self.mean).collect()
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the PCA pipeline on `points`.
pub fn analyze<T: FloatLinalg + FloatConst>(
    points: &[Vector2<T>],
    solver: EigenSolver,
) -> PcaResult<T> {
    let mean = mean(points);
    let centered = center(points, mean);
    let covariance = CovarianceMatrix::from_centered(&centered);
    let eigen = solver.decompose(&covariance);
    let projections = project_all(&centered, eigen.pc1());

    tracing::debug!(
        points = points.len(),
        lambda1 = eigen.eigenvalues[0].to_f64().unwrap_or(f64::NAN),
        lambda2 = eigen.eigenvalues[1].to_f64().unwrap_or(f64::NAN),
        ?solver,
        "pca analyzed"
    );

    PcaResult {
        mean,
        centered,
        covariance,
        eigen,
        projections,
    }
}
