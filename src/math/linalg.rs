//! Linear algebra backend abstraction.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to nalgebra's symmetric
//! eigensolver, which serves as an independent check on the closed-form
//! 2x2 decomposition.
//!
//! ## Design notes
//!
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Results are returned in nalgebra's order and sign; canonicalization
//!   happens in `math::eigen`.

// External dependencies
use num_traits::Float;

use crate::primitives::vector::Vector2;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the Nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Eigenvalues and unit eigenvectors of `[[a, b], [b, c]]`, unordered.
    fn symmetric_eigen_2x2(a: Self, c: Self, b: Self) -> ([Self; 2], [Vector2<Self>; 2]);
}

impl FloatLinalg for f64 {
    #[inline]
    fn symmetric_eigen_2x2(a: Self, c: Self, b: Self) -> ([Self; 2], [Vector2<Self>; 2]) {
        nalgebra_backend::symmetric_eigen_2x2_f64(a, c, b)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn symmetric_eigen_2x2(a: Self, c: Self, b: Self) -> ([Self; 2], [Vector2<Self>; 2]) {
        nalgebra_backend::symmetric_eigen_2x2_f32(a, c, b)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::Matrix2;

    /// Symmetric eigendecomposition using f64 precision.
    pub fn symmetric_eigen_2x2_f64(a: f64, c: f64, b: f64) -> ([f64; 2], [Vector2<f64>; 2]) {
        let eig = Matrix2::new(a, b, b, c).symmetric_eigen();
        let v = eig.eigenvectors;
        (
            [eig.eigenvalues[0], eig.eigenvalues[1]],
            [
                Vector2::new(v[(0, 0)], v[(1, 0)]),
                Vector2::new(v[(0, 1)], v[(1, 1)]),
            ],
        )
    }

    /// Symmetric eigendecomposition using f32 precision.
    pub fn symmetric_eigen_2x2_f32(a: f32, c: f32, b: f32) -> ([f32; 2], [Vector2<f32>; 2]) {
        let eig = Matrix2::new(a, b, b, c).symmetric_eigen();
        let v = eig.eigenvectors;
        (
            [eig.eigenvalues[0], eig.eigenvalues[1]],
            [
                Vector2::new(v[(0, 0)], v[(1, 0)]),
                Vector2::new(v[(0, 1)], v[(1, 1)]),
            ],
        )
    }
}
