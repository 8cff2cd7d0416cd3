//! Random point clouds for the PCA examples.
//!
//! ## Purpose
//!
//! This module generates the example clouds offered by the PCA widget and the
//! standard-normal samples shaped by the covariance explorer. All randomness
//! comes from a caller-supplied `rand::Rng`, so seeded generators give
//! reproducible clouds.
//!
//! ## Key concepts
//!
//! * **Offset**: Every cloud is shifted away from the origin by
//!   `(u - 0.5)·s ± 0.8` per axis so that centering visibly moves it.
//! * **Line clouds**: Points spread uniformly along a random direction with
//!   uniform perpendicular noise.
//!
//! ## Invariants
//!
//! * Each shape always yields its fixed number of points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::f64::consts::TAU;

use num_traits::Float;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::primitives::vector::Vector2;

// ============================================================================
// Shapes
// ============================================================================

/// Example point-cloud shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PointCloudShape {
    /// Uniform square around an offset.
    Random,
    /// Line with slope angle in 15°..75°.
    Correlated,
    /// Line with slope angle in 105°..165°.
    NegativelyCorrelated,
    /// Annulus of radius 0.3..2.1.
    Circular,
}

impl PointCloudShape {
    /// Number of points generated for this shape.
    pub fn point_count(&self) -> usize {
        match self {
            Self::Random => 20,
            _ => 22,
        }
    }

    /// Either correlated shape with equal probability.
    pub fn random_correlated<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<f64>() < 0.5 {
            Self::Correlated
        } else {
            Self::NegativelyCorrelated
        }
    }

    /// Generate a cloud of this shape.
    pub fn generate<T: Float, R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vector2<T>> {
        let n = self.point_count();
        let points: Vec<(f64, f64)> = match self {
            Self::Random => {
                let (ox, oy) = (offset(rng, 2.0), offset(rng, 2.0));
                (0..n)
                    .map(|_| {
                        let x = (rng.random::<f64>() - 0.5) * 5.0 + ox;
                        let y = (rng.random::<f64>() - 0.5) * 5.0 + oy;
                        (x, y)
                    })
                    .collect()
            }
            Self::Correlated => line_cloud(rng, n, 15.0),
            Self::NegativelyCorrelated => line_cloud(rng, n, 105.0),
            Self::Circular => {
                let (ox, oy) = (offset(rng, 1.5), offset(rng, 1.5));
                (0..n)
                    .map(|_| {
                        let angle = rng.random::<f64>() * TAU;
                        let r = rng.random::<f64>() * 1.8 + 0.3;
                        (angle.cos() * r + ox, angle.sin() * r + oy)
                    })
                    .collect()
            }
        };

        points.into_iter().map(|(x, y)| to_vector(x, y)).collect()
    }
}

fn offset<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    let jitter = (rng.random::<f64>() - 0.5) * span;
    if rng.random::<f64>() > 0.5 {
        jitter + 0.8
    } else {
        jitter - 0.8
    }
}

/// Points along a line whose angle is uniform in `[min_deg, min_deg + 60)`.
fn line_cloud<R: Rng + ?Sized>(rng: &mut R, n: usize, min_deg: f64) -> Vec<(f64, f64)> {
    let angle = (rng.random::<f64>() * 60.0 + min_deg).to_radians();
    let (sin_a, cos_a) = angle.sin_cos();
    let spread = rng.random::<f64>() * 0.5 + 0.3;
    let (ox, oy) = (offset(rng, 1.5), offset(rng, 1.5));

    (0..n)
        .map(|_| {
            let t = (rng.random::<f64>() - 0.5) * 5.0;
            let noise = (rng.random::<f64>() - 0.5) * 2.0 * spread;
            (
                t * cos_a - noise * sin_a + ox,
                t * sin_a + noise * cos_a + oy,
            )
        })
        .collect()
}

fn to_vector<T: Float>(x: f64, y: f64) -> Vector2<T> {
    Vector2::new(
        T::from(x).unwrap_or_else(T::zero),
        T::from(y).unwrap_or_else(T::zero),
    )
}

// ============================================================================
// Standard Normal
// ============================================================================

/// `n` independent standard-normal pairs.
pub fn standard_normal_pairs<T: Float, R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Vector2<T>> {
    (0..n)
        .map(|_| {
            let z0: f64 = rng.sample(StandardNormal);
            let z1: f64 = rng.sample(StandardNormal);
            to_vector(z0, z1)
        })
        .collect()
}
