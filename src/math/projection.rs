//! Orthogonal projection onto a principal axis.
//!
//! ## Purpose
//!
//! Projects centered points onto a unit direction (normally PC1), giving the
//! scalar coordinate along the axis and the projected point.
//!
//! ## Invariants
//!
//! * For a unit `axis`, projecting a point that already lies on the axis
//!   returns that point.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::primitives::vector::Vector2;

/// A point's coordinate along an axis and its foot on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Projection<T> {
    /// `p · axis`
    pub scalar: T,
    /// `(p · axis) * axis`
    pub point: Vector2<T>,
}

/// Project `p` onto the unit vector `axis`.
#[inline]
pub fn project_onto<T: Float>(p: Vector2<T>, axis: Vector2<T>) -> Projection<T> {
    let scalar = p.dot(axis);
    Projection {
        scalar,
        point: axis * scalar,
    }
}

/// Project every point onto `axis`.
pub fn project_all<T: Float>(points: &[Vector2<T>], axis: Vector2<T>) -> Vec<Projection<T>> {
    points.iter().map(|&p| project_onto(p, axis)).collect()
}
