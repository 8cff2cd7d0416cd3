//! Two-dimensional vector type shared by every widget.
//!
//! ## Purpose
//!
//! `Vector2` is the ordered pair used for query/key vectors, data points,
//! eigenvectors and projected points. It has no identity beyond its coordinates.
//!
//! ## Design notes
//!
//! * **Copy semantics**: Two floats, passed by value everywhere.
//! * **Generics**: Generic over `Float` types (f32 and f64).
//! * **Operators**: `Add`, `Sub`, `Neg` and scalar `Mul` are implemented so
//!   centering and projection read like the formulas.
//!
//! ## Invariants
//!
//! * `normalized()` returns `None` for a zero-length vector instead of NaNs.

use core::ops::{Add, Mul, Neg, Sub};
use num_traits::Float;

/// An ordered pair `(x, y)` of real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vector2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T: Float> Vector2<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Unit vector along the x axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along the y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Dot product `x1*x2 + y1*y2`.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> T {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    #[inline]
    pub fn normalized(self) -> Option<Self> {
        let len = self.norm();
        if len == T::zero() || !len.is_finite() {
            return None;
        }
        Some(Self::new(self.x / len, self.y / len))
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Polar angle `atan2(y, x)` in radians.
    #[inline]
    pub fn angle(self) -> T {
        self.y.atan2(self.x)
    }

    /// Clamp each component independently into `[-limit, limit]`.
    #[inline]
    pub fn clamp_components(self, limit: T) -> Self {
        Self::new(
            self.x.max(-limit).min(limit),
            self.y.max(-limit).min(limit),
        )
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Float> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
