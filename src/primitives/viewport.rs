//! Logical-to-screen coordinate mapping for pointer input.
//!
//! ## Purpose
//!
//! Widgets receive pointer positions in canvas pixels and keep their state in
//! logical coordinates. `Viewport` is the affine map between the two, with the
//! y axis flipped so that logical "up" is screen "up".
//!
//! ## Design notes
//!
//! * **Single representation**: Both the centered layout used by the vector
//!   widgets and the ranged layout used by the PCA canvas reduce to an origin
//!   (pixel position of logical `(0, 0)`) and a pixels-per-unit scale.
//! * **Display scaling**: `canvas_from_client` undoes CSS scaling of the canvas
//!   element before the logical conversion.
//!
//! ## Invariants
//!
//! * `to_logical(to_screen(p)) == p` up to rounding.
//! * `scale` is strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not draw anything.

use num_traits::Float;

use crate::primitives::vector::Vector2;

/// Affine map between logical coordinates and canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Viewport<T> {
    /// Canvas width in pixels.
    pub width: T,
    /// Canvas height in pixels.
    pub height: T,
    /// Pixel position of logical `(0, 0)`.
    pub origin: Vector2<T>,
    /// Pixels per logical unit.
    pub scale: T,
}

impl<T: Float> Viewport<T> {
    /// Logical origin at the canvas center, `scale` pixels per unit.
    pub fn centered(width: T, height: T, scale: T) -> Self {
        let two = T::one() + T::one();
        Self {
            width,
            height,
            origin: Vector2::new(width / two, height / two),
            scale,
        }
    }

    /// Square canvas of `size` pixels showing logical `[min, max]` on both axes.
    pub fn ranged(size: T, min: T, max: T) -> Self {
        let scale = size / (max - min);
        Self {
            width: size,
            height: size,
            origin: Vector2::new(-min * scale, size + min * scale),
            scale,
        }
    }

    /// Convert a logical point to canvas pixels.
    #[inline]
    pub fn to_screen(&self, p: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            p.x * self.scale + self.origin.x,
            -p.y * self.scale + self.origin.y,
        )
    }

    /// Convert canvas pixels to a logical point.
    #[inline]
    pub fn to_logical(&self, screen: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            (screen.x - self.origin.x) / self.scale,
            -(screen.y - self.origin.y) / self.scale,
        )
    }

    /// Convert a logical length to pixels.
    #[inline]
    pub fn scale_length(&self, len: T) -> T {
        len * self.scale
    }

    /// Map a pointer position in client coordinates to canvas pixels, given
    /// the on-page rectangle the canvas is displayed in.
    pub fn canvas_from_client(
        &self,
        client: Vector2<T>,
        rect_origin: Vector2<T>,
        rect_size: Vector2<T>,
    ) -> Vector2<T> {
        let sx = self.width / rect_size.x;
        let sy = self.height / rect_size.y;
        Vector2::new(
            (client.x - rect_origin.x) * sx,
            (client.y - rect_origin.y) * sy,
        )
    }

    /// True when the screen point lies within `threshold` pixels of the
    /// screen position of `endpoint`.
    #[inline]
    pub fn hit_test(&self, screen: Vector2<T>, endpoint: Vector2<T>, threshold: T) -> bool {
        (screen - self.to_screen(endpoint)).norm() <= threshold
    }
}
