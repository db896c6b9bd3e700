//! Projection between normalized space and a pixel-space target rectangle.

use super::coord::Coord;
use super::quad::Quad;
use super::rect::Rect;
use super::{Normalized, Pixel};

/// Maps normalized coordinates into a pixel-space target rectangle.
///
/// This type is the ONLY place the normalized-to-pixel formula (and its
/// vertical flip) lives. Every shape builder goes through [`to_pixel`]
/// for every corner it needs; nothing else in the crate does coordinate
/// conversion inline.
///
/// Both directions are total functions: points outside the unit square
/// map to points outside the target rectangle, and a zero-sized target
/// makes [`to_normalized`] produce non-finite components rather than an
/// error.
///
/// [`to_pixel`]: Projection::to_pixel
/// [`to_normalized`]: Projection::to_normalized
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    target: Rect<Pixel>,
}

impl Projection {
    /// Creates a projection into the given target rectangle.
    #[inline]
    pub fn new(target: Rect<Pixel>) -> Self {
        Self { target }
    }

    /// The target rectangle this projection maps into.
    #[inline]
    pub fn target(&self) -> &Rect<Pixel> {
        &self.target
    }

    /// Maps a normalized point to pixel space.
    ///
    /// The y term flips the axis: normalized y grows upward, pixel y
    /// grows downward, so y = 1 lands on the target's top edge and
    /// y = 0 on its bottom edge.
    #[inline]
    pub fn to_pixel(&self, p: Coord<Normalized>) -> Coord<Pixel> {
        Coord::new(
            self.target.origin.x + p.x * self.target.width,
            self.target.origin.y + (1.0 - p.y) * self.target.height,
        )
    }

    /// Maps a pixel point back to normalized space.
    ///
    /// Exact inverse of [`to_pixel`](Projection::to_pixel) for non-zero
    /// target sizes, up to floating-point rounding.
    #[inline]
    pub fn to_normalized(&self, p: Coord<Pixel>) -> Coord<Normalized> {
        Coord::new(
            (p.x - self.target.origin.x) / self.target.width,
            1.0 - (p.y - self.target.origin.y) / self.target.height,
        )
    }

    /// Maps a normalized rectangle to the enclosing axis-aligned pixel
    /// rectangle.
    ///
    /// Both corners go through [`to_pixel`](Projection::to_pixel); the
    /// min/max at the end absorbs the vertical flip (the normalized far
    /// corner becomes the pixel-space top edge) as well as any inverted
    /// input sizes.
    pub fn rect_to_pixel(&self, rect: &Rect<Normalized>) -> Rect<Pixel> {
        let a = self.to_pixel(rect.origin);
        let b = self.to_pixel(rect.far_corner());
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Rect::from_xywh(x, y, (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Maps each corner of a normalized quadrilateral to pixel space.
    pub fn quad_to_pixel(&self, quad: &Quad<Normalized>) -> Quad<Pixel> {
        Quad::new(
            self.to_pixel(quad.top_left),
            self.to_pixel(quad.top_right),
            self.to_pixel(quad.bottom_left),
            self.to_pixel(quad.bottom_right),
        )
    }
}
