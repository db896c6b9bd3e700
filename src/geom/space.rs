//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! the two coordinate systems at compile time. They also pin down the one
//! crate-wide axis convention:
//!
//! - [`Normalized`] space has its origin at the LOWER-left of the image and
//!   y increasing upward. This is the convention the recognition engines we
//!   target report in, and the one [`Projection`](crate::geom::Projection)
//!   assumes. An engine that reports upper-left-origin coordinates must
//!   flip y at the adapter (see [`Coord::flip_y`](crate::geom::Coord::flip_y)).
//! - [`Pixel`] space has its origin at the upper-left of the target
//!   rectangle and y increasing downward, matching raster drawing surfaces.
//!
//! The vertical flip between the two lives in exactly one place, the
//! projection formula.

use std::fmt;

/// Marker type for normalized coordinates (fractions of image size).
///
/// Values are conventionally in 0.0..=1.0 per axis, but out-of-range
/// values are legal and meaningful (quad expansion produces them).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

/// Marker type for pixel coordinates within a target rectangle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Normalized has no variants
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Pixel has no variants
    }
}
