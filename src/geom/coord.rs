//! Typed 2D points using PhantomData for compile-time space safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::Normalized;

/// A 2D point with a type-level marker for the coordinate space.
///
/// The `TSpace` parameter should be either [`Pixel`](super::Pixel) or
/// [`Normalized`], ensuring that points from different spaces cannot be
/// accidentally mixed. Construction is permissive: any finite or
/// non-finite value is representable, and normalized points outside the
/// unit square are legal (expansion produces them).
#[derive(PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

// Manual Clone/Copy to avoid the implicit `TSpace: Clone`/`TSpace: Copy`
// bounds that `#[derive]` would introduce (same reason as the serde impls
// below). `Coord` is a pair of `f64`s plus a ZST marker, so it is always
// copyable regardless of `TSpace`.
impl<TSpace> Clone for Coord<TSpace> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<TSpace> Copy for Coord<TSpace> {}

impl<TSpace> Coord<TSpace> {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Coord<Normalized> {
    /// Mirrors the point across the horizontal midline of the unit square.
    ///
    /// Recognition engines that report upper-left-origin normalized
    /// coordinates call this once when constructing observations, so that
    /// everything downstream sees the crate's y-up convention. See the
    /// [`space`](super::space) module docs.
    #[inline]
    pub fn flip_y(self) -> Self {
        Self::new(self.x, 1.0 - self.y)
    }

    /// Returns true if the point lies inside the unit square (inclusive).
    #[inline]
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coord")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<TSpace> Default for Coord<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Coord<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Coord", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Coord<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct CoordData {
            x: f64,
            y: f64,
        }
        let data = CoordData::deserialize(deserializer)?;
        Ok(Coord::new(data.x, data.y))
    }
}
