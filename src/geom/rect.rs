//! Axis-aligned rectangles in origin + size form.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::Normalized;

/// An axis-aligned rectangle described by its origin corner and size.
///
/// The `TSpace` parameter should be either [`Pixel`](super::Pixel) or
/// [`Normalized`], ensuring type safety across coordinate spaces. In
/// normalized space the origin is the lower-left corner (y up); in pixel
/// space it is the upper-left corner (y down). The same type serves both
/// as an observation's normalized bounding rectangle and as the
/// pixel-space target rectangle shapes are projected into.
///
/// Note: this type does NOT enforce non-negative sizes. Degenerate and
/// inverted rectangles are representable on purpose, so the geometry
/// stays total rather than failing on odd engine output.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect<TSpace> {
    pub origin: Coord<TSpace>,
    pub width: f64,
    pub height: f64,
}

impl<TSpace> Rect<TSpace> {
    /// Creates a new rectangle from an origin corner and size.
    #[inline]
    pub fn new(origin: Coord<TSpace>, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Creates a new rectangle from explicit origin and size components.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Coord::new(x, y), width, height)
    }

    /// The corner opposite the origin.
    #[inline]
    pub fn far_corner(&self) -> Coord<TSpace> {
        Coord::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    /// Returns the area of the rectangle.
    ///
    /// May be negative if one size component is negative.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if origin and size are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns true if the point lies within the rectangle (inclusive).
    ///
    /// Only meaningful for non-negative sizes; an inverted rectangle
    /// contains nothing.
    #[inline]
    pub fn contains(&self, p: Coord<TSpace>) -> bool {
        let far = self.far_corner();
        p.x >= self.origin.x && p.x <= far.x && p.y >= self.origin.y && p.y <= far.y
    }
}

impl Rect<Normalized> {
    /// The full-image bounding rectangle, (0, 0) with size 1 x 1.
    #[inline]
    pub fn full_image() -> Self {
        Self::from_xywh(0.0, 0.0, 1.0, 1.0)
    }
}

impl<TSpace> std::fmt::Debug for Rect<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("x", &self.origin.x)
            .field("y", &self.origin.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<TSpace> Default for Rect<TSpace> {
    fn default() -> Self {
        Self::from_xywh(0.0, 0.0, 0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Rect<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Rect", 4)?;
        state.serialize_field("x", &self.origin.x)?;
        state.serialize_field("y", &self.origin.y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Rect<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RectData {
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        }
        let data = RectData::deserialize(deserializer)?;
        Ok(Rect::from_xywh(data.x, data.y, data.width, data.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pixel;

    #[test]
    fn test_rect_from_xywh() {
        let rect: Rect<Pixel> = Rect::from_xywh(10.0, 20.0, 90.0, 60.0);
        assert_eq!(rect.origin, Coord::new(10.0, 20.0));
        assert_eq!(rect.far_corner(), Coord::new(100.0, 80.0));
        assert_eq!(rect.area(), 5400.0);
    }

    #[test]
    fn test_rect_contains_boundaries() {
        let rect: Rect<Pixel> = Rect::from_xywh(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains(Coord::new(0.0, 0.0)));
        assert!(rect.contains(Coord::new(100.0, 50.0)));
        assert!(!rect.contains(Coord::new(100.1, 25.0)));
        assert!(!rect.contains(Coord::new(50.0, -0.1)));
    }

    #[test]
    fn test_degenerate_rect_is_representable() {
        let rect: Rect<Normalized> = Rect::from_xywh(0.3, 0.3, 0.0, -0.2);
        assert!(rect.is_finite());
        assert_eq!(rect.area(), -0.0);
    }

    #[test]
    fn test_full_image_rect() {
        let rect = Rect::full_image();
        assert_eq!(rect.origin, Coord::new(0.0, 0.0));
        assert_eq!(rect.far_corner(), Coord::new(1.0, 1.0));
    }
}
