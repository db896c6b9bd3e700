//! Quadrilateral text regions with four named corners.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::rect::Rect;
use super::Normalized;

/// A quadrilateral described by four named corners.
///
/// The `TSpace` parameter should be either [`Pixel`](super::Pixel) or
/// [`Normalized`].
///
/// Precondition: callers are expected to supply corners in their named
/// positions (top-left really is the top-left of the detected region).
/// Recognition engines guarantee this ordering and the crate trusts it;
/// neither ordering nor convexity is validated. A crossed or concave
/// quad flows through every operation unchanged and simply renders as a
/// self-intersecting outline.
#[derive(Clone, Copy, PartialEq)]
pub struct Quad<TSpace> {
    pub top_left: Coord<TSpace>,
    pub top_right: Coord<TSpace>,
    pub bottom_left: Coord<TSpace>,
    pub bottom_right: Coord<TSpace>,
}

impl<TSpace> Quad<TSpace> {
    /// Creates a quadrilateral from its four corners.
    #[inline]
    pub fn new(
        top_left: Coord<TSpace>,
        top_right: Coord<TSpace>,
        bottom_left: Coord<TSpace>,
        bottom_right: Coord<TSpace>,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// The corners in closed-outline draw order:
    /// top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(&self) -> [Coord<TSpace>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// The arithmetic mean of the four corners.
    #[inline]
    pub fn centroid(&self) -> Coord<TSpace> {
        let [a, b, c, d] = self.corners();
        Coord::new(
            (a.x + b.x + c.x + d.x) / 4.0,
            (a.y + b.y + c.y + d.y) / 4.0,
        )
    }

    /// Returns true if every corner is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.corners().iter().all(Coord::is_finite)
    }
}

impl Quad<Normalized> {
    /// The quadrilateral covering a normalized bounding rectangle.
    ///
    /// Used as the fallback when an observation carries only its
    /// bounding-rectangle capability. In the crate's y-up normalized
    /// convention the rectangle origin is the bottom-left corner.
    pub fn from_rect(rect: &Rect<Normalized>) -> Self {
        let far = rect.far_corner();
        Self::new(
            Coord::new(rect.origin.x, far.y),
            Coord::new(far.x, far.y),
            rect.origin,
            Coord::new(far.x, rect.origin.y),
        )
    }

    /// Scales each corner away from (factor > 1) or toward (factor < 1)
    /// the centroid, in normalized space.
    ///
    /// This is the expansion primitive: scaling before projection keeps
    /// the growth proportional to the image rather than to the target
    /// rectangle, so the result is independent of target aspect ratio.
    /// Scaled corners routinely leave the unit square; that is expected.
    pub fn scaled_about_centroid(&self, factor: f64) -> Self {
        // A factor of 1.0 must return the corners bit-for-bit, which the
        // scale arithmetic below does not guarantee.
        if factor == 1.0 {
            return *self;
        }
        let center = self.centroid();
        let scale = |p: Coord<Normalized>| {
            Coord::new(
                center.x + (p.x - center.x) * factor,
                center.y + (p.y - center.y) * factor,
            )
        };
        Self::new(
            scale(self.top_left),
            scale(self.top_right),
            scale(self.bottom_left),
            scale(self.bottom_right),
        )
    }
}

impl<TSpace> std::fmt::Debug for Quad<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quad")
            .field("top_left", &self.top_left)
            .field("top_right", &self.top_right)
            .field("bottom_left", &self.bottom_left)
            .field("bottom_right", &self.bottom_right)
            .finish()
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Quad<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Quad", 4)?;
        state.serialize_field("top_left", &self.top_left)?;
        state.serialize_field("top_right", &self.top_right)?;
        state.serialize_field("bottom_left", &self.bottom_left)?;
        state.serialize_field("bottom_right", &self.bottom_right)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Quad<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound(deserialize = ""))]
        struct QuadData<TSpace> {
            top_left: Coord<TSpace>,
            top_right: Coord<TSpace>,
            bottom_left: Coord<TSpace>,
            bottom_right: Coord<TSpace>,
        }
        let data = QuadData::deserialize(deserializer)?;
        Ok(Quad::new(
            data.top_left,
            data.top_right,
            data.bottom_left,
            data.bottom_right,
        ))
    }
}
