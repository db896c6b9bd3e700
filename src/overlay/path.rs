//! Closed path descriptions handed to the rendering layer.

use serde::{Deserialize, Serialize};

use crate::geom::{Coord, Pixel};

/// One segment of an overlay path, starting where the previous segment
/// (or the path's start point) ended.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSegment {
    /// A straight line to the given point.
    LineTo(Coord<Pixel>),
    /// A quadratic curve to `end`, bending toward `control`.
    QuadTo {
        control: Coord<Pixel>,
        end: Coord<Pixel>,
    },
}

impl PathSegment {
    /// The point this segment ends at.
    #[inline]
    pub fn end(&self) -> Coord<Pixel> {
        match *self {
            PathSegment::LineTo(p) => p,
            PathSegment::QuadTo { end, .. } => end,
        }
    }
}

/// A closed polygon outline in pixel space.
///
/// The path begins at `start`, walks each segment in order, and is
/// implicitly closed back to `start` with a straight edge if the final
/// segment ends elsewhere. Renderers translate this 1:1 into their own
/// path type (move-to, line-to, quad-curve-to, close).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayPath {
    pub start: Coord<Pixel>,
    pub segments: Vec<PathSegment>,
}

impl OverlayPath {
    /// Creates a closed path from a start point and its segments.
    #[inline]
    pub fn new(start: Coord<Pixel>, segments: Vec<PathSegment>) -> Self {
        Self { start, segments }
    }

    /// The path's anchor points: the start point followed by every
    /// segment end point, in order.
    ///
    /// Curve control points are not anchors. For straight-edged shapes
    /// this is exactly the polygon's vertex list.
    pub fn anchor_points(&self) -> Vec<Coord<Pixel>> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push(self.start);
        points.extend(self.segments.iter().map(PathSegment::end));
        points
    }

    /// Returns true if every anchor and control point is finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.segments.iter().all(|segment| match segment {
                PathSegment::LineTo(p) => p.is_finite(),
                PathSegment::QuadTo { control, end } => control.is_finite() && end.is_finite(),
            })
    }
}
