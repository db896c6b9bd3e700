//! The four overlay shape builders.
//!
//! Each builder takes a normalized region plus a [`Projection`] and
//! returns a closed [`OverlayPath`] in pixel space. All four are pure
//! functions: no state, no failure modes. Degenerate regions come out as
//! degenerate (zero-width) paths.

use crate::geom::{Coord, Normalized, Pixel, Projection, Quad, Rect};

use super::path::{OverlayPath, PathSegment};

/// Default corner radius for [`rounded_quad`], in pixel units.
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

/// Default expansion factor for [`expanded_quad`] (10% outward).
pub const DEFAULT_EXPANSION_FACTOR: f64 = 1.1;

/// The axis-aligned pixel rectangle enclosing a normalized bounding
/// rectangle. The simplest overlay.
pub fn axis_aligned_box(bounds: &Rect<Normalized>, projection: &Projection) -> OverlayPath {
    let rect = projection.rect_to_pixel(bounds);
    let far = rect.far_corner();
    OverlayPath::new(
        rect.origin,
        vec![
            PathSegment::LineTo(Coord::new(far.x, rect.origin.y)),
            PathSegment::LineTo(far),
            PathSegment::LineTo(Coord::new(rect.origin.x, far.y)),
        ],
    )
}

/// The quadrilateral's corners connected in draw order:
/// top-left, top-right, bottom-right, bottom-left, close.
///
/// Corner ordering is trusted (see [`Quad`]); crossed corners produce a
/// self-intersecting outline rather than an error.
pub fn straight_quad(quad: &Quad<Normalized>, projection: &Projection) -> OverlayPath {
    let [a, b, c, d] = projection.quad_to_pixel(quad).corners();
    OverlayPath::new(
        a,
        vec![
            PathSegment::LineTo(b),
            PathSegment::LineTo(c),
            PathSegment::LineTo(d),
        ],
    )
}

/// Like [`straight_quad`], but each corner is replaced by a straight
/// approach stopped `corner_radius` pixel units short of the corner and
/// a quadratic curve, with the corner as control point, to the point the
/// same distance past it along the next edge.
///
/// `corner_radius` should stay below half the shortest edge length; the
/// builder does not enforce this, and larger radii make neighboring
/// curves overlap. The curves are an approximation, not a geometrically
/// exact rounded polygon. A radius of 0 degenerates to the straight
/// quad's corner positions.
pub fn rounded_quad(
    quad: &Quad<Normalized>,
    projection: &Projection,
    corner_radius: f64,
) -> OverlayPath {
    let corners = projection.quad_to_pixel(quad).corners();
    let entry = |i: usize| step_toward(corners[i], corners[(i + 3) % 4], corner_radius);
    let exit = |i: usize| step_toward(corners[i], corners[(i + 1) % 4], corner_radius);

    let mut segments = Vec::with_capacity(8);
    for i in [1, 2, 3, 0] {
        segments.push(PathSegment::LineTo(entry(i)));
        segments.push(PathSegment::QuadTo {
            control: corners[i],
            end: exit(i),
        });
    }
    // The final curve ends at exit(0), which is also the start point, so
    // the implicit close adds no edge.
    OverlayPath::new(exit(0), segments)
}

/// [`straight_quad`] of the quadrilateral scaled about its centroid by
/// `expansion_factor`, giving the outline breathing room around the
/// text.
///
/// Scaling happens in normalized space before projection, so the
/// expansion stays proportional to the image whatever the target
/// rectangle's aspect ratio. A factor of 1.0 is a no-op.
pub fn expanded_quad(
    quad: &Quad<Normalized>,
    projection: &Projection,
    expansion_factor: f64,
) -> OverlayPath {
    straight_quad(&quad.scaled_about_centroid(expansion_factor), projection)
}

/// The point `distance` pixel units from `from` along the direction of
/// `to`. A zero-length edge has no direction, so `from` itself comes
/// back and the builders stay total.
fn step_toward(from: Coord<Pixel>, to: Coord<Pixel>, distance: f64) -> Coord<Pixel> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return from;
    }
    Coord::new(
        from.x + dx / length * distance,
        from.y + dy / length * distance,
    )
}
