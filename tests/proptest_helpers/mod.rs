#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use textquad::geom::{Coord, Normalized, Pixel, Quad, Rect};

/// Margin used when generating points deliberately outside the unit
/// square, so containment assertions stay clear of rounding at the
/// boundary.
pub const OUTSIDE_MARGIN: f64 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A normalized point anywhere in the unit square (inclusive).
pub fn arb_unit_coord() -> BoxedStrategy<Coord<Normalized>> {
    (0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(x, y)| Coord::new(x, y))
        .boxed()
}

/// A normalized point strictly inside the unit square.
pub fn arb_interior_coord() -> BoxedStrategy<Coord<Normalized>> {
    (0.001f64..=0.999, 0.001f64..=0.999)
        .prop_map(|(x, y)| Coord::new(x, y))
        .boxed()
}

/// A normalized point with at least one component outside the unit
/// square by [`OUTSIDE_MARGIN`] or more.
pub fn arb_outside_coord() -> BoxedStrategy<Coord<Normalized>> {
    let below = -1.0f64..=-OUTSIDE_MARGIN;
    let above = (1.0 + OUTSIDE_MARGIN)..=2.0f64;
    let inside = 0.0f64..=1.0;

    prop_oneof![
        (below.clone(), inside.clone()),
        (above.clone(), inside.clone()),
        (inside.clone(), below.clone()),
        (inside, above.clone()),
        (below.clone(), above),
    ]
    .prop_map(|(x, y)| Coord::new(x, y))
    .boxed()
}

/// A quadrilateral with all corners in the unit square.
///
/// Corner ordering is not constrained: the geometry trusts whatever
/// ordering an engine reports, so the properties must hold for crossed
/// and concave quads too.
pub fn arb_quad() -> BoxedStrategy<Quad<Normalized>> {
    (
        arb_unit_coord(),
        arb_unit_coord(),
        arb_unit_coord(),
        arb_unit_coord(),
    )
        .prop_map(|(tl, tr, bl, br)| Quad::new(tl, tr, bl, br))
        .boxed()
}

/// A pixel-space target rectangle with strictly positive size.
pub fn arb_target_rect() -> BoxedStrategy<Rect<Pixel>> {
    (
        -1000.0f64..=1000.0,
        -1000.0f64..=1000.0,
        1.0f64..=4096.0,
        1.0f64..=4096.0,
    )
        .prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
        .boxed()
}

/// Absolute tolerance for round-trip comparisons in normalized space,
/// scaled for the worst target sizes [`arb_target_rect`] produces.
pub const EPS_ROUND_TRIP: f64 = 1e-9;
