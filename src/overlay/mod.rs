//! Renderable overlay shapes built from recognized text regions.
//!
//! The [`builders`] submodule holds the four shape constructors; [`path`]
//! holds the closed-path description they all produce. Builders are pure
//! and thread-safe by construction, so callers may build shapes from any
//! thread without coordination.

mod builders;
mod path;

pub use builders::{
    axis_aligned_box, expanded_quad, rounded_quad, straight_quad, DEFAULT_CORNER_RADIUS,
    DEFAULT_EXPANSION_FACTOR,
};
pub use path::{OverlayPath, PathSegment};
