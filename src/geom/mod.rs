//! Typed geometry for text-region overlays.
//!
//! This module is the crate's core: points, rectangles, and
//! quadrilaterals tagged at the type level with the coordinate space
//! they live in, plus the projection that crosses between spaces.
//!
//! # Design principles
//!
//! 1. **Type safety**: marker types ([`Normalized`], [`Pixel`]) make it a
//!    compile error to hand a pixel point to something expecting a
//!    normalized one.
//!
//! 2. **One conversion site**: the normalized-to-pixel formula, including
//!    the vertical axis flip, lives only in [`Projection`]. Shape
//!    builders map corners through it and never do inline math.
//!
//! 3. **Total functions**: geometry never fails. Out-of-range, inverted,
//!    and degenerate inputs produce out-of-range, inverted, and
//!    degenerate outputs.
//!
//! # Example
//!
//! ```
//! use textquad::geom::{Coord, Projection, Rect};
//!
//! let projection = Projection::new(Rect::from_xywh(0.0, 0.0, 640.0, 480.0));
//! let px = projection.to_pixel(Coord::new(0.5, 1.0));
//! assert_eq!((px.x, px.y), (320.0, 0.0));
//! ```

mod coord;
mod project;
mod quad;
mod rect;
mod space;

// Re-export core types for convenient access
pub use coord::Coord;
pub use project::Projection;
pub use quad::Quad;
pub use rect::Rect;
pub use space::{Normalized, Pixel};
