//! Pure math/data for drawing & units in Pocket UI
//!
//! Geometry primitives and colour definitions shared by the widget tree,
//! the layout pass and every renderer backend.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
