//! Pure math/data for flip view layout and drawing
//!
//! This crate contains the geometry primitives and color definitions shared
//! by the flip engine's layout, render model and canvas implementations.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
