//! Frame-driven animations for the flip view engine.
//!
//! Everything here advances only when the host hands in a frame timestamp;
//! nothing owns a clock or a thread.

mod animation;
mod edge_effect;
mod scroller;

pub use animation::{Easing, Lerp};
pub use edge_effect::{EdgeEffect, EdgeGlow, EdgeSide, OverscrollEdges, EDGE_RECEDE_MILLIS};
pub use scroller::FlipScroller;
