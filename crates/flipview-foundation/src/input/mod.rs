//! Raw touch input delivered by the host platform.

mod types;

pub use types::{PointerId, PointerSample, TouchAction, TouchEvent};
