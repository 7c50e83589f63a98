//! Gesture interpretation for horizontal flip paging.

mod flip_drag;

pub use flip_drag::{FlipGestureDetector, GestureOutcome, GesturePhase, GestureSession};
