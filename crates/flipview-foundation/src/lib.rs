//! Foundation layer of the flip view engine: raw touch input, gesture
//! interpretation, the continuous flip position and the page content cache.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod paging;
pub mod velocity_tracker;

pub use gestures::{FlipGestureDetector, GestureOutcome, GesturePhase, GestureSession};
pub use input::{PointerId, PointerSample, TouchAction, TouchEvent};
pub use paging::{
    content_provider_fn, ContentProvider, DistanceChange, FlipPosition, FnContentProvider,
    PageCache, PageSlot, PageWindow, SlotKind, DEFAULT_PAGE_UNIT,
};
pub use velocity_tracker::VelocityTracker1D;
