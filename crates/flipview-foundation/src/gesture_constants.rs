//! Shared gesture constants for flip paging.
//!
//! Values are in logical pixels (and logical pixels per second) at a baseline
//! density. Hosts on dense screens scale them before building settings.

/// Touch slop for generic drags, matching Android's `TOUCH_SLOP` of 8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Paging slop: a horizontal move has to exceed this before a flip starts.
///
/// Paging uses twice the generic slop so small diagonal wobbles in a
/// vertically scrolling list do not grab the page.
pub const PAGING_TOUCH_SLOP: f32 = DRAG_THRESHOLD * 2.0;

/// Release velocity above which a flip settles in the direction of travel
/// instead of to the nearest page.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
