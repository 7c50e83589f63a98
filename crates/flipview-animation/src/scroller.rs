//! Flip scroller: the time-based driver behind programmatic page flips.
//!
//! Given a start distance and a delta, the scroller yields one interpolated
//! distance per frame until the delta is consumed. The start time latches on
//! the first frame after [`FlipScroller::start_scroll`], the same way frame
//! callback animations pick up their origin.

use crate::{Easing, Lerp};

const NANOS_PER_MILLI: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct FlipScroller {
    start: f32,
    delta: f32,
    duration_millis: u64,
    easing: Easing,
    start_time_nanos: Option<u64>,
    current: f32,
    finished: bool,
}

impl Default for FlipScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipScroller {
    /// Creates an idle scroller using linear interpolation.
    pub fn new() -> Self {
        Self::with_easing(Easing::LinearEasing)
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            start: 0.0,
            delta: 0.0,
            duration_millis: 0,
            easing,
            start_time_nanos: None,
            current: 0.0,
            finished: true,
        }
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Flip duration for a distance: `base * sqrt(|delta| / page_unit)`,
    /// rounded to whole milliseconds.
    ///
    /// A non-positive page unit yields zero so the scroll completes on the
    /// next frame.
    pub fn duration_for(delta: f32, page_unit: f32, base_millis: u64) -> u64 {
        if page_unit.is_nan() || page_unit <= 0.0 || !delta.is_finite() {
            return 0;
        }
        let pages = (delta.abs() / page_unit) as f64;
        (base_millis as f64 * pages.sqrt()).round() as u64
    }

    /// Starts scrolling from `start` by `delta`, replacing any scroll in
    /// flight.
    pub fn start_scroll(&mut self, start: f32, delta: f32, duration_millis: u64) {
        log::trace!("scroll from {start} by {delta} over {duration_millis}ms");
        self.start = start;
        self.delta = delta;
        self.duration_millis = duration_millis;
        self.start_time_nanos = None;
        self.current = start;
        self.finished = false;
    }

    /// Advances to `frame_time_nanos`.
    ///
    /// Returns `true` while the scroll produced a value this frame (including
    /// the frame that completes it) and `false` once it was already finished.
    pub fn compute_scroll_offset(&mut self, frame_time_nanos: u64) -> bool {
        if self.finished {
            return false;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.duration_millis.saturating_mul(NANOS_PER_MILLI);

        if elapsed >= duration_nanos {
            self.current = self.final_value();
            self.finished = true;
        } else {
            let linear = elapsed as f32 / duration_nanos as f32;
            let progress = self.easing.transform(linear);
            self.current = self.start.lerp(&self.final_value(), progress);
        }
        true
    }

    /// Stops the scroll where it is; the last interpolated value stays
    /// available through [`FlipScroller::current`].
    pub fn abort(&mut self) {
        self.finished = true;
        self.start_time_nanos = None;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn final_value(&self) -> f32 {
        self.start + self.delta
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
