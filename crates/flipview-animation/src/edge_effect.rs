//! Edge overscroll model.
//!
//! Each rigid bound (before the first page, after the last page) owns a pull
//! accumulator. Dragging past a bound feeds it; releasing starts a recede
//! that decays the stored pull to zero over [`EDGE_RECEDE_MILLIS`]. While any
//! edge is active the host has to keep producing frames.

use crate::Easing;

/// Time a released edge takes to fade out.
pub const EDGE_RECEDE_MILLIS: u64 = 600;

const NANOS_PER_MILLI: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
enum EdgeState {
    Idle,
    Pull,
    Recede {
        from: f32,
        start_time_nanos: Option<u64>,
    },
}

/// A single pull accumulator.
#[derive(Debug, Clone)]
pub struct EdgeEffect {
    state: EdgeState,
    amount: f32,
}

impl Default for EdgeEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeEffect {
    pub fn new() -> Self {
        Self {
            state: EdgeState::Idle,
            amount: 0.0,
        }
    }

    /// Adds `strength` (clamped into `[0, 1]`) to the stored pull.
    ///
    /// Pulling during a recede resumes from the value the recede had reached.
    pub fn on_pull(&mut self, strength: f32) {
        if !strength.is_finite() {
            return;
        }
        self.amount = (self.amount + strength.clamp(0.0, 1.0)).min(1.0);
        self.state = EdgeState::Pull;
    }

    /// Starts decaying the stored pull toward zero.
    pub fn on_release(&mut self) {
        if self.state != EdgeState::Pull {
            return;
        }
        if self.amount <= 0.0 {
            self.finish();
            return;
        }
        log::trace!("edge receding from {:.3}", self.amount);
        self.state = EdgeState::Recede {
            from: self.amount,
            start_time_nanos: None,
        };
    }

    /// Advances a recede to `frame_time_nanos`; returns whether the edge
    /// still needs frames.
    pub fn step(&mut self, frame_time_nanos: u64) -> bool {
        if let EdgeState::Recede {
            from,
            ref mut start_time_nanos,
        } = self.state
        {
            let start = *start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start);
            let duration = EDGE_RECEDE_MILLIS * NANOS_PER_MILLI;
            if elapsed >= duration {
                self.finish();
            } else {
                let progress = Easing::Decelerate.transform(elapsed as f32 / duration as f32);
                let decayed = from * (1.0 - progress);
                self.amount = decayed.clamp(0.0, self.amount);
            }
        }
        !self.is_finished()
    }

    /// Drops any pull immediately.
    pub fn finish(&mut self) {
        self.state = EdgeState::Idle;
        self.amount = 0.0;
    }

    /// Live pull magnitude in `[0, 1]`.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn is_finished(&self) -> bool {
        self.state == EdgeState::Idle
    }

    pub fn is_receding(&self) -> bool {
        matches!(self.state, EdgeState::Recede { .. })
    }
}

/// Which bound an edge glow belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// Pulled past page 0; glows along the leading (left) edge.
    BeforeFirst,
    /// Pulled past the last page; glows along the trailing (right) edge.
    AfterLast,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGlow {
    pub side: EdgeSide,
    pub amount: f32,
}

/// The two independent edges of a flip view.
#[derive(Debug, Clone, Default)]
pub struct OverscrollEdges {
    before_first: EdgeEffect,
    after_last: EdgeEffect,
}

impl OverscrollEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a signed excess past the bounds: negative excess pulls the
    /// before-first edge, positive the after-last edge. The strength is the
    /// excess relative to `extent` (the view width).
    pub fn pull(&mut self, excess: f32, extent: f32) {
        if excess == 0.0 || extent <= 0.0 || !extent.is_finite() {
            return;
        }
        let strength = excess.abs() / extent;
        if excess < 0.0 {
            self.before_first.on_pull(strength);
        } else {
            self.after_last.on_pull(strength);
        }
    }

    pub fn release(&mut self) {
        self.before_first.on_release();
        self.after_last.on_release();
    }

    /// Advances both edges; returns whether another frame is needed.
    pub fn step(&mut self, frame_time_nanos: u64) -> bool {
        let before = self.before_first.step(frame_time_nanos);
        let after = self.after_last.step(frame_time_nanos);
        before || after
    }

    pub fn is_active(&self) -> bool {
        !self.before_first.is_finished() || !self.after_last.is_finished()
    }

    /// The edge to draw this frame; the before-first edge wins when both are
    /// active.
    pub fn glow(&self) -> Option<EdgeGlow> {
        if !self.before_first.is_finished() {
            Some(EdgeGlow {
                side: EdgeSide::BeforeFirst,
                amount: self.before_first.amount(),
            })
        } else if !self.after_last.is_finished() {
            Some(EdgeGlow {
                side: EdgeSide::AfterLast,
                amount: self.after_last.amount(),
            })
        } else {
            None
        }
    }

    pub fn edge(&self, side: EdgeSide) -> &EdgeEffect {
        match side {
            EdgeSide::BeforeFirst => &self.before_first,
            EdgeSide::AfterLast => &self.after_last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_NANOS: u64 = 16_666_667;

    #[test]
    fn pull_accumulates_and_saturates() {
        let mut edge = EdgeEffect::new();
        edge.on_pull(0.4);
        edge.on_pull(0.4);
        assert!((edge.amount() - 0.8).abs() < 1e-6);
        edge.on_pull(5.0);
        assert_eq!(edge.amount(), 1.0);
        assert!(!edge.is_finished());
    }

    #[test]
    fn release_decays_monotonically_to_zero() {
        let mut edge = EdgeEffect::new();
        edge.on_pull(0.3);
        edge.on_release();
        assert!(edge.is_receding());

        let mut previous = edge.amount();
        let mut time = 0;
        let mut ticks = 0;
        while edge.step(time) {
            assert!(edge.amount() <= previous, "decay went back up");
            assert!(edge.amount() >= 0.0, "decay went negative");
            previous = edge.amount();
            time += FRAME_NANOS;
            ticks += 1;
            assert!(ticks < 100, "recede never finished");
        }

        assert!(edge.is_finished());
        assert_eq!(edge.amount(), 0.0);
        // 600ms at ~16.7ms a frame.
        assert_eq!(ticks, 36);
    }

    #[test]
    fn pull_during_recede_resumes_from_current_value() {
        let mut edge = EdgeEffect::new();
        edge.on_pull(0.5);
        edge.on_release();
        edge.step(0);
        edge.step(300 * NANOS_PER_MILLI);
        let receded = edge.amount();
        assert!(receded < 0.5);

        edge.on_pull(0.1);
        assert!((edge.amount() - (receded + 0.1)).abs() < 1e-6);
        assert!(!edge.is_receding());
    }

    #[test]
    fn release_without_pull_is_noop() {
        let mut edge = EdgeEffect::new();
        edge.on_release();
        assert!(edge.is_finished());
        assert!(!edge.step(0));
    }

    #[test]
    fn edges_route_excess_by_sign() {
        let mut edges = OverscrollEdges::new();
        edges.pull(-50.0, 500.0);
        assert_eq!(edges.edge(EdgeSide::BeforeFirst).amount(), 0.1);
        assert!(edges.edge(EdgeSide::AfterLast).is_finished());

        edges.pull(100.0, 500.0);
        assert_eq!(edges.edge(EdgeSide::AfterLast).amount(), 0.2);
        assert_eq!(edges.glow().map(|glow| glow.side), Some(EdgeSide::BeforeFirst));
    }

    #[test]
    fn edges_ignore_degenerate_extent() {
        let mut edges = OverscrollEdges::new();
        edges.pull(-50.0, 0.0);
        assert!(!edges.is_active());
        assert_eq!(edges.glow(), None);
    }

    #[test]
    fn edges_stay_active_until_both_finish() {
        let mut edges = OverscrollEdges::new();
        edges.pull(-10.0, 100.0);
        edges.release();
        assert!(edges.step(0));
        assert!(!edges.step(EDGE_RECEDE_MILLIS * NANOS_PER_MILLI));
        assert!(!edges.is_active());
    }
}
