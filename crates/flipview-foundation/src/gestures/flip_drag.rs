//! Drag-vs-tap recogniser for the flip pager.
//!
//! The detector turns a raw touch stream into [`GestureOutcome`]s. It keeps
//! the pointer bookkeeping and velocity samples for one gesture session but
//! never touches the flip position; the widget applies the outcomes.

use crate::input::{PointerId, TouchAction, TouchEvent};
use crate::velocity_tracker::VelocityTracker1D;
use flipview_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// A pointer is down but has not crossed the paging slop yet.
    Undecided,
    Dragging,
}

/// State scoped to one active-pointer lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub active_pointer: PointerId,
    /// Last local position used for slop checks and drag deltas.
    pub last: Point,
    /// Screen position recorded at the initial down, used for tap matching.
    pub down_raw: Point,
    pub touch_slop_crossed: bool,
}

/// What the widget should do in response to one touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// No session is active and the event does not start one.
    Ignored,
    /// The event updated the session without moving anything.
    Tracking,
    /// The session became a drag. Any running animation must stop.
    DragStarted,
    /// Pixels to advance by; positive when the pointer moved left.
    DragBy { delta_px: f32 },
    /// The drag ended with the given horizontal velocity in px/s. A drag
    /// that lost its pointer ends with zero velocity.
    Released { velocity: f32 },
    /// The pointer went up without dragging at the down anchor.
    Tap { position: Point, raw: Point },
    /// The session ended without a drag or a tap.
    Reset,
}

#[derive(Debug)]
pub struct FlipGestureDetector {
    touch_slop: f32,
    max_fling_velocity: f32,
    phase: GesturePhase,
    session: Option<GestureSession>,
    velocity: VelocityTracker1D,
}

impl FlipGestureDetector {
    pub fn new(touch_slop: f32, max_fling_velocity: f32) -> Self {
        Self {
            touch_slop,
            max_fling_velocity,
            phase: GesturePhase::Idle,
            session: None,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Ends the session after lost pointer data. A drag still has to settle,
    /// so it ends as a release without velocity.
    fn end_session(&mut self) -> GestureOutcome {
        let outcome = if self.phase == GesturePhase::Dragging {
            GestureOutcome::Released { velocity: 0.0 }
        } else {
            GestureOutcome::Reset
        };
        self.cancel();
        outcome
    }

    /// Drops the current session without producing a release.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
        self.session = None;
        self.velocity.reset();
    }

    /// Feeds one touch event. `animation_running` tells the detector that a
    /// settle animation is in flight, in which case a down grabs the page
    /// immediately.
    pub fn on_touch_event(&mut self, event: &TouchEvent, animation_running: bool) -> GestureOutcome {
        match event.action {
            TouchAction::Down => self.on_down(event, animation_running),
            TouchAction::PointerDown => self.on_pointer_down(event),
            TouchAction::Move => self.on_move(event),
            TouchAction::PointerUp => self.on_pointer_up(event),
            TouchAction::Up => self.on_up(event),
            TouchAction::Cancel => self.on_cancel(event),
        }
    }

    fn on_down(&mut self, event: &TouchEvent, animation_running: bool) -> GestureOutcome {
        let index = event.action_index;
        let (Some(pointer), Some(raw)) = (event.pointer(index), event.raw_position(index)) else {
            log::warn!("down event without pointer data at index {index}");
            return self.end_session();
        };
        // A drag whose up never arrived is picked up again by the new pointer.
        let grab = animation_running || self.phase == GesturePhase::Dragging;

        self.velocity.reset();
        self.velocity.add_data_point(event.time_ms, pointer.position.x);
        self.session = Some(GestureSession {
            active_pointer: pointer.id,
            last: pointer.position,
            down_raw: raw,
            touch_slop_crossed: grab,
        });

        if grab {
            self.phase = GesturePhase::Dragging;
            GestureOutcome::DragStarted
        } else {
            self.phase = GesturePhase::Undecided;
            GestureOutcome::Tracking
        }
    }

    fn on_pointer_down(&mut self, event: &TouchEvent) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        let Some(pointer) = event.action_pointer() else {
            return GestureOutcome::Tracking;
        };
        session.active_pointer = pointer.id;
        session.last = pointer.position;
        self.velocity.reset();
        self.velocity.add_data_point(event.time_ms, pointer.position.x);
        GestureOutcome::Tracking
    }

    fn on_pointer_up(&mut self, event: &TouchEvent) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        let lifted = event.action_pointer().map(|pointer| pointer.id);
        if lifted == Some(session.active_pointer) {
            let remaining = if event.action_index == 0 { 1 } else { 0 };
            if let Some(pointer) = event.pointer(remaining) {
                session.active_pointer = pointer.id;
                session.last = pointer.position;
                self.velocity.reset();
                self.velocity.add_data_point(event.time_ms, pointer.position.x);
            }
        }
        GestureOutcome::Tracking
    }

    fn on_move(&mut self, event: &TouchEvent) -> GestureOutcome {
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        let Some(index) = event.find_pointer_index(session.active_pointer) else {
            log::warn!(
                "active pointer {} vanished from move event, ending gesture",
                session.active_pointer
            );
            return self.end_session();
        };
        let Some(position) = event.pointer(index).map(|pointer| pointer.position) else {
            return self.end_session();
        };
        self.velocity.add_data_point(event.time_ms, position.x);

        match self.phase {
            GesturePhase::Undecided => {
                let x_diff = (position.x - session.last.x).abs();
                let y_diff = (position.y - session.last.y).abs();
                if x_diff > self.touch_slop && x_diff > y_diff {
                    session.touch_slop_crossed = true;
                    session.last = position;
                    self.phase = GesturePhase::Dragging;
                    GestureOutcome::DragStarted
                } else {
                    GestureOutcome::Tracking
                }
            }
            GesturePhase::Dragging => {
                let delta_px = session.last.x - position.x;
                session.last = position;
                log::trace!("drag by {delta_px}px");
                GestureOutcome::DragBy { delta_px }
            }
            GesturePhase::Idle => GestureOutcome::Ignored,
        }
    }

    fn on_up(&mut self, event: &TouchEvent) -> GestureOutcome {
        let Some(session) = self.session else {
            return GestureOutcome::Ignored;
        };
        let index = event.find_pointer_index(session.active_pointer);

        let outcome = if self.phase == GesturePhase::Dragging {
            if let Some(pointer) = index.and_then(|index| event.pointer(index)) {
                self.velocity.add_data_point(event.time_ms, pointer.position.x);
            }
            let velocity = self.velocity.take_velocity(self.max_fling_velocity);
            GestureOutcome::Released { velocity }
        } else {
            let index = index.unwrap_or(event.action_index);
            match (event.pointer(index), event.raw_position(index)) {
                (Some(pointer), Some(raw))
                    if raw.x == session.down_raw.x || raw.y == session.down_raw.y =>
                {
                    GestureOutcome::Tap {
                        position: pointer.position,
                        raw,
                    }
                }
                _ => GestureOutcome::Reset,
            }
        };

        self.cancel();
        outcome
    }

    fn on_cancel(&mut self, _event: &TouchEvent) -> GestureOutcome {
        let outcome = match self.phase {
            GesturePhase::Dragging => GestureOutcome::Released {
                velocity: self.velocity.take_velocity(self.max_fling_velocity),
            },
            GesturePhase::Undecided => GestureOutcome::Reset,
            GesturePhase::Idle => GestureOutcome::Ignored,
        };
        self.cancel();
        outcome
    }
}

#[cfg(test)]
#[path = "tests/flip_drag_tests.rs"]
mod tests;
