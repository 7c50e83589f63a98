//! Scripted touch input.
//!
//! [`TouchRobot`] builds timestamped touch streams and feeds them straight
//! into a [`FlipViewPager`], recording every event it sent.
//!
//! ```
//! use flipview::{content_provider_fn, FlipSettings, FlipViewPager, Size};
//! use flipview_testing::TouchRobot;
//!
//! let mut pager: FlipViewPager<usize> = FlipViewPager::new(FlipSettings::default());
//! pager.set_size(Size::new(360.0, 180.0));
//! pager.set_adapter(Box::new(content_provider_fn(3, |i, _| i)), 0, 0, 6);
//!
//! let mut robot = TouchRobot::new();
//! robot.swipe(&mut pager, 300.0, 60.0, 90.0, 8);
//! ```

use flipview::{
    FlipViewPager, Point, PointerId, PointerSample, TouchAction, TouchEvent, TouchResponse,
};

const PRIMARY: PointerId = 0;
const SECONDARY: PointerId = 1;

#[derive(Clone, Debug)]
pub struct TouchRobot {
    time_ms: i64,
    step_ms: i64,
    raw_offset: Point,
    events: Vec<TouchEvent>,
}

impl Default for TouchRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRobot {
    /// A robot that advances 16ms between events.
    pub fn new() -> Self {
        Self {
            time_ms: 0,
            step_ms: 16,
            raw_offset: Point::ZERO,
            events: Vec::new(),
        }
    }

    /// Offset added to view-local positions to get screen positions.
    pub fn with_raw_offset(mut self, raw_offset: Point) -> Self {
        self.raw_offset = raw_offset;
        self
    }

    pub fn with_step_ms(mut self, step_ms: i64) -> Self {
        self.step_ms = step_ms;
        self
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn advance(&mut self, millis: i64) {
        self.time_ms += millis;
    }

    /// Every event sent so far.
    pub fn events(&self) -> &[TouchEvent] {
        &self.events
    }

    pub fn send<C>(&mut self, pager: &mut FlipViewPager<C>, event: TouchEvent) -> TouchResponse {
        let response = pager.on_touch_event(&event);
        self.events.push(event);
        response
    }

    fn single(&mut self, action: TouchAction, x: f32, y: f32) -> TouchEvent {
        TouchEvent::single(action, PRIMARY, x, y, self.time_ms).with_raw_offset(self.raw_offset)
    }

    pub fn press<C>(&mut self, pager: &mut FlipViewPager<C>, x: f32, y: f32) -> TouchResponse {
        let event = self.single(TouchAction::Down, x, y);
        self.send(pager, event)
    }

    pub fn move_to<C>(&mut self, pager: &mut FlipViewPager<C>, x: f32, y: f32) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.single(TouchAction::Move, x, y);
        self.send(pager, event)
    }

    pub fn release<C>(&mut self, pager: &mut FlipViewPager<C>, x: f32, y: f32) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.single(TouchAction::Up, x, y);
        self.send(pager, event)
    }

    pub fn cancel<C>(&mut self, pager: &mut FlipViewPager<C>, x: f32, y: f32) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.single(TouchAction::Cancel, x, y);
        self.send(pager, event)
    }

    /// Horizontal swipe at height `y` in `steps` evenly spaced moves, then
    /// release. Returns the release response.
    pub fn swipe<C>(
        &mut self,
        pager: &mut FlipViewPager<C>,
        from_x: f32,
        to_x: f32,
        y: f32,
        steps: usize,
    ) -> TouchResponse {
        self.press(pager, from_x, y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(pager, from_x + (to_x - from_x) * t, y);
        }
        self.release(pager, to_x, y)
    }

    /// Down and up at the same spot.
    pub fn tap<C>(&mut self, pager: &mut FlipViewPager<C>, x: f32, y: f32) -> TouchResponse {
        self.press(pager, x, y);
        self.release(pager, x, y)
    }

    /// Puts a second finger down at `secondary` while the first rests at
    /// `primary`.
    pub fn second_pointer_down<C>(
        &mut self,
        pager: &mut FlipViewPager<C>,
        primary: Point,
        secondary: Point,
    ) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.two_pointer_event(TouchAction::PointerDown, primary, secondary);
        self.send(pager, event)
    }

    /// Moves both fingers.
    pub fn move_both<C>(
        &mut self,
        pager: &mut FlipViewPager<C>,
        primary: Point,
        secondary: Point,
    ) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.two_pointer_event(TouchAction::Move, primary, secondary);
        self.send(pager, event.with_action_index(0))
    }

    /// Lifts the second finger, leaving the first down.
    pub fn second_pointer_up<C>(
        &mut self,
        pager: &mut FlipViewPager<C>,
        primary: Point,
        secondary: Point,
    ) -> TouchResponse {
        self.advance(self.step_ms);
        let event = self.two_pointer_event(TouchAction::PointerUp, primary, secondary);
        self.send(pager, event)
    }

    fn two_pointer_event(&self, action: TouchAction, primary: Point, secondary: Point) -> TouchEvent {
        TouchEvent::new(
            action,
            self.time_ms,
            &[
                PointerSample {
                    id: PRIMARY,
                    position: primary,
                },
                PointerSample {
                    id: SECONDARY,
                    position: secondary,
                },
            ],
        )
        .with_action_index(1)
        .with_raw_offset(self.raw_offset)
    }
}
