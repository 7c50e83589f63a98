//! The flip view widget.
//!
//! [`FlipViewPager`] ties the pieces together: touch events go through the
//! gesture detector and move the flip position, the scroller drives settle
//! animations frame by frame, every page index change refills the three
//! slots from the page cache, and each frame composes a [`FlipScene`] onto
//! the host canvas.

use crate::close::CloseHandle;
use crate::layout::FlipLayout;
use crate::render::{FlipCanvas, FlipScene};
use crate::settings::FlipSettings;
use crate::tap::{TapPolicy, TapTarget};
use flipview_animation::{FlipScroller, OverscrollEdges};
use flipview_foundation::{
    ContentProvider, DistanceChange, FlipGestureDetector, FlipPosition, GestureOutcome, PageCache,
    PageSlot, PageWindow, SlotKind, TouchEvent,
};
use flipview_ui_graphics::Size;

/// Called with the settled page on every frame drawn while settled.
pub type OnChangePageListener = Box<dyn FnMut(usize)>;

/// How the widget handled one touch event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TouchResponse {
    /// The widget used the event; when false the host may dispatch it
    /// elsewhere.
    pub consumed: bool,
    /// A hosting scroll container must stop intercepting this gesture.
    pub disallow_intercept: bool,
    /// A tap the host should deliver.
    pub tap: Option<TapTarget>,
}

pub struct FlipViewPager<C> {
    settings: FlipSettings,
    layout: FlipLayout,
    position: FlipPosition,
    cache: PageCache<C>,
    scroller: FlipScroller,
    edges: OverscrollEdges,
    detector: FlipGestureDetector,
    tap_policy: TapPolicy,
    row: usize,
    max_items: usize,
    on_change_page: Option<OnChangePageListener>,
    close: CloseHandle,
    dirty: bool,
}

impl<C> FlipViewPager<C> {
    pub fn new(settings: FlipSettings) -> Self {
        let position = FlipPosition::new(settings.page_unit);
        let scroller = FlipScroller::with_easing(settings.flip_easing);
        let detector = FlipGestureDetector::new(settings.touch_slop, settings.max_fling_velocity);
        Self {
            settings,
            layout: FlipLayout::default(),
            position,
            cache: PageCache::new(),
            scroller,
            edges: OverscrollEdges::new(),
            detector,
            tap_policy: TapPolicy::default(),
            row: 0,
            max_items: 0,
            on_change_page: None,
            close: CloseHandle::new(),
            dirty: false,
        }
    }

    pub fn settings(&self) -> &FlipSettings {
        &self.settings
    }

    pub fn set_tap_policy(&mut self, policy: TapPolicy) {
        self.tap_policy = policy;
    }

    pub fn tap_policy(&self) -> TapPolicy {
        self.tap_policy
    }

    /// Rebuilds the layout for a new view size.
    pub fn set_size(&mut self, size: Size) {
        if self.layout.size != size {
            self.layout = FlipLayout::new(size);
            self.dirty = true;
        }
    }

    pub fn layout(&self) -> &FlipLayout {
        &self.layout
    }

    /// Binds new content and jumps to `active_page` on the next frame.
    ///
    /// `row` and `max_items` locate this view within a merged list and only
    /// matter for tap routing.
    pub fn set_adapter(
        &mut self,
        provider: Box<dyn ContentProvider<Content = C>>,
        active_page: usize,
        row: usize,
        max_items: usize,
    ) {
        self.detector.cancel();
        self.edges = OverscrollEdges::new();

        let count = self.cache.bind(provider);
        self.row = row;
        self.max_items = max_items;
        self.position.reset(count);
        self.apply_distance(0.0);

        match self.position.clamp_page(active_page as i64) {
            Some(page) => {
                let delta = self.position.page_distance(page) - self.position.distance();
                self.scroller.start_scroll(self.position.distance(), delta, 0);
            }
            None => self.scroller.abort(),
        }
        log::debug!("row {row} bound with {count} pages, active page {active_page}");
        self.dirty = true;
    }

    /// Settles on `page`, clamped into range, with a distance-scaled
    /// animation.
    pub fn flip_to_page(&mut self, page: i64) {
        let Some(target) = self.position.clamp_page(page) else {
            log::debug!("flip to page {page} ignored, nothing bound");
            return;
        };
        self.detector.cancel();
        // A flip ends any drag, including one pulling an edge.
        self.edges.release();
        self.position.set_overscrolled(false);

        let start = self.position.distance();
        let delta = self.position.page_distance(target) - start;
        let duration = FlipScroller::duration_for(
            delta,
            self.position.page_unit(),
            self.settings.flip_base_duration_ms,
        );
        self.scroller.start_scroll(start, delta, duration);
        log::debug!("flip to page {target} over {duration}ms");
        self.dirty = true;
    }

    pub fn set_on_change_page_listener(&mut self, listener: OnChangePageListener) {
        self.on_change_page = Some(listener);
    }

    pub fn clear_on_change_page_listener(&mut self) {
        self.on_change_page = None;
    }

    /// Handle content can use to send this view back to the default page.
    pub fn close_handle(&self) -> CloseHandle {
        self.close.clone()
    }

    pub fn on_touch_event(&mut self, event: &TouchEvent) -> TouchResponse {
        let animating = !self.scroller.is_finished();
        let outcome = self.detector.on_touch_event(event, animating);

        let mut response = TouchResponse {
            consumed: true,
            ..TouchResponse::default()
        };
        match outcome {
            GestureOutcome::Ignored => response.consumed = false,
            GestureOutcome::Tracking | GestureOutcome::Reset => {}
            GestureOutcome::DragStarted => {
                self.scroller.abort();
                self.dirty = true;
            }
            GestureOutcome::DragBy { delta_px } => self.drag_by(delta_px),
            GestureOutcome::Released { velocity } => self.release(velocity),
            GestureOutcome::Tap { position, .. } => {
                let current = self.current_page();
                response.consumed = false;
                response.tap = Some(self.tap_policy.route(
                    position,
                    current,
                    self.row,
                    self.max_items,
                    &self.layout,
                ));
            }
        }
        response.disallow_intercept = self.detector.is_dragging();
        response
    }

    fn drag_by(&mut self, delta_px: f32) {
        let width = self.layout.width();
        if width <= 0.0 || !width.is_finite() {
            log::warn!("drag of {delta_px}px ignored, view has no width");
            return;
        }
        if self.position.page_count() == 0 {
            return;
        }

        let delta = delta_px * self.position.page_unit() / width;
        let (clamped, excess) = self
            .position
            .clamp_with_excess(self.position.distance() + delta);
        if excess != 0.0 {
            self.edges.pull(excess, width);
            self.position.set_overscrolled(true);
        } else {
            self.position.set_overscrolled(false);
        }
        self.apply_distance(clamped);
    }

    fn release(&mut self, velocity: f32) {
        let target = self
            .position
            .target_for_release(velocity, self.settings.min_fling_velocity);
        log::debug!("released at {velocity}px/s, settling on {target:?}");
        if let Some(target) = target {
            self.flip_to_page(target as i64);
        }
        self.edges.release();
        self.position.set_overscrolled(false);
        self.dirty = true;
    }

    fn apply_distance(&mut self, distance: f32) {
        match self.position.set_distance(distance) {
            DistanceChange::PageChanged(window) => {
                self.cache.refill(&window);
                self.dirty = true;
            }
            DistanceChange::Moved => self.dirty = true,
            DistanceChange::Unchanged => {}
        }
    }

    /// Advances animations to `frame_time_nanos` and draws one frame.
    ///
    /// Returns whether the host should schedule another frame.
    pub fn draw(&mut self, frame_time_nanos: u64, canvas: &mut dyn FlipCanvas<C>) -> bool {
        if self.close.take_request() {
            self.flip_to_page(self.settings.default_page as i64);
        }
        if !self.scroller.is_finished() && self.scroller.compute_scroll_offset(frame_time_nanos) {
            self.apply_distance(self.scroller.current());
        }

        let scene = self.scene();
        if scene.is_settled() {
            self.notify_settled();
        }

        let edges_active = self.edges.step(frame_time_nanos);
        let scene = scene.with_edge(self.edges.glow());
        let cache = &self.cache;
        scene.paint(&self.layout, canvas, |page| cache.content(page));

        self.dirty = false;
        edges_active || !self.scroller.is_finished()
    }

    /// The frame the current state describes, without edge glow.
    pub fn scene(&self) -> FlipScene {
        let window = self
            .position
            .window()
            .unwrap_or_else(|| PageWindow::around(0, 0));
        FlipScene::compose(
            self.position.distance(),
            self.position.page_unit(),
            &window,
            &self.layout,
            self.settings.shade_max_alpha,
            self.is_moving(),
        )
    }

    fn notify_settled(&mut self) {
        let Some(page) = self.current_page() else {
            return;
        };
        if let Some(listener) = self.on_change_page.as_mut() {
            listener(page);
        }
    }

    /// True while something changed since the last frame or an animation
    /// still needs frames.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
            || !self.scroller.is_finished()
            || self.edges.is_active()
            || self.close.is_requested()
    }

    pub fn is_moving(&self) -> bool {
        self.detector.is_dragging() || !self.scroller.is_finished()
    }

    pub fn is_dragging(&self) -> bool {
        self.detector.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    pub fn is_overscrolled(&self) -> bool {
        self.position.is_overscrolled()
    }

    pub fn edges(&self) -> &OverscrollEdges {
        &self.edges
    }

    /// The page in the current slot, if any.
    pub fn current_page(&self) -> Option<usize> {
        self.position
            .current_page()
            .and_then(|index| usize::try_from(index).ok())
            .filter(|page| *page < self.position.page_count())
    }

    pub fn page_count(&self) -> usize {
        self.position.page_count()
    }

    pub fn distance(&self) -> f32 {
        self.position.distance()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn slot(&self, kind: SlotKind) -> &PageSlot<C> {
        self.cache.slot(kind)
    }

    pub fn content(&self, page: usize) -> Option<&C> {
        self.cache.content(page)
    }

    /// Number of pages whose content has been built.
    pub fn materialized_pages(&self) -> usize {
        self.cache.materialized()
    }
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;
