//! Drives a flip view over the friends list with scripted touches and logs
//! every frame. Run with `RUST_LOG=trace` to see the individual draw calls.

mod canvas;
mod friends;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use canvas::LoggingCanvas;
use flipview::{
    FlipListAdapter, FlipSettings, FlipViewPager, PageStateStore, Size, TapTarget, TouchAction,
    TouchEvent, TouchResponse,
};
use friends::{friends, Card, Friend, FriendCards};
use web_time::Instant;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 240;

struct Host {
    pager: FlipViewPager<Card>,
    canvas: LoggingCanvas,
    started: Instant,
}

impl Host {
    fn new(size: Size) -> Self {
        let mut pager = FlipViewPager::new(FlipSettings::default());
        pager.set_size(size);
        Self {
            pager,
            canvas: LoggingCanvas::default(),
            started: Instant::now(),
        }
    }

    fn now_nanos(&self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }

    fn now_millis(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    /// Draws frames until the pager stops asking for them.
    fn run_frames(&mut self) -> usize {
        let mut frames = 0;
        while frames < MAX_FRAMES {
            self.canvas.begin_frame();
            let more = self.pager.draw(self.now_nanos(), &mut self.canvas);
            frames += 1;
            if !more && !self.pager.needs_redraw() {
                break;
            }
            thread::sleep(FRAME);
        }
        log::info!(
            "settled on page {:?} after {frames} frames: {}",
            self.pager.current_page(),
            self.canvas.last_frame.join("; ")
        );
        frames
    }

    fn touch(&mut self, action: TouchAction, x: f32, y: f32) -> TouchResponse {
        let event = TouchEvent::single(action, 0, x, y, self.now_millis());
        self.pager.on_touch_event(&event)
    }

    fn swipe(&mut self, from_x: f32, to_x: f32, y: f32, steps: usize) -> TouchResponse {
        self.touch(TouchAction::Down, from_x, y);
        for step in 1..=steps {
            thread::sleep(FRAME);
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.touch(TouchAction::Move, x, y);
            if self.pager.needs_redraw() {
                self.canvas.begin_frame();
                self.pager.draw(self.now_nanos(), &mut self.canvas);
            }
        }
        self.touch(TouchAction::Up, to_x, y)
    }

    fn tap(&mut self, x: f32, y: f32) -> Option<TapTarget> {
        self.touch(TouchAction::Down, x, y);
        thread::sleep(FRAME);
        self.touch(TouchAction::Up, x, y).tap
    }
}

fn expect_page(host: &Host, page: usize) -> anyhow::Result<()> {
    match host.pager.current_page() {
        Some(current) if current == page => Ok(()),
        other => bail!("expected page {page}, pager is on {other:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = FlipSettings::builder()
        .flip_base_duration_ms(300)
        .build()
        .context("flip settings")?;
    let adapter = FlipListAdapter::new(friends(), FriendCards::default(), settings);
    log::info!(
        "{} friends in {} rows",
        adapter.item_count(),
        adapter.row_count()
    );

    let mut host = Host::new(Size::new(360.0, 180.0));
    adapter.bind_row(0, &mut host.pager)?;
    host.run_frames();
    expect_page(&host, 1)?;

    // The merge page picks a friend from the tapped half.
    if let Some(TapTarget::Item(index)) = host.tap(90.0, 90.0) {
        let friend: &Friend = &adapter.items()[index];
        log::info!("selected {}", friend.nickname);
    }

    log::info!("swiping back to the first friend's interests");
    host.swipe(100.0, 220.0, 90.0, 6);
    host.run_frames();
    expect_page(&host, 0)?;

    log::info!("tapping the interests card closes it");
    if let Some(TapTarget::Content { position }) = host.tap(180.0, 90.0) {
        log::debug!("content tap at {position:?}");
        adapter.binder().borrow().close_current();
    }
    host.run_frames();
    expect_page(&host, 1)?;

    log::info!("flinging to the second friend's interests");
    host.swipe(300.0, 60.0, 90.0, 3);
    host.run_frames();
    expect_page(&host, 2)?;

    log::info!("pulling past the last page");
    host.swipe(300.0, 40.0, 90.0, 10);
    if host.pager.edges().glow().is_some() {
        log::info!("edge glow is showing");
    }
    host.run_frames();

    log::info!("recycling the view through row 3 and back to row 0");
    adapter.bind_row(3, &mut host.pager)?;
    host.run_frames();
    expect_page(&host, 1)?;
    adapter.bind_row(0, &mut host.pager)?;
    host.run_frames();
    expect_page(&host, 2)?;

    if let Err(err) = adapter.bind_row(adapter.row_count(), &mut host.pager) {
        log::warn!("{err}");
    }

    let states = adapter.page_states();
    let json = states.borrow().to_json()?;
    log::info!(
        "row 0 remembers page {}; saved state {json}",
        states.borrow_mut().page_for_row(0)
    );

    let binder = adapter.binder().borrow();
    log::info!(
        "built {} cards, rebound {} recycled ones, {} draw calls",
        binder.built,
        binder.reused,
        host.canvas.commands
    );
    Ok(())
}
