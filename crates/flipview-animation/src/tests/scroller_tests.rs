use super::*;

const FRAME_NANOS: u64 = 16_666_667;

#[test]
fn duration_scales_with_square_root_of_pages() {
    assert_eq!(FlipScroller::duration_for(180.0, 180.0, 300), 300);
    assert_eq!(FlipScroller::duration_for(360.0, 180.0, 300), 424);
    assert_eq!(FlipScroller::duration_for(-360.0, 180.0, 300), 424);
    assert_eq!(FlipScroller::duration_for(0.0, 180.0, 300), 0);
}

#[test]
fn duration_guards_degenerate_page_unit() {
    assert_eq!(FlipScroller::duration_for(360.0, 0.0, 300), 0);
    assert_eq!(FlipScroller::duration_for(f32::NAN, 180.0, 300), 0);
}

#[test]
fn idle_scroller_reports_finished() {
    let mut scroller = FlipScroller::new();
    assert!(scroller.is_finished());
    assert!(!scroller.compute_scroll_offset(0));
}

#[test]
fn linear_scroll_reaches_exact_final_value() {
    let mut scroller = FlipScroller::new();
    let duration = FlipScroller::duration_for(360.0, 180.0, 300);
    scroller.start_scroll(0.0, 360.0, duration);

    let mut time = 1_000 * FRAME_NANOS;
    let mut samples = Vec::new();
    while scroller.compute_scroll_offset(time) {
        samples.push(scroller.current());
        time += FRAME_NANOS;
    }

    assert_eq!(samples.first().copied(), Some(0.0));
    assert_eq!(samples.last().copied(), Some(360.0));
    assert!(samples.windows(2).all(|pair| pair[1] >= pair[0]));
    // 424ms at ~16.7ms per frame, plus the latch frame.
    assert_eq!(samples.len(), 27);
}

#[test]
fn linear_midpoint_is_half_the_delta() {
    let mut scroller = FlipScroller::new();
    scroller.start_scroll(180.0, -180.0, 300);
    assert!(scroller.compute_scroll_offset(0));
    assert!(scroller.compute_scroll_offset(150 * NANOS_PER_MILLI));
    assert!((scroller.current() - 90.0).abs() < 1e-3);
}

#[test]
fn zero_duration_lands_on_first_frame() {
    let mut scroller = FlipScroller::new();
    scroller.start_scroll(0.0, 180.0, 0);
    assert!(scroller.compute_scroll_offset(5));
    assert!(scroller.is_finished());
    assert_eq!(scroller.current(), 180.0);
}

#[test]
fn abort_keeps_last_interpolated_value() {
    let mut scroller = FlipScroller::new();
    scroller.start_scroll(0.0, 180.0, 300);
    scroller.compute_scroll_offset(0);
    scroller.compute_scroll_offset(100 * NANOS_PER_MILLI);
    let mid = scroller.current();

    scroller.abort();

    assert!(scroller.is_finished());
    assert_eq!(scroller.current(), mid);
    assert!(!scroller.compute_scroll_offset(200 * NANOS_PER_MILLI));
}

#[test]
fn restart_replaces_scroll_in_flight() {
    let mut scroller = FlipScroller::new();
    scroller.start_scroll(0.0, 360.0, 424);
    scroller.compute_scroll_offset(0);
    scroller.compute_scroll_offset(100 * NANOS_PER_MILLI);
    let resumed_from = scroller.current();

    scroller.start_scroll(resumed_from, -resumed_from, 100);
    assert_eq!(scroller.start(), resumed_from);
    scroller.compute_scroll_offset(101 * NANOS_PER_MILLI);
    scroller.compute_scroll_offset(201 * NANOS_PER_MILLI);
    assert_eq!(scroller.current(), 0.0);
}

#[test]
fn eased_scroll_still_ends_on_target() {
    let mut scroller = FlipScroller::with_easing(Easing::FastOutSlowInEasing);
    scroller.start_scroll(0.0, 180.0, 300);
    scroller.compute_scroll_offset(0);
    scroller.compute_scroll_offset(150 * NANOS_PER_MILLI);
    assert!(scroller.current() > 90.0);
    scroller.compute_scroll_offset(300 * NANOS_PER_MILLI);
    assert_eq!(scroller.current(), 180.0);
}
