//! Frame pumping helpers.

use flipview::{FlipCanvas, FlipViewPager};

/// One frame at roughly 60 fps.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Summary of a run of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePump {
    pub frames: usize,
    /// Timestamp to use for the next frame.
    pub next_frame_nanos: u64,
    /// The pager stopped asking for frames.
    pub settled: bool,
}

/// Draws up to `max_frames` frames starting at `start_nanos`, stopping early
/// once the pager no longer needs another frame.
pub fn pump_frames<C>(
    pager: &mut FlipViewPager<C>,
    canvas: &mut dyn FlipCanvas<C>,
    start_nanos: u64,
    max_frames: usize,
) -> FramePump {
    let mut now = start_nanos;
    for frame in 0..max_frames {
        let more = pager.draw(now, canvas);
        now += FRAME_NANOS;
        if !more {
            return FramePump {
                frames: frame + 1,
                next_frame_nanos: now,
                settled: true,
            };
        }
    }
    FramePump {
        frames: max_frames,
        next_frame_nanos: now,
        settled: false,
    }
}

/// Pumps for at most five seconds of frames.
pub fn pump_until_settled<C>(
    pager: &mut FlipViewPager<C>,
    canvas: &mut dyn FlipCanvas<C>,
    start_nanos: u64,
) -> FramePump {
    pump_frames(pager, canvas, start_nanos, 300)
}
