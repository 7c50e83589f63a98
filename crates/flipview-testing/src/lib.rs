//! Testing utilities and harness for the flip view engine

pub mod canvas;
pub mod frames;
pub mod robot;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use frames::{pump_frames, pump_until_settled, FramePump, FRAME_NANOS};
pub use robot::TouchRobot;

pub mod prelude {
    pub use crate::canvas::{DrawCommand, RecordingCanvas};
    pub use crate::frames::*;
    pub use crate::robot::TouchRobot;
}
