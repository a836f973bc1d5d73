//! Method syntax for the conversions, e.g. `beat.snap_to_frame(16)`.

use crate::{convert, looping};

pub trait TimeExt {
    fn to_frame(self, frames_per_time_unit: i64) -> i64;
    fn snap_to_frame(self, frames_per_time_unit: i64) -> f64;
    fn loop_within(self, loop_len: f64) -> f64;
}

impl TimeExt for f64 {
    fn to_frame(self, frames_per_time_unit: i64) -> i64 {
        convert::time_to_frame(self, frames_per_time_unit)
    }

    fn snap_to_frame(self, frames_per_time_unit: i64) -> f64 {
        convert::snap_time_to_frame(self, frames_per_time_unit)
    }

    fn loop_within(self, loop_len: f64) -> f64 {
        looping::loop_time(self, loop_len)
    }
}

pub trait FrameExt {
    fn to_time(self, frames_per_time_unit: i64) -> f64;
}

impl FrameExt for i64 {
    fn to_time(self, frames_per_time_unit: i64) -> f64 {
        convert::frame_to_time(self, frames_per_time_unit)
    }
}
