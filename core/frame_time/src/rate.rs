use std::fmt;

use crate::{
    convert::{self, FrameTime},
    error::FrameRateError,
};

/// A frame rate known to be positive.
///
/// The free functions in [`convert`] accept any rate and leave zero or
/// negative rates undefined. `FrameRate` is the checked entry point for the
/// same conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRate(i64);

impl FrameRate {
    pub fn new(frames_per_time_unit: i64) -> Result<Self, FrameRateError> {
        match frames_per_time_unit {
            0 => {
                log::debug!("rejected frame rate of zero");
                Err(FrameRateError::Zero)
            }
            r if r < 0 => {
                log::debug!("rejected negative frame rate {r}");
                Err(FrameRateError::Negative(r))
            }
            r => Ok(Self(r)),
        }
    }

    #[must_use]
    pub fn frames_per_time_unit(self) -> i64 {
        self.0
    }

    /// Length of one frame in time units.
    #[must_use]
    pub fn frame_duration(self) -> f64 {
        1.0 / self.0 as f64
    }

    #[must_use]
    pub fn time_to_frame<T: FrameTime>(self, time: T) -> i64 {
        convert::time_to_frame(time, self.0)
    }

    #[must_use]
    pub fn frame_to_time(self, frame: i64) -> f64 {
        convert::frame_to_time(frame, self.0)
    }

    #[must_use]
    pub fn snap(self, time: f64) -> f64 {
        convert::snap_time_to_frame(time, self.0)
    }
}

impl TryFrom<i64> for FrameRate {
    type Error = FrameRateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames/unit", self.0)
    }
}
