use crate::{error::FrameRateError, rate::FrameRate};

/// Note grids for beat-based time, with a quarter note as the beat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Subdivision {
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    #[default]
    SixtyFourth,
    Custom(u32),
}

impl Subdivision {
    #[must_use]
    pub fn frames_per_beat(self) -> i64 {
        match self {
            Self::Quarter => 1,
            Self::Eighth => 2,
            Self::Sixteenth => 4,
            Self::ThirtySecond => 8,
            Self::SixtyFourth => 16,
            Self::Custom(val) => i64::from(val),
        }
    }

    /// Fails only for `Custom(0)`.
    pub fn frame_rate(self) -> Result<FrameRate, FrameRateError> {
        FrameRate::new(self.frames_per_beat())
    }
}
