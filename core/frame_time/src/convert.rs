mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for i64 {}
    impl Sealed for i32 {}
}

/// A time value that can be turned into a frame index.
///
/// Implemented for real-valued times (`f64`, `f32`) and whole times
/// (`i64`, `i32`). Whole times multiply exactly; real times round to the
/// nearest frame, with halves rounding away from zero.
pub trait FrameTime: Copy + sealed::Sealed {
    fn frames_at(self, frames_per_time_unit: i64) -> i64;
}

impl FrameTime for f64 {
    fn frames_at(self, frames_per_time_unit: i64) -> i64 {
        // `as` saturates on overflow and maps NaN to 0
        (self * frames_per_time_unit as f64).round() as i64
    }
}

impl FrameTime for f32 {
    fn frames_at(self, frames_per_time_unit: i64) -> i64 {
        f64::from(self).frames_at(frames_per_time_unit)
    }
}

impl FrameTime for i64 {
    fn frames_at(self, frames_per_time_unit: i64) -> i64 {
        self.saturating_mul(frames_per_time_unit)
    }
}

impl FrameTime for i32 {
    fn frames_at(self, frames_per_time_unit: i64) -> i64 {
        i64::from(self).frames_at(frames_per_time_unit)
    }
}

/// 2^53, the magnitude up to which every integer is an exact `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// The frame index for a given time and frame rate.
///
/// Frame counts outside the `i64` range saturate.
#[must_use]
pub fn time_to_frame<T: FrameTime>(time: T, frames_per_time_unit: i64) -> i64 {
    time.frames_at(frames_per_time_unit)
}

/// The time of a frame, snapped so it lands exactly on the frame grid.
///
/// Frames past 2^53 are not exact as `f64`, so converting back with
/// [`time_to_frame`] recovers `frame` only below that.
#[must_use]
pub fn frame_to_time(frame: i64, frames_per_time_unit: i64) -> f64 {
    snap_time_to_frame(frame as f64 / frames_per_time_unit as f64, frames_per_time_unit)
}

/// Snaps a time to the nearest frame boundary.
///
/// Offsets within a whole time unit come out identical whatever the whole
/// part is. At 16 frames per unit the grid reads
///
/// ```text
/// 1.0, 1.0625, 1.125, ...
/// 2.0, 2.0625, 2.125, ...
/// 9999999.0, 9999999.0625, 9999999.125, ...
/// ```
///
/// Only the frame count after the whole part goes through float arithmetic,
/// so precision does not degrade as the whole part grows.
///
/// Non-finite times and times of magnitude 2^53 or more are returned
/// unchanged. Past 2^53 every `f64` is a whole number and already on the grid.
#[must_use]
pub fn snap_time_to_frame(time: f64, frames_per_time_unit: i64) -> f64 {
    if !time.is_finite() || time.abs() >= EXACT_INTEGER_LIMIT {
        return time;
    }

    let base_time = time.floor() as i64;
    let frames_after_time = if (time * frames_per_time_unit as f64).abs() < EXACT_INTEGER_LIMIT {
        time_to_frame(time, frames_per_time_unit)
            .saturating_sub(time_to_frame(base_time, frames_per_time_unit))
    } else {
        // whole frame counts are no longer exact, round the offset alone
        time_to_frame(time - base_time as f64, frames_per_time_unit)
    };

    base_time as f64 + (1.0 / frames_per_time_unit as f64) * frames_after_time as f64
}

#[cfg(test)]
mod convert_tests {
    use super::*;

    const FRAMES_PER_BEAT: i64 = 16;

    #[test]
    fn test_whole_beat_to_frame() {
        assert_eq!(time_to_frame(1.0, FRAMES_PER_BEAT), 16);
        assert_eq!(time_to_frame(1, FRAMES_PER_BEAT), 16);
        assert_eq!(time_to_frame(3_i32, FRAMES_PER_BEAT), 48);
        assert_eq!(time_to_frame(0.25_f32, FRAMES_PER_BEAT), 4);
    }

    #[test]
    fn test_time_to_frame_rounds_to_nearest() {
        assert_eq!(time_to_frame(0.03, FRAMES_PER_BEAT), 0); // 0.48
        assert_eq!(time_to_frame(0.04, FRAMES_PER_BEAT), 1); // 0.64
        assert_eq!(time_to_frame(0.03125, FRAMES_PER_BEAT), 1); // exactly half a frame
        assert_eq!(time_to_frame(-0.03125, FRAMES_PER_BEAT), -1);
    }

    #[test]
    fn test_frame_to_time() {
        assert_eq!(frame_to_time(16, FRAMES_PER_BEAT), 1.0);
        assert_eq!(frame_to_time(0, FRAMES_PER_BEAT), 0.0);
        assert_eq!(frame_to_time(18, FRAMES_PER_BEAT), 1.125);
        assert_eq!(frame_to_time(-8, FRAMES_PER_BEAT), -0.5);
    }

    #[test]
    fn test_snap_lands_on_grid() {
        assert_eq!(snap_time_to_frame(1.1, FRAMES_PER_BEAT), 1.125);
        assert_eq!(snap_time_to_frame(2.03, FRAMES_PER_BEAT), 2.0);
        assert_eq!(snap_time_to_frame(2.97, FRAMES_PER_BEAT), 3.0);
    }

    #[test]
    fn test_snap_offset_independent_of_base() {
        let near = snap_time_to_frame(5.1, FRAMES_PER_BEAT) - 5.0;
        let far = snap_time_to_frame(1005.1, FRAMES_PER_BEAT) - 1005.0;
        assert_eq!(near, far);
        assert_eq!(near, 0.125);

        let near = snap_time_to_frame(5.03, FRAMES_PER_BEAT) - 5.0;
        let far = snap_time_to_frame(1005.03, FRAMES_PER_BEAT) - 1005.0;
        assert_eq!(near, far);
    }

    #[test]
    fn test_snap_negative_time() {
        // floor(-0.9) = -1, 0.1 beat after it rounds to 2 frames
        assert_eq!(snap_time_to_frame(-0.9, FRAMES_PER_BEAT), -0.875);
    }

    #[test]
    fn test_snap_non_finite_passes_through() {
        assert!(snap_time_to_frame(f64::NAN, FRAMES_PER_BEAT).is_nan());
        assert_eq!(snap_time_to_frame(f64::INFINITY, FRAMES_PER_BEAT), f64::INFINITY);
    }

    #[test]
    fn test_snap_large_time_stays_within_half_a_frame() {
        // 1e15 * 10_000 frames is past i64::MAX
        let time = 1.0e15 + 0.125;
        let snapped = snap_time_to_frame(time, 10_000);
        assert!((snapped - time).abs() <= 0.5 / 10_000.0);
        assert_eq!(snapped, time);

        let snapped = snap_time_to_frame(-time, 10_000);
        assert!((snapped + time).abs() <= 0.5 / 10_000.0);
    }

    #[test]
    fn test_snap_offset_far_from_zero() {
        let near = snap_time_to_frame(5.1, FRAMES_PER_BEAT) - 5.0;
        let far = snap_time_to_frame(1.0e12 + 0.1, FRAMES_PER_BEAT) - 1.0e12;
        assert_eq!(near, far);
    }

    #[test]
    fn test_snap_huge_time_unchanged() {
        assert_eq!(snap_time_to_frame(1e300, FRAMES_PER_BEAT), 1e300);
        assert_eq!(snap_time_to_frame(-1e300, FRAMES_PER_BEAT), -1e300);
        assert_eq!(snap_time_to_frame(EXACT_INTEGER_LIMIT, FRAMES_PER_BEAT), EXACT_INTEGER_LIMIT);
    }

    #[test]
    fn test_frame_to_time_large_frame_round_trip() {
        let frame = 1_i64 << 53;
        assert_eq!(time_to_frame(frame_to_time(frame, FRAMES_PER_BEAT), FRAMES_PER_BEAT), frame);
    }

    #[test]
    fn test_zero_rate_does_not_panic() {
        assert_eq!(time_to_frame(2.5, 0), 0);
        assert!(snap_time_to_frame(2.5, 0).is_nan());
        assert!(frame_to_time(3, 0).is_infinite());
    }
}
