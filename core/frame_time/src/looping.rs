/// Wraps `value` into `[0, loop_len)`.
///
/// Values below `loop_len` come back unchanged, negative ones included.
#[must_use]
pub fn loop_time(value: f64, loop_len: f64) -> f64 {
    if value < loop_len {
        if value < 0.0 {
            log::trace!("loop_time: negative value {value} left unwrapped (loop_len {loop_len})");
        }
        return value;
    }

    value - loop_len * (value / loop_len).floor()
}
