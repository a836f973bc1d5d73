//! Conversions between continuous time and frame indices at a fixed frame
//! rate, plus wrapping of time values into a loop.

pub mod convert;
pub mod error;
pub mod ext;
pub mod looping;
pub mod rate;
pub mod subdivision;

pub use convert::{FrameTime, frame_to_time, snap_time_to_frame, time_to_frame};
pub use error::FrameRateError;
pub use ext::{FrameExt, TimeExt};
pub use looping::loop_time;
pub use rate::FrameRate;
pub use subdivision::Subdivision;
