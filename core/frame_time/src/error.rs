use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameRateError {
    #[error("frame rate must be non-zero")]
    Zero,
    #[error("frame rate must be positive, got {0}")]
    Negative(i64),
}
