use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open the window: {0}")]
    Window(#[from] eframe::Error),
    #[error("unknown variant `{0}` (expected `quads` or `texture`)")]
    UnknownVariant(String),
    #[error("seed must be an unsigned integer, got `{0}`")]
    InvalidSeed(String),
    #[error("grid side must be at least 3, got {0}")]
    SideTooSmall(usize),
    #[error("fill ratio must lie in [0, 1], got {0}")]
    InvalidFillRatio(f64),
    #[error("tick period must be positive")]
    ZeroTickPeriod,
}
