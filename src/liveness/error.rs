use thiserror::Error;

#[derive(Debug, Error)]
pub enum LivenessError {
    #[error("retention must lie in (0, 1), got {0}")]
    RetentionOutOfRange(f64),

    #[error("prior weight must be at least 1, got {0}")]
    PriorWeightOutOfRange(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
