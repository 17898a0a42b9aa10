use thiserror::Error;

#[derive(Error, Debug)]
pub enum LehmerError {
    /// A seed of 0 means the seed has to come from outside the generator.
    /// The caller obtains a positive seed and retries.
    #[error("Seed must be supplied interactively (got 0)")]
    InteractiveSeedRequired,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

pub type LehmerResult<T> = Result<T, LehmerError>;
