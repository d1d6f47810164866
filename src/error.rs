use thiserror::Error;

/// Everything that can stop a nonce search short of a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// More leading zero bits were requested than a digest has.
    #[error("difficulty {requested} is out of range, a digest has at most {max} leading zero bits")]
    DifficultyOutOfRange { requested: u64, max: u32 },

    /// The search was interrupted through its [`crate::CancelToken`].
    #[error("search cancelled after {attempts} attempts")]
    Cancelled { attempts: u128 },

    /// Every nonce representable by the counter has been tried.
    #[error("nonce space exhausted")]
    NonceSpaceExhausted,
}

/// Invalid command-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid difficulty {0:?}: expected a non-negative base-10 integer")]
    InvalidDifficulty(String),
}
