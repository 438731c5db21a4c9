use thiserror::Error;

/// Result type for the fallible edges of the engine (storage and config).
pub type DrillResult<T> = Result<T, DrillError>;

/// Errors raised by storage backends and configuration parsing.
///
/// Nothing in the game flow itself returns these: the high-score store and
/// the date resolver log them and fall back to defaults.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Storage(#[from] std::io::Error),

    /// A JSON document could not be parsed or produced.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store is not usable at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A configuration value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
