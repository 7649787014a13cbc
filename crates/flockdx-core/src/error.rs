use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown bird type: {0} (expected \"broiler\" or \"layer\")")]
    UnknownBirdType(String),

    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
