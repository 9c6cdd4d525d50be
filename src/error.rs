use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encoding error: expected {expected} bits, got {actual}")]
    Encoding { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, GaError>;
