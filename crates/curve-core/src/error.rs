use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Control point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid control point: {0}")]
    InvalidPoint(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;
