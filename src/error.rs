use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SensorError {
    #[error("Tool invocation error: {0}")]
    ToolInvocation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error {0}")]
    Io(io::ErrorKind),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<io::Error> for SensorError {
    fn from(err: io::Error) -> Self {
        SensorError::Io(err.kind())
    }
}

impl From<serde_yaml::Error> for SensorError {
    fn from(err: serde_yaml::Error) -> Self {
        SensorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SensorError>;
