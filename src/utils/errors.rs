use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickminError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    #[allow(dead_code)] // Future error handling
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    #[allow(dead_code)] // Future error handling
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuickminError>;

impl From<regex::Error> for QuickminError {
    fn from(err: regex::Error) -> Self {
        QuickminError::Other(format!("Regex error: {}", err))
    }
}

impl From<anyhow::Error> for QuickminError {
    fn from(err: anyhow::Error) -> Self {
        QuickminError::Other(err.to_string())
    }
}
