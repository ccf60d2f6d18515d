#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoadError {
    /// Missing sources get the sample catalog, anything else an empty one
    pub fn is_missing_source(&self) -> bool {
        matches!(self, LoadError::FileNotFound(_))
    }
}
