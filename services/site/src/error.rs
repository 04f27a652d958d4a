//! Error types for the site host

/// Errors that can occur while hosting the site
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for site host operations
pub type Result<T> = std::result::Result<T, SiteError>;
