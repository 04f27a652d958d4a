//! Error types for the site frontend

/// Errors raised by the browser-facing plumbing.
///
/// None of these ever reach the visitor directly: the submission pipeline
/// folds them into a failed outcome and the loading gate degrades to
/// "not visited".
#[derive(Debug, thiserror::Error)]
pub enum SiteAppError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Result type alias for frontend operations
pub type Result<T> = std::result::Result<T, SiteAppError>;
