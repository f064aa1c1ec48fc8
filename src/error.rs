use thiserror::Error;

/// Main error type for the filter engine
#[derive(Error, Debug)]
pub enum FilterEngineError {
    /// Listing store errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset violates a listing invariant
    #[error("Invalid listing '{listing_id}': {message}")]
    InvalidListing { listing_id: String, message: String },

    /// Category name not recognised
    #[error("Unknown listing category: {0}")]
    UnknownCategory(String),

    /// Remote intent classifier errors
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FilterEngineError {
    fn from(s: String) -> Self {
        FilterEngineError::Other(s)
    }
}

impl From<&str> for FilterEngineError {
    fn from(s: &str) -> Self {
        FilterEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FilterEngineError>;
