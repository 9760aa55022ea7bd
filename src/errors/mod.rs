use thiserror::Error;

/// Underlying cause of a failed remote call.
///
/// Kept for diagnostics only; callers should branch on the
/// [`NewsSumError`] variant, not on this.
#[derive(Error, Debug)]
pub enum FetchFailure {
    #[error("{status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum NewsSumError {
    // Remote errors; the message is fixed per operation
    #[error("Failed to retrieve news sources")]
    SourcesFetchFailed(#[source] FetchFailure),

    #[error("Failed to load content")]
    ArticlesFetchFailed(#[source] FetchFailure),

    #[error("Failed to retrieve app properties")]
    AppPropertiesFetchFailed(#[source] FetchFailure),

    #[error("Failed to retrieve suggestions")]
    SuggestionsFetchFailed(#[source] FetchFailure),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type NewsSumResult<T> = Result<T, NewsSumError>;
