//! HTTP clients for the news and suggestion backends.

pub mod news;
pub mod suggestions;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::{FetchFailure, NewsSumError, NewsSumResult};
use crate::logger::{LogLevel, Logger};

pub use news::NewsSumClient;
pub use suggestions::SuggestionClient;

pub(crate) fn build_client(timeout: Option<Duration>) -> NewsSumResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| NewsSumError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Turn a response into a decoded body, or the reason it could not be.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchFailure> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Status failures are logged on one line; exceptions log the context
/// first and then the error message.
pub(crate) fn log_failure(logger: &Logger, context: &str, failure: &FetchFailure) {
    match failure {
        FetchFailure::Status { status, reason } => {
            logger.log(&format!("{} {}: {}", context, status, reason), LogLevel::Warn);
        }
        FetchFailure::Transport(_) | FetchFailure::Decode(_) => {
            logger.log(&format!("{}: ", context), LogLevel::Error);
            logger.log(&failure.to_string(), LogLevel::Error);
        }
    }
}
