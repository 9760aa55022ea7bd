use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::{build_client, log_failure, read_json};
use crate::config::{Config, Endpoints};
use crate::domain::Suggestion;
use crate::errors::{FetchFailure, NewsSumError, NewsSumResult};
use crate::logger::{LogLevel, Logger};

#[derive(Debug, Serialize)]
struct SearchPayload<'a> {
    query_str: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Suggestion>,
}

/// Client for the suggestion search backend. Its origin does not depend
/// on the build mode.
pub struct SuggestionClient {
    url: String,
    client: Client,
    logger: Logger,
}

impl SuggestionClient {
    pub fn new(endpoints: &Endpoints, logger: Logger) -> NewsSumResult<Self> {
        Ok(Self::with_client(endpoints, logger, build_client(None)?))
    }

    pub fn from_config(config: &Config) -> NewsSumResult<Self> {
        Ok(Self::with_client(
            &config.endpoints,
            Logger::new(config.mode),
            build_client(config.request_timeout)?,
        ))
    }

    pub fn with_client(endpoints: &Endpoints, logger: Logger, client: Client) -> Self {
        Self {
            url: endpoints.suggestions_url.trim_end_matches('/').to_string(),
            client,
            logger,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.url
    }

    /// Liveness check. Any failure reads as "not available".
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.url);

        let request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");

        match request.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                self.logger.log(
                    &format!("Suggestion service unavailable: {}", response.status()),
                    LogLevel::Warn,
                );
                false
            }
            Err(e) => {
                self.logger.log("Failed to fetch suggestions: ", LogLevel::Error);
                self.logger.log(&e.to_string(), LogLevel::Error);
                false
            }
        }
    }

    /// Search for suggestions matching free text
    pub async fn get_suggestions(&self, query_text: &str) -> NewsSumResult<Vec<Suggestion>> {
        match self.search(query_text).await {
            Ok(response) => Ok(response.results),
            Err(failure) => {
                log_failure(&self.logger, "Failed to fetch suggestions", &failure);
                Err(NewsSumError::SuggestionsFetchFailed(failure))
            }
        }
    }

    async fn search(&self, query_text: &str) -> Result<SearchResponse, FetchFailure> {
        let payload = SearchPayload {
            query_str: query_text,
        };

        let response = self
            .client
            .post(format!("{}/search", self.url))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        read_json(response).await
    }
}
