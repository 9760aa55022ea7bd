use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{build_client, log_failure, read_json};
use crate::config::{Config, Endpoints};
use crate::domain::{source, AppProperties, NewsArticle, NewsSource};
use crate::errors::{FetchFailure, NewsSumError, NewsSumResult};
use crate::logger::Logger;

/// Client for the news aggregation backend.
///
/// The base URL is fixed at construction from [`Endpoints`], so the same
/// code talks to the dev server or the production origin depending only
/// on how the host application built it.
pub struct NewsSumClient {
    url: String,
    client: Client,
    logger: Logger,
}

impl NewsSumClient {
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
            url: endpoints.news_url.trim_end_matches('/').to_string(),
            client,
            logger,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchFailure> {
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    /// List all sources, sorted by description
    pub async fn get_sources(&self) -> NewsSumResult<Vec<NewsSource>> {
        let url = format!("{}/list", self.url);

        match self.fetch::<Vec<NewsSource>>(&url).await {
            Ok(mut sources) => {
                source::sort_by_desc(&mut sources);
                Ok(sources)
            }
            Err(failure) => {
                log_failure(&self.logger, "Failed to fetch news sources", &failure);
                Err(NewsSumError::SourcesFetchFailed(failure))
            }
        }
    }

    /// Fetch the articles of one source in server order
    pub async fn get_articles(&self, source_path: &str) -> NewsSumResult<Vec<NewsArticle>> {
        let url = format!("{}/{}", self.url, source_path.trim_start_matches('/'));

        match self.fetch::<Vec<NewsArticle>>(&url).await {
            Ok(articles) => Ok(articles),
            Err(failure) => {
                let context = format!("Failed to fetch articles from {}", source_path);
                log_failure(&self.logger, &context, &failure);
                Err(NewsSumError::ArticlesFetchFailed(failure))
            }
        }
    }

    /// Fetch backend version/about information
    pub async fn get_app_properties(&self) -> NewsSumResult<AppProperties> {
        let url = format!("{}/about", self.url);

        match self.fetch::<AppProperties>(&url).await {
            Ok(properties) => Ok(properties),
            Err(failure) => {
                log_failure(&self.logger, "Failed to fetch app properties", &failure);
                Err(NewsSumError::AppPropertiesFetchFailed(failure))
            }
        }
    }
}
