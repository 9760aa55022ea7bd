use crate::api::{NewsSumClient, SuggestionClient};
use crate::domain::{NewsArticle, NewsSource, Suggestion};
use crate::errors::NewsSumResult;
use crate::logger::{LogLevel, Logger};
use crate::services::SubscriptionStore;
use crate::storage::traits::KeyValueStore;

/// What a reader front end needs: the two remote clients plus the user's
/// saved preferences.
pub struct ReaderService<S: KeyValueStore> {
    news: NewsSumClient,
    suggestions: SuggestionClient,
    store: SubscriptionStore<S>,
    logger: Logger,
}

impl<S: KeyValueStore> ReaderService<S> {
    pub fn new(
        news: NewsSumClient,
        suggestions: SuggestionClient,
        store: SubscriptionStore<S>,
        logger: Logger,
    ) -> Self {
        Self {
            news,
            suggestions,
            store,
            logger,
        }
    }

    pub fn news(&self) -> &NewsSumClient {
        &self.news
    }

    pub fn suggestions(&self) -> &SuggestionClient {
        &self.suggestions
    }

    pub fn store(&self) -> &SubscriptionStore<S> {
        &self.store
    }

    /// Sources the user subscribed to, in listing order
    pub async fn subscribed_sources(&self) -> NewsSumResult<Vec<NewsSource>> {
        let subs = self.store.subscriptions();
        let sources = self.news.get_sources().await?;

        Ok(sources
            .into_iter()
            .filter(|source| subs.contains(&source.path))
            .collect())
    }

    /// Remember `source_path` as last read, then load its articles
    pub async fn open_source(&self, source_path: &str) -> NewsSumResult<Vec<NewsArticle>> {
        self.store.set_last_read(source_path)?;
        self.news.get_articles(source_path).await
    }

    /// Articles of the last-read source, if there is one
    pub async fn resume(&self) -> NewsSumResult<Option<(String, Vec<NewsArticle>)>> {
        let last = match self.store.get_last_read() {
            Some(last) if !last.is_empty() => last,
            _ => return Ok(None),
        };

        let articles = self.news.get_articles(&last).await?;
        Ok(Some((last, articles)))
    }

    /// Search suggestions, or nothing if the suggestion backend is down
    pub async fn search(&self, query_text: &str) -> NewsSumResult<Vec<Suggestion>> {
        if !self.suggestions.is_available().await {
            self.logger.log(
                "Suggestion service not available, skipping search",
                LogLevel::Warn,
            );
            return Ok(Vec::new());
        }

        self.suggestions.get_suggestions(query_text).await
    }
}
