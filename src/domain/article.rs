use serde::{Deserialize, Deserializer, Serialize};

use super::Suggestion;

/// The backend sends `null` abstracts and title-only section headers.
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub url: String,
    #[serde(rename = "abstract", default, deserialize_with = "deserialize_null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl NewsArticle {
    pub fn new(title: String, url: String) -> Self {
        Self {
            title,
            url,
            summary: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    /// Section headers carry a title but no link.
    pub fn is_section(&self) -> bool {
        self.url.is_empty()
    }
}
