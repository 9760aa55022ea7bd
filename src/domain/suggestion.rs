use serde::{Deserialize, Serialize};

/// Related search hit, passed through exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion(pub serde_json::Value);

impl Suggestion {
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Best-effort label for display; the backend does not promise a shape.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(|v| v.as_str())
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(|v| v.as_str())
    }
}
