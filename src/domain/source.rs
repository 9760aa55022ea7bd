use serde::{Deserialize, Serialize};

/// A subscribable feed as listed by the news backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    pub path: String,
    pub desc: String,
}

impl NewsSource {
    pub fn new(path: &str, desc: &str) -> Self {
        Self {
            path: path.to_string(),
            desc: desc.to_string(),
        }
    }
}

/// Sort sources ascending by label, comparing the raw strings.
pub fn sort_by_desc(sources: &mut [NewsSource]) {
    sources.sort_by(|a, b| a.desc.cmp(&b.desc));
}
