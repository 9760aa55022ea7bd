pub mod source;
pub mod article;
pub mod suggestion;

use std::collections::HashMap;

pub use source::NewsSource;
pub use article::NewsArticle;
pub use suggestion::Suggestion;

/// Backend-reported metadata such as version information.
pub type AppProperties = HashMap<String, String>;
