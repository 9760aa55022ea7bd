use std::time::Duration;

use url::Url;

use crate::errors::{NewsSumError, NewsSumResult};

pub const PRODUCTION_NEWS_URL: &str = "https://news-sum.appspot.com";
pub const DEVELOPMENT_NEWS_URL: &str = "http://localhost:8080";
pub const SUGGESTIONS_URL: &str = "https://news-sum-sug.uc.r.appspot.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

/// Debug builds default to development, release builds to production.
impl Default for BuildMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(format!("Unknown build mode: {}", s)),
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Origins of the two remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub news_url: String,
    pub suggestions_url: String,
}

impl Endpoints {
    pub fn new(news_url: &str, suggestions_url: &str) -> NewsSumResult<Self> {
        Ok(Self {
            news_url: normalize_origin(news_url)?,
            suggestions_url: normalize_origin(suggestions_url)?,
        })
    }

    /// Resolve the news origin for a build mode. The suggestion origin
    /// is the same in every mode.
    pub fn for_mode(mode: BuildMode) -> Self {
        let news_url = match mode {
            BuildMode::Development => DEVELOPMENT_NEWS_URL,
            BuildMode::Production => PRODUCTION_NEWS_URL,
        };

        Self {
            news_url: news_url.to_string(),
            suggestions_url: SUGGESTIONS_URL.to_string(),
        }
    }
}

fn normalize_origin(raw: &str) -> NewsSumResult<String> {
    let parsed = Url::parse(raw).map_err(|e| NewsSumError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(NewsSumError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            raw,
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: BuildMode,
    pub endpoints: Endpoints,
    pub db_path: String,
    pub origin: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsSumResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let mode = match std::env::var("NEWSSUM_MODE") {
            Ok(raw) => raw.parse::<BuildMode>().map_err(NewsSumError::Config)?,
            Err(_) => BuildMode::default(),
        };

        let dev_url =
            std::env::var("NEWSSUM_DEV_URL").unwrap_or_else(|_| DEVELOPMENT_NEWS_URL.to_string());
        let prod_url =
            std::env::var("NEWSSUM_PROD_URL").unwrap_or_else(|_| PRODUCTION_NEWS_URL.to_string());
        let suggestions_url = std::env::var("NEWSSUM_SUGGESTIONS_URL")
            .unwrap_or_else(|_| SUGGESTIONS_URL.to_string());

        let news_url = match mode {
            BuildMode::Development => dev_url,
            BuildMode::Production => prod_url,
        };
        let endpoints = Endpoints::new(&news_url, &suggestions_url)?;

        // Default db_path is relative to executable directory
        let db_path = std::env::var("NEWSSUM_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("newssum.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./newssum.db".to_string())
        });

        let origin =
            std::env::var("NEWSSUM_ORIGIN").unwrap_or_else(|_| endpoints.news_url.clone());

        let request_timeout = match std::env::var("NEWSSUM_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            mode,
            endpoints,
            db_path,
            origin,
            request_timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> NewsSumResult<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| NewsSumError::Config(format!("NEWSSUM_TIMEOUT_SECS must be a number: {}", raw)))?;

    if secs == 0 {
        return Err(NewsSumError::Config(
            "NEWSSUM_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    Ok(Duration::from_secs(secs))
}
