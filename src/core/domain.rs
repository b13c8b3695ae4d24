use std::str::FromStr;
use std::time::Duration;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const GOOGLE_BOOKS_VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

// maxResults is capped at 40 by the volumes search
pub const MAX_PAGE_SIZE: usize = 40;

pub const DEFAULT_AUTHOR: &str = "JRR Tolkien";
pub const DEFAULT_LANGUAGE: &str = "en";

// Configuration abstracts config options for the ebooks endpoint
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub api_url: String,
    pub page_size: usize,
    pub max_pages: usize,
    pub request_timeout_secs: u64,
    pub default_author: String,
    pub default_lang: String,
    pub log_level: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            api_url: GOOGLE_BOOKS_VOLUMES_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            max_pages: 25,
            request_timeout_secs: 10,
            default_author: DEFAULT_AUTHOR.to_string(),
            default_lang: DEFAULT_LANGUAGE.to_string(),
            log_level: "info".to_string(),
        }
    }

    // Defaults first, then EBOOKS_* variables, e.g. EBOOKS_PAGE_SIZE sets page_size.
    pub fn from_env() -> LibraryResult<Self> {
        let config: Configuration = Figment::new()
            .merge(Serialized::defaults(Configuration::new()))
            .merge(Env::prefixed("EBOOKS_"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(LibraryError::validation(
                format!("page size must be within 1..={} but was {}", MAX_PAGE_SIZE, self.page_size).as_str(),
                Some("EBOOKS_PAGE_SIZE".to_string())));
        }
        if self.max_pages == 0 {
            return Err(LibraryError::validation(
                "max pages must be at least 1", Some("EBOOKS_MAX_PAGES".to_string())));
        }
        if self.request_timeout_secs == 0 {
            return Err(LibraryError::validation(
                "request timeout must be at least 1 second", Some("EBOOKS_REQUEST_TIMEOUT_SECS".to_string())));
        }
        if self.api_url.trim().is_empty() {
            return Err(LibraryError::validation(
                "api url must not be blank", Some("EBOOKS_API_URL".to_string())));
        }
        if tracing::Level::from_str(self.log_level.as_str()).is_err() {
            return Err(LibraryError::validation(
                format!("unknown log level {:?}", self.log_level).as_str(), Some("EBOOKS_LOG_LEVEL".to_string())));
        }
        Ok(())
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
