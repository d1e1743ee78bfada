use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::format::TimeFormat;

pub const ORIGIN_VAR: &str = "PAGES_APP_ORIGIN";
pub const TIME_FORMAT_VAR: &str = "PAGES_TIME_FORMAT";
pub const NOTICE_MS_VAR: &str = "PAGES_NOTICE_MS";

const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8080/";
const DEFAULT_NOTICE_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesConfig {
    /// Base URL copied links are built on. Always ends in `/`, so a base
    /// path such as `https://host/app/` survives joining.
    pub origin: Url,
    pub time_format: TimeFormat,
    /// How long a notice stays up before dismissing itself.
    pub notice_duration: Duration,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL"),
            time_format: TimeFormat::default(),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_MS),
        }
    }
}

impl PagesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ORIGIN_VAR) {
            config.origin = Url::parse(&value)
                .map(base_url)
                .map_err(|source| ConfigError::InvalidOrigin { value, source })?;
        }
        if let Some(value) = lookup(TIME_FORMAT_VAR) {
            config.time_format = value.parse()?;
        }
        if let Some(value) = lookup(NOTICE_MS_VAR) {
            let millis: u64 = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidDuration { value, source })?;
            config.notice_duration = Duration::from_millis(millis);
        }

        tracing::debug!(origin = %config.origin, time_format = ?config.time_format, "loaded page list config");
        Ok(config)
    }
}

/// Drop query and fragment and make sure the path ends in `/`.
pub fn base_url(mut url: Url) -> Url {
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
