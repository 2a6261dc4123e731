//! Source configuration.
//!
//! The scraper targets one fixed site. [`SourceConfig::default`] carries the
//! Youm7 constants; a YAML file may override any subset of them, which is
//! mostly useful for pointing the run at a mirror or a local fixture server.
//!
//! ```yaml
//! origin: https://www.youm7.com
//! homepage_url: https://www.youm7.com
//! breaking_news_marker: أخبار عاجلة
//! continuation_pattern: Section
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use tracing::{info, instrument};

pub const DEFAULT_ORIGIN: &str = "https://www.youm7.com";
/// Visible text of the anchor that opens the breaking-news list.
pub const DEFAULT_BREAKING_NEWS_MARKER: &str = "أخبار عاجلة";
/// Substring identifying the "show more" link.
pub const DEFAULT_CONTINUATION_PATTERN: &str = "Section";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Prefixed to relative hrefs found on the homepage.
    pub origin: String,
    pub homepage_url: String,
    /// Regular expression matched against anchor text.
    pub breaking_news_marker: String,
    pub continuation_pattern: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            homepage_url: DEFAULT_ORIGIN.to_string(),
            breaking_news_marker: DEFAULT_BREAKING_NEWS_MARKER.to_string(),
            continuation_pattern: DEFAULT_CONTINUATION_PATTERN.to_string(),
        }
    }
}

impl SourceConfig {
    /// Load from `path`, or fall back to the built-in source when no path is given.
    #[instrument(level = "info")]
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml(&raw)?;
        info!(%path, origin = %config.origin, "Loaded source configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
