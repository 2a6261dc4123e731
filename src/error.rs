//! Error types for the scrape run.
//!
//! Nothing in the per-article loop is fatal. [`ScrapeError`] values are
//! carried as data (an article slot that failed) rather than bubbled up, and
//! only a homepage failure ends a run early. [`ConfigError`] covers the
//! setup performed before any request is made.

use thiserror::Error;

/// Status reported for a request that never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Recoverable failure of a single fetch or extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    /// Non-2xx status, or a network-level failure when `status` is
    /// [`TRANSPORT_FAILURE_STATUS`].
    #[error("failed to retrieve {url} (status {status})")]
    Transport { url: String, status: u16 },

    /// An expected DOM marker was missing from the page.
    #[error("{what} not found on {url}")]
    StructureNotFound { url: String, what: &'static str },
}

impl ScrapeError {
    /// Short label used in the JSON companion and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport_failure",
            Self::StructureNotFound { .. } => "structure_not_found",
        }
    }
}

/// Failure to build the source configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid site origin {origin:?}: {source}")]
    Origin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid breaking-news marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
