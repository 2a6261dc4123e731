//! Youm7 homepage link discovery.
//!
//! The homepage has no stable ids or classes around its live news list, so
//! discovery anchors on visible text instead: the link reading "أخبار عاجلة"
//! (breaking news) sits in a heading whose following `div` siblings hold
//! the article links. The list ends with a "show more" link into a section
//! page (its URL contains `Section`).
//!
//! # Stopping rule
//!
//! Hitting the show-more link ends the scan of the *current* `div` only.
//! Later sibling `div`s are still scanned.

use crate::config::SourceConfig;
use crate::dom::{self, Dom};
use crate::error::ConfigError;
use crate::models::LinkSet;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;
use tracing::{debug, info, instrument, warn};
use url::Url;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Finds article links following the breaking-news anchor.
#[derive(Debug, Clone)]
pub struct HomepageParser {
    /// Site origin without a trailing slash.
    origin: String,
    marker: Regex,
    continuation_pattern: String,
}

impl HomepageParser {
    /// # Errors
    ///
    /// Fails if the configured origin is not an absolute URL or the marker
    /// is not a valid regular expression.
    pub fn new(config: &SourceConfig) -> Result<Self, ConfigError> {
        Url::parse(&config.origin).map_err(|source| ConfigError::Origin {
            origin: config.origin.clone(),
            source,
        })?;
        Ok(Self {
            origin: config.origin.trim_end_matches('/').to_string(),
            marker: Regex::new(&config.breaking_news_marker)?,
            continuation_pattern: config.continuation_pattern.clone(),
        })
    }

    /// Discover the article links and the show-more link on a homepage.
    ///
    /// A page without the breaking-news anchor yields an empty [`LinkSet`].
    #[instrument(level = "info", skip_all, fields(bytes = html.len()))]
    pub fn find_articles(&self, html: &[u8]) -> LinkSet {
        let document = Dom::parse(html);

        let Some(marker) = document.find_first(&ANCHOR, |anchor| {
            self.marker.is_match(&anchor.text().collect::<String>())
        }) else {
            warn!(marker = %self.marker, "Breaking-news anchor not found");
            return LinkSet::default();
        };
        let Some(heading) = dom::parent(marker) else {
            warn!("Breaking-news anchor has no enclosing element");
            return LinkSet::default();
        };

        let mut continuation_link = None;
        let mut discovered = Vec::new();
        for container in dom::siblings_after(heading, "div") {
            for anchor in dom::children(container, &ANCHOR) {
                let Some(href) = anchor.value().attr("href").filter(|h| !h.is_empty()) else {
                    continue;
                };
                let url = self.normalize(href);
                if url.contains(&self.continuation_pattern) {
                    continuation_link = Some(url);
                    break;
                }
                discovered.push(url);
            }
        }

        let article_links: Vec<String> = discovered.into_iter().unique().collect();
        info!(
            count = article_links.len(),
            continuation = continuation_link.as_deref().unwrap_or(""),
            "Indexed homepage article links"
        );
        debug!(urls = ?article_links, "Homepage article links");

        LinkSet {
            continuation_link,
            article_links,
        }
    }

    /// Absolute hrefs pass through untouched; relative ones get the site
    /// origin prepended as text.
    ///
    /// The href bytes are never re-encoded: a story linked relatively and
    /// absolutely normalizes to the same string.
    pub fn normalize(&self, href: &str) -> String {
        if Url::parse(href).is_ok() {
            return href.to_string();
        }
        if href.starts_with('/') {
            format!("{}{href}", self.origin)
        } else {
            format!("{}/{href}", self.origin)
        }
    }
}
