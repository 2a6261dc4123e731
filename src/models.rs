//! Data models flowing through the scrape run.
//!
//! - [`RawPage`]: the outcome of one GET, consumed once by a parser
//! - [`LinkSet`]: article URLs discovered on the homepage
//! - [`Article`]: the fields extracted from one article page
//! - [`ArticleCollection`]: per-link results, index-aligned with the links

use crate::error::{ScrapeError, TRANSPORT_FAILURE_STATUS};
use serde::Serialize;

/// The result of fetching one URL.
///
/// `body` is `None` on a non-2xx response or a transport failure; in the
/// latter case `status` is [`TRANSPORT_FAILURE_STATUS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl RawPage {
    pub fn transport_failure(url: &str) -> Self {
        Self {
            url: url.to_string(),
            status: TRANSPORT_FAILURE_STATUS,
            body: None,
        }
    }

    /// Take the body, or describe why there is none.
    pub fn into_body(self) -> Result<Vec<u8>, ScrapeError> {
        match self.body {
            Some(body) => Ok(body),
            None => Err(ScrapeError::Transport {
                url: self.url,
                status: self.status,
            }),
        }
    }
}

/// Links discovered on the homepage.
///
/// `article_links` holds absolute, deduplicated URLs and never contains the
/// continuation link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    /// The "show more" link, discovered but not followed.
    pub continuation_link: Option<String>,
    pub article_links: Vec<String>,
}

impl LinkSet {
    pub fn is_empty(&self) -> bool {
        self.continuation_link.is_none() && self.article_links.is_empty()
    }
}

/// One extracted article. The date is kept as the raw text shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub published_at: String,
    pub body: String,
}

/// An extracted article, or the reason the slot is empty.
pub type ArticleSlot = Result<Article, ScrapeError>;

/// Ordered results of a run, one slot per discovered link.
pub type ArticleCollection = Vec<ArticleSlot>;
