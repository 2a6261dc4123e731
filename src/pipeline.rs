//! The scrape run: homepage → links → one extraction per link.
//!
//! Everything runs strictly in sequence; each fetch completes before the
//! next one starts. A failing article never stops the run: its slot in the
//! [`ArticleCollection`] records the failure and the next link is tried.
//! Only a homepage that cannot be fetched ends the run with no articles.
//!
//! The continuation ("show more") link is reported but never followed.

use crate::config::SourceConfig;
use crate::error::{ConfigError, ScrapeError};
use crate::fetch::Fetch;
use crate::models::{ArticleCollection, ArticleSlot, LinkSet};
use crate::scrapers::article;
use crate::scrapers::homepage::HomepageParser;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, instrument, warn};

/// Everything a run produced.
///
/// `articles` is index-aligned with `links.article_links`.
#[derive(Debug)]
pub struct RunOutcome {
    pub homepage_url: String,
    pub links: LinkSet,
    pub articles: ArticleCollection,
    /// Set when the homepage itself could not be fetched.
    pub homepage_error: Option<ScrapeError>,
}

impl RunOutcome {
    fn empty(homepage_url: &str, links: LinkSet, homepage_error: Option<ScrapeError>) -> Self {
        Self {
            homepage_url: homepage_url.to_string(),
            links,
            articles: Vec::new(),
            homepage_error,
        }
    }

    /// Number of slots holding an extracted article.
    pub fn extracted_count(&self) -> usize {
        self.articles.iter().filter(|slot| slot.is_ok()).count()
    }
}

pub struct Pipeline<F> {
    fetcher: F,
    homepage: HomepageParser,
}

impl<F: Fetch> Pipeline<F> {
    /// Build a pipeline over `fetcher` for the configured source.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Page source used for the homepage and every article
    /// * `config` - Origin, breaking-news marker, and continuation pattern
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the origin or marker pattern is invalid.
    pub fn new(fetcher: F, config: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            fetcher,
            homepage: HomepageParser::new(config)?,
        })
    }

    /// Fetch the homepage, discover its article links, and extract each one
    /// in turn.
    ///
    /// # Arguments
    ///
    /// * `homepage_url` - URL of the homepage to index
    ///
    /// # Returns
    ///
    /// A [`RunOutcome`] whose `articles` has one slot per discovered link, in
    /// discovery order. Failed slots hold the [`ScrapeError`] that emptied
    /// them. If the homepage itself cannot be fetched, `articles` is empty
    /// and `homepage_error` is set.
    #[instrument(level = "info", skip_all, fields(%homepage_url))]
    pub async fn run(&self, homepage_url: &str) -> RunOutcome {
        let body = match self.fetcher.fetch(homepage_url).await.into_body() {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Homepage unavailable; no articles attempted");
                return RunOutcome::empty(homepage_url, LinkSet::default(), Some(e));
            }
        };

        let links = self.homepage.find_articles(&body);
        if let Some(continuation) = &links.continuation_link {
            debug!(%continuation, "Continuation link discovered (not followed)");
        }
        if links.article_links.is_empty() {
            warn!("No article links discovered on homepage");
            return RunOutcome::empty(homepage_url, links, None);
        }

        let articles: ArticleCollection = stream::iter(links.article_links.iter().enumerate())
            .then(|(index, url)| async move {
                let slot = self.scrape_article(url).await;
                match &slot {
                    Ok(article) => debug!(index, %url, title = %article.title, "Extracted article"),
                    Err(e) => warn!(index, %url, kind = e.kind(), error = %e, "Article slot left empty"),
                }
                slot
            })
            .collect()
            .await;

        let outcome = RunOutcome {
            homepage_url: homepage_url.to_string(),
            links,
            articles,
            homepage_error: None,
        };
        info!(
            total = outcome.articles.len(),
            extracted = outcome.extracted_count(),
            failed = outcome.articles.len() - outcome.extracted_count(),
            "Finished scraping articles"
        );
        outcome
    }

    async fn scrape_article(&self, url: &str) -> ArticleSlot {
        let body = self.fetcher.fetch(url).await.into_body()?;
        article::extract(&body).ok_or_else(|| ScrapeError::StructureNotFound {
            url: url.to_string(),
            what: "title",
        })
    }
}
