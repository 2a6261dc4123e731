//! Youm7 article page extraction.
//!
//! Story pages expose the headline as the first `h1`, the publication time
//! in `span.newsStoryDate`, and the story text in `div#articleBody`. Only the
//! headline is required; a page with no `h1` is not treated as an article.

use crate::dom::{self, Dom};
use crate::models::Article;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::{debug, instrument, warn};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static STORY_DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span.newsStoryDate").unwrap());
static ARTICLE_BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("div#articleBody").unwrap());

/// Extract title, date, and body from an article page.
///
/// Returns `None` when the page has no headline. A missing date or body
/// yields an empty string for that field instead.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn extract(html: &[u8]) -> Option<Article> {
    let document = Dom::parse(html);

    let Some(title) = document.find_first(&TITLE, |_| true) else {
        warn!("Article headline not found");
        return None;
    };
    let text_of = |selector: &Selector| {
        document
            .find_first(selector, |_| true)
            .map(dom::text)
            .unwrap_or_default()
    };

    let article = Article {
        title: dom::text(title),
        published_at: text_of(&STORY_DATE),
        body: text_of(&ARTICLE_BODY),
    };
    debug!(
        title = %article.title,
        published_at = %article.published_at,
        body = %truncate_for_log(&article.body, 120),
        "Parsed article"
    );
    Some(article)
}
