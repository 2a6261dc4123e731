//! JSON companion for a run.
//!
//! Unlike the report, the JSON keeps every slot, failed ones included, so
//! consumers can see which links were discovered and why a slot is empty.
//!
//! ```json
//! {
//!   "generated_at": "2025-10-19T21:00:00+03:00",
//!   "homepage_url": "https://www.youm7.com",
//!   "continuation_link": "https://www.youm7.com/Section/65/1",
//!   "articles": [
//!     { "url": "...", "status": "extracted", "title": "...", "published_at": "...", "body": "..." },
//!     { "url": "...", "status": "failed", "error_kind": "transport_failure", "error": "..." }
//!   ]
//! }
//! ```

use crate::models::Article;
use crate::pipeline::RunOutcome;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated_at: String,
    homepage_url: &'a str,
    continuation_link: Option<&'a str>,
    articles: Vec<ArticleEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ArticleEntry<'a> {
    url: &'a str,
    status: &'static str,
    #[serde(flatten)]
    article: Option<&'a Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Serialize a run outcome, one entry per discovered link.
pub fn to_json(outcome: &RunOutcome, generated_at: &DateTime<Local>) -> serde_json::Result<String> {
    let articles = outcome
        .links
        .article_links
        .iter()
        .zip(&outcome.articles)
        .map(|(url, slot)| match slot {
            Ok(article) => ArticleEntry {
                url: url.as_str(),
                status: "extracted",
                article: Some(article),
                error_kind: None,
                error: None,
            },
            Err(e) => ArticleEntry {
                url: url.as_str(),
                status: "failed",
                article: None,
                error_kind: Some(e.kind()),
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_string_pretty(&RunReport {
        generated_at: generated_at.to_rfc3339(),
        homepage_url: &outcome.homepage_url,
        continuation_link: outcome.links.continuation_link.as_deref(),
        articles,
    })
}

/// Write the companion to `{json_output_dir}/{stem}.json`.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_run(
    outcome: &RunOutcome,
    generated_at: &DateTime<Local>,
    stem: &str,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_json(outcome, generated_at)?;
    let path = Path::new(json_output_dir).join(format!("{stem}.json"));
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON companion");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::models::LinkSet;
    use chrono::TimeZone;
    use serde_json::Value;

    fn outcome() -> RunOutcome {
        RunOutcome {
            homepage_url: "https://www.youm7.com".to_string(),
            links: LinkSet {
                continuation_link: Some("https://www.youm7.com/Section/65/1".to_string()),
                article_links: vec![
                    "https://www.youm7.com/story/1".to_string(),
                    "https://www.youm7.com/story/2".to_string(),
                ],
            },
            articles: vec![
                Ok(Article {
                    title: "عنوان".to_string(),
                    published_at: "الأحد".to_string(),
                    body: "نص".to_string(),
                }),
                Err(ScrapeError::StructureNotFound {
                    url: "https://www.youm7.com/story/2".to_string(),
                    what: "title",
                }),
            ],
            homepage_error: None,
        }
    }

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 19, 21, 0, 0).unwrap()
    }

    #[test]
    fn test_every_slot_is_listed() {
        let json: Value = serde_json::from_str(&to_json(&outcome(), &stamp()).unwrap()).unwrap();

        assert_eq!(json["homepage_url"], "https://www.youm7.com");
        assert_eq!(json["continuation_link"], "https://www.youm7.com/Section/65/1");

        let articles = json["articles"].as_array().unwrap();
        assert_eq!(articles.len(), 2);

        assert_eq!(articles[0]["status"], "extracted");
        assert_eq!(articles[0]["title"], "عنوان");
        assert!(articles[0].get("error").is_none());

        assert_eq!(articles[1]["url"], "https://www.youm7.com/story/2");
        assert_eq!(articles[1]["status"], "failed");
        assert_eq!(articles[1]["error_kind"], "structure_not_found");
        assert!(articles[1].get("title").is_none());
    }

    #[tokio::test]
    async fn test_write_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_run(
            &outcome(),
            &stamp(),
            "2025-10-19_21-00-00_articles",
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        assert!(path.ends_with("2025-10-19_21-00-00_articles.json"));
        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed["articles"].as_array().unwrap().len(), 2);
    }
}
