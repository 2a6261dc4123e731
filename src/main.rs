//! # Youm7 Digest
//!
//! Collects the articles listed under the "breaking news" heading of the
//! Youm7 homepage and lays them out in a single paginated report.
//!
//! ## Usage
//!
//! ```sh
//! youm7_digest -o ./reports
//! ```
//!
//! ## Architecture
//!
//! One best-effort batch pass, strictly sequential:
//! 1. **Indexing**: fetch the homepage and discover article URLs
//! 2. **Extraction**: fetch each article and pull title, date, and body
//! 3. **Output**: assemble the report (and optional JSON companion)
//!
//! A failing article leaves an empty slot and the run carries on. Only an
//! unreachable homepage aborts the run.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dom;
mod error;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::SourceConfig;
use fetch::HttpFetcher;
use outputs::{json, markdown, report};
use pipeline::Pipeline;
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    // Names every artifact of this run; taken once, never recomputed.
    let generated_at = Local::now();
    info!(%generated_at, "youm7_digest starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.json_output_dir, ?args.config, "Parsed CLI arguments");

    let config = SourceConfig::load(args.config.as_deref())?;

    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Report output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }
    if let Some(json_dir) = &args.json_output_dir {
        ensure_writable_dir(json_dir).await?;
    }

    // ---- Scrape ----
    let pipeline = Pipeline::new(HttpFetcher::new()?, &config)?;
    let outcome = pipeline.run(&config.homepage_url).await;
    if let Some(e) = &outcome.homepage_error {
        error!(error = %e, "Run aborted: homepage unavailable");
        return Err(e.clone().into());
    }

    // ---- Report ----
    let document = report::assemble(&outcome.articles, generated_at);
    if document.sections.is_empty() {
        warn!("No articles extracted; writing an empty report");
    }
    let report_path = markdown::write_report(&document, &args.output_dir).await?;

    if let Some(json_dir) = &args.json_output_dir {
        let stem = document.file_stem();
        if let Err(e) = json::write_run(&outcome, &generated_at, &stem, json_dir).await {
            error!(error = %e, "Failed to write JSON companion");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        path = %report_path.display(),
        discovered = outcome.links.article_links.len(),
        extracted = outcome.extracted_count(),
        "Execution complete"
    );

    Ok(())
}
