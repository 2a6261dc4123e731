//! Youm7 page scrapers.
//!
//! Scraping follows the same two-phase pattern as any news source:
//!
//! 1. **Indexing**: [`homepage`] discovers article URLs from the homepage
//! 2. **Extraction**: [`article`] pulls title, date, and body out of each page
//!
//! Both phases work on raw page bytes and never touch the network; fetching
//! is the pipeline's job.

pub mod article;
pub mod homepage;
