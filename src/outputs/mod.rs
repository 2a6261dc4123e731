//! Output generation for a finished run.
//!
//! # Submodules
//!
//! - [`report`]: lays the extracted articles out as a paginated document
//! - [`markdown`]: renders that document and writes it to disk
//! - [`json`]: optional machine-readable companion listing every slot
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 2025-10-19_21-00-00_articles.md
//!
//! json_output_dir/
//! └── 2025-10-19_21-00-00_articles.json
//! ```
//!
//! Both names derive from the single run timestamp taken at start-up.

pub mod json;
pub mod markdown;
pub mod report;
