//! Report document model and assembly.
//!
//! A [`ReportDocument`] is a sequence of [`Section`]s, one per extracted
//! article, each starting on a new page when rendered. Every article is laid
//! out as three right-aligned paragraphs:
//!
//! | Paragraph | Style | Font | Size | Italic |
//! |-----------|-------|------|------|--------|
//! | title | Heading 1 | Calibri | 20pt | no |
//! | date | normal | Calibri | 10pt | yes |
//! | body | normal | default | 14pt | yes |
//!
//! Failed slots are left out of the document; the JSON companion keeps them.

use crate::models::{Article, ArticleSlot};
use chrono::{DateTime, Local};
use tracing::{info, instrument};

/// Timestamp layout used in output filenames.
pub const RUN_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const REPORT_FONT: &str = "Calibri";
const TITLE_SIZE_PT: u8 = 20;
const DATE_SIZE_PT: u8 = 10;
const BODY_SIZE_PT: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Heading1,
}

/// A span of uniformly formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub size_pt: u8,
    pub italic: bool,
    /// `None` keeps the document's default face.
    pub font: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub alignment: Alignment,
    pub runs: Vec<Run>,
}

/// One page-break-delimited block of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub generated_at: DateTime<Local>,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    /// Filename stem shared by every artifact of this run.
    pub fn file_stem(&self) -> String {
        format!("{}_articles", self.generated_at.format(RUN_STAMP_FORMAT))
    }
}

/// Lay out the extracted articles, in collection order, one section each.
#[instrument(level = "info", skip_all, fields(slots = articles.len()))]
pub fn assemble(articles: &[ArticleSlot], generated_at: DateTime<Local>) -> ReportDocument {
    let sections: Vec<Section> = articles
        .iter()
        .filter_map(|slot| slot.as_ref().ok())
        .map(article_section)
        .collect();

    info!(
        sections = sections.len(),
        skipped = articles.len() - sections.len(),
        "Assembled report"
    );
    ReportDocument {
        generated_at,
        sections,
    }
}

fn article_section(article: &Article) -> Section {
    let paragraph = |style, text: &str, size_pt, italic, font| Paragraph {
        style,
        alignment: Alignment::Right,
        runs: vec![Run {
            text: text.to_string(),
            size_pt,
            italic,
            font,
        }],
    };

    Section {
        paragraphs: vec![
            paragraph(ParagraphStyle::Heading1, &article.title, TITLE_SIZE_PT, false, Some(REPORT_FONT)),
            paragraph(ParagraphStyle::Normal, &article.published_at, DATE_SIZE_PT, true, Some(REPORT_FONT)),
            paragraph(ParagraphStyle::Normal, &article.body, BODY_SIZE_PT, true, None),
        ],
    }
}
