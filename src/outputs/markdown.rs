//! Markdown rendering of the report document.
//!
//! Plain Markdown has no alignment or font controls, so each paragraph is
//! emitted as inline HTML carrying its styling. Sections after the first
//! are preceded by a page break that print renderers and most Markdown
//! previewers honour.

use crate::outputs::report::{Paragraph, ParagraphStyle, ReportDocument, Run};
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const PAGE_BREAK: &str = r#"<div style="page-break-before: always;"></div>"#;

/// Render a [`ReportDocument`] to a Markdown string.
pub fn render(document: &ReportDocument) -> String {
    let mut md = String::new();
    writeln!(
        md,
        "<!-- generated {} -->\n",
        document.generated_at.to_rfc3339()
    )
    .unwrap();

    for (i, section) in document.sections.iter().enumerate() {
        if i > 0 {
            writeln!(md, "{PAGE_BREAK}\n").unwrap();
        }
        for paragraph in &section.paragraphs {
            writeln!(md, "{}\n", render_paragraph(paragraph)).unwrap();
        }
    }
    md
}

fn render_paragraph(paragraph: &Paragraph) -> String {
    let tag = match paragraph.style {
        ParagraphStyle::Heading1 => "h1",
        ParagraphStyle::Normal => "p",
    };
    let runs: String = paragraph.runs.iter().map(render_run).collect();
    format!(
        r#"<{tag} style="text-align: {};">{runs}</{tag}>"#,
        paragraph.alignment.css()
    )
}

fn render_run(run: &Run) -> String {
    let tag = if run.italic { "em" } else { "span" };
    let mut style = String::new();
    if let Some(font) = run.font {
        write!(style, "font-family: {font}; ").unwrap();
    }
    write!(style, "font-size: {}pt;", run.size_pt).unwrap();
    format!(
        r#"<{tag} style="{style}">{}</{tag}>"#,
        html_escape::encode_text(&run.text)
    )
}

/// Write the rendered report to `{output_dir}/{stem}.md`.
#[instrument(level = "info", skip_all, fields(%output_dir))]
pub async fn write_report(
    document: &ReportDocument,
    output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(output_dir).join(format!("{}.md", document.file_stem()));
    fs::write(&path, render(document)).await?;
    info!(
        path = %path.display(),
        sections = document.sections.len(),
        "Wrote report"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use crate::outputs::report::assemble;
    use chrono::{Local, TimeZone};

    fn document(titles: &[&str]) -> ReportDocument {
        let slots: Vec<_> = titles
            .iter()
            .map(|title| {
                Ok(Article {
                    title: title.to_string(),
                    published_at: "الأحد".to_string(),
                    body: "نص الخبر".to_string(),
                })
            })
            .collect();
        assemble(&slots, Local.with_ymd_and_hms(2025, 10, 19, 21, 0, 0).unwrap())
    }

    #[test]
    fn test_render_article_paragraphs() {
        let md = render(&document(&["عنوان"]));

        assert!(md.contains(
            r#"<h1 style="text-align: right;"><span style="font-family: Calibri; font-size: 20pt;">عنوان</span></h1>"#
        ));
        assert!(md.contains(
            r#"<p style="text-align: right;"><em style="font-family: Calibri; font-size: 10pt;">الأحد</em></p>"#
        ));
        assert!(md.contains(
            r#"<p style="text-align: right;"><em style="font-size: 14pt;">نص الخبر</em></p>"#
        ));
        assert!(!md.contains(PAGE_BREAK));
    }

    #[test]
    fn test_page_break_between_sections_only() {
        let md = render(&document(&["أ", "ب", "ج"]));
        assert_eq!(md.matches(PAGE_BREAK).count(), 2);
        assert!(md.find("أ").unwrap() < md.find(PAGE_BREAK).unwrap());
    }

    #[test]
    fn test_text_is_escaped() {
        let md = render(&document(&["<script>x</script> & co"]));
        assert!(md.contains("&lt;script&gt;x&lt;/script&gt; &amp; co"));
        assert!(!md.contains("<script>"));
    }

    #[tokio::test]
    async fn test_write_report_uses_stem() {
        let dir = tempfile::tempdir().unwrap();
        let doc = document(&["عنوان"]);
        let path = write_report(&doc, dir.path().to_str().unwrap()).await.unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "2025-10-19_21-00-00_articles.md"
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&doc));
    }
}
