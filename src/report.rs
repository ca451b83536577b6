//! Result rendering: terminal panels, the `summary.txt` artifact, and a
//! single-page HTML report with a data-embedded download link.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Local;
use tokio::fs;
use tracing::info;

use crate::error::Result;
use crate::metrics::TextMetrics;
use crate::pipeline::SummaryOutcome;

/// Render one metrics panel as terminal text.
pub fn render_metrics_panel(title: &str, metrics: &TextMetrics) -> String {
    format!(
        "{}\n\
         {}\n\
         Word Count: {}\n\
         Sentence Count: {}\n\
         Flesch Readability Score: {:.1}\n\
         SMOG Index: {:.1}\n\
         Detected Language: {}\n",
        title,
        "-".repeat(title.len()),
        metrics.word_count,
        metrics.sentence_count,
        metrics.flesch_score,
        metrics.smog_score,
        metrics.language
    )
}

/// Print both metric panels, the compression ratio, and the final text.
pub fn print_outcome(outcome: &SummaryOutcome) {
    println!();
    println!("{}", render_metrics_panel("Original Text Metrics", &outcome.original_metrics));
    println!("{}", render_metrics_panel("Summary Metrics", &outcome.summary_metrics));
    println!("Compression Ratio: {:.1}%", outcome.compression_ratio);
    println!();
    println!("Summary:");
    println!("{}", outcome.translated_text);
}

/// Build a data-embedded download link for the summary text.
pub fn download_link(text: &str, filename: &str) -> String {
    let encoded = BASE64.encode(text.as_bytes());
    format!(
        "<a href=\"data:text/plain;base64,{}\" download=\"{}\">Download Summary</a>",
        encoded, filename
    )
}

/// Write the translated summary as a plain UTF-8 text file.
pub async fn write_summary(outcome: &SummaryOutcome, dir: &Path, filename: &str) -> Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, &outcome.translated_text).await?;
    info!("Summary written to {}", path.display());
    Ok(path)
}

/// Write the single-page HTML report: both metric panels, the compression
/// ratio, the final text, and the download link.
pub async fn write_report(
    outcome: &SummaryOutcome,
    dir: &Path,
    report_filename: &str,
    summary_filename: &str,
) -> Result<PathBuf> {
    let path = dir.join(report_filename);
    let html = render_html_report(outcome, summary_filename);
    fs::write(&path, html).await?;
    info!("Report written to {}", path.display());
    Ok(path)
}

fn render_html_report(outcome: &SummaryOutcome, summary_filename: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Text Summary</title></head>\n\
         <body>\n\
         <h1>Text Summary</h1>\n\
         <p>Generated {}</p>\n\
         <div>\n\
         {}\n\
         {}\n\
         </div>\n\
         <p><strong>Compression Ratio:</strong> {:.1}%</p>\n\
         <h2>Summary</h2>\n\
         <pre>{}</pre>\n\
         <p>{}</p>\n\
         </body>\n\
         </html>\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        render_html_panel("Original Text Metrics", &outcome.original_metrics),
        render_html_panel("Summary Metrics", &outcome.summary_metrics),
        outcome.compression_ratio,
        escape_html(&outcome.translated_text),
        download_link(&outcome.translated_text, summary_filename),
    )
}

fn render_html_panel(title: &str, metrics: &TextMetrics) -> String {
    format!(
        "<h2>{}</h2>\n\
         <ul>\n\
         <li>Word Count: {}</li>\n\
         <li>Sentence Count: {}</li>\n\
         <li>Flesch Readability Score: {:.1}</li>\n\
         <li>SMOG Index: {:.1}</li>\n\
         <li>Detected Language: {}</li>\n\
         </ul>",
        title,
        metrics.word_count,
        metrics.sentence_count,
        metrics.flesch_score,
        metrics.smog_score,
        metrics.language
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::text_metrics;

    fn outcome() -> SummaryOutcome {
        SummaryOutcome {
            original_metrics: text_metrics("A longer original text with several words in it."),
            summary_metrics: text_metrics("A short summary."),
            compression_ratio: 66.7,
            summary_text: "A short summary.".to_string(),
            translated_text: "Un resumen corto.".to_string(),
        }
    }

    #[test]
    fn test_panel_contains_all_metrics() {
        let metrics = text_metrics("One sentence of text.");
        let panel = render_metrics_panel("Original Text Metrics", &metrics);
        assert!(panel.contains("Word Count: 4"));
        assert!(panel.contains("Sentence Count: 1"));
        assert!(panel.contains("Flesch Readability Score:"));
        assert!(panel.contains("SMOG Index:"));
        assert!(panel.contains("Detected Language:"));
    }

    #[test]
    fn test_download_link_embeds_base64_content() {
        let link = download_link("Un resumen corto.", "summary.txt");
        let encoded = BASE64.encode("Un resumen corto.".as_bytes());
        assert!(link.contains(&format!("data:text/plain;base64,{}", encoded)));
        assert!(link.contains("download=\"summary.txt\""));
    }

    #[test]
    fn test_html_report_has_both_panels_and_link() {
        let html = render_html_report(&outcome(), "summary.txt");
        assert!(html.contains("Original Text Metrics"));
        assert!(html.contains("Summary Metrics"));
        assert!(html.contains("Compression Ratio:"));
        assert!(html.contains("Un resumen corto."));
        assert!(html.contains("download=\"summary.txt\""));
    }

    #[tokio::test]
    async fn test_write_summary_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_summary(&outcome(), dir.path(), "summary.txt")
            .await
            .expect("write summary");

        let written = tokio::fs::read_to_string(&path).await.expect("read back");
        assert_eq!(written, "Un resumen corto.");
    }
}
