//! HTML report of the last correction
//!
//! A self-contained page with the highlighted text, the metric badges and
//! the suggestion list, written by the export action.

use crate::state::{CorrectionOutput, OutputBody};
use crate::view_models::{render_suggestions, BadgeSet};
use chrono::Local;
use proofline_diff::{render_diff_markup, render_plain_markup};

pub const REPORT_FILE_NAME: &str = "correction_report.html";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:56rem;margin:2rem auto;line-height:1.5}\
.output{white-space:pre-wrap;border:1px solid #ccc;border-radius:6px;padding:1rem}\
.hl-del{color:#b91c1c;text-decoration:line-through}\
.hl-add{color:#15803d;font-weight:bold}\
.badge{display:inline-block;background:#1d4ed8;color:#fff;border-radius:999px;padding:.1rem .6rem;margin-right:.4rem}\
.extra-metrics span{margin-right:1rem}\
.muted{color:#64748b}";

/// Build the report page for `output`
pub fn build_report(output: &CorrectionOutput) -> String {
    let body = match &output.body {
        OutputBody::Diff(segments) => render_diff_markup(segments),
        OutputBody::Plain(text) => render_plain_markup(text),
    };
    let badges = BadgeSet::from_output(output).to_markup();
    let suggestions = render_suggestions(&output.suggestions, output.suggestion_style);
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>Correction report</title>\n<style>{style}</style>\n</head>\n<body>\n",
            "<h1>Correction report</h1>\n<p class=\"muted\">Generated {generated}</p>\n",
            "<section class=\"metrics\">{badges}</section>\n",
            "<h2>Corrected text</h2>\n<div class=\"output\">{body}</div>\n",
            "<h2>Suggestions</h2>\n<div class=\"suggestions\">{suggestions}</div>\n",
            "</body>\n</html>\n"
        ),
        style = STYLE,
        generated = generated,
        badges = badges,
        body = body,
        suggestions = suggestions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proofline_client::{CorrectionReport, FileCorrection, Metrics};
    use proofline_diff::{AlignMode, TrailingPolicy};

    #[test]
    fn test_report_contains_all_fragments() {
        let report = CorrectionReport {
            corrected: "I have a <dog>".to_string(),
            metrics: Metrics {
                words: Some(4),
                sentences: Some(1),
                chars: None,
            },
            grammar_score: Some(95.0),
            ..Default::default()
        };
        let output = CorrectionOutput::from_report(
            "I has a <dog>",
            &report,
            AlignMode::Greedy,
            TrailingPolicy::Drop,
        );

        let html = build_report(&output);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(
            r#"<div class="output">I <span class="hl-del">has</span><span class="hl-add">have</span> a &lt;dog&gt;</div>"#
        ));
        assert!(html.contains(r#"<span class="badge">Words: 4</span>"#));
        assert!(html.contains("Grammar: 95%"));
        assert!(html.contains("No spelling suggestions — looks good! ✅"));
    }

    #[test]
    fn test_file_report_is_plain() {
        let output = CorrectionOutput::from_file(&FileCorrection {
            corrected: "a & b".to_string(),
            ..Default::default()
        });
        let html = build_report(&output);
        assert!(html.contains(r#"<div class="output">a &amp; b</div>"#));
        assert!(!html.contains("hl-add\">"));
    }
}
