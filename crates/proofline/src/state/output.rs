//! Output of the last applied correction

use proofline_client::{CorrectionReport, FileCorrection, Metrics, Readability, Suggestion};
use proofline_diff::{align_texts, AlignMode, Segment, TrailingPolicy};

/// How the corrected text is presented
#[derive(Debug, Clone, PartialEq)]
pub enum OutputBody {
    /// Highlighted diff against the request text (live flow)
    Diff(Vec<Segment>),
    /// Corrected text without highlights (file flow)
    Plain(String),
}

/// How much detail the suggestion list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStyle {
    /// `from → to (candidates)`
    WithCandidates,
    /// `from → to`
    Compact,
}

/// Everything shown after a successful correction
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOutput {
    pub body: OutputBody,
    pub suggestions: Vec<Suggestion>,
    pub suggestion_style: SuggestionStyle,
    pub metrics: Metrics,
    pub grammar_score: Option<f64>,
    pub readability: Readability,
}

impl CorrectionOutput {
    /// Live flow: align the text that was sent with the corrected text
    pub fn from_report(
        request_text: &str,
        report: &CorrectionReport,
        mode: AlignMode,
        trailing: TrailingPolicy,
    ) -> Self {
        Self {
            body: OutputBody::Diff(align_texts(mode, trailing, request_text, &report.corrected)),
            suggestions: report.suggestions.clone(),
            suggestion_style: SuggestionStyle::WithCandidates,
            metrics: report.metrics.clone(),
            grammar_score: report.grammar_score,
            readability: report.readability.clone(),
        }
    }

    /// File flow: show the corrected text as is
    pub fn from_file(file: &FileCorrection) -> Self {
        Self {
            body: OutputBody::Plain(file.corrected.clone()),
            suggestions: file.suggestions.clone(),
            suggestion_style: SuggestionStyle::Compact,
            metrics: file.metrics.clone(),
            grammar_score: file.grammar_score,
            readability: file.readability.clone(),
        }
    }
}
