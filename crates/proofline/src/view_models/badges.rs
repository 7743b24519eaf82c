//! Metric badges
//!
//! Three badges in fixed order (`Words`, `Sentences`, `Spelling fixes`)
//! plus the grammar score and readability shown next to them. Missing
//! values are rendered as `-`.

use crate::state::CorrectionOutput;
use proofline_client::{Metrics, Readability};
use proofline_diff::render::escape;

const MISSING: &str = "-";

/// One `label: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub value: String,
}

impl Badge {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSet {
    pub badges: [Badge; 3],
    /// `Grammar` extra metric, e.g. `95%`
    pub grammar: Badge,
    /// `Readability` extra metric, verbatim from the service
    pub readability: Badge,
}

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |n| n.to_string())
}

impl BadgeSet {
    pub fn new(
        metrics: &Metrics,
        suggestion_count: usize,
        grammar_score: Option<f64>,
        readability: &Readability,
    ) -> Self {
        Self {
            badges: [
                Badge::new("Words", count(metrics.words)),
                Badge::new("Sentences", count(metrics.sentences)),
                Badge::new("Spelling fixes", suggestion_count.to_string()),
            ],
            grammar: Badge::new(
                "Grammar",
                grammar_score.map_or_else(|| MISSING.to_string(), |score| format!("{}%", score)),
            ),
            readability: Badge::new("Readability", readability.to_string()),
        }
    }

    pub fn from_output(output: &CorrectionOutput) -> Self {
        Self::new(
            &output.metrics,
            output.suggestions.len(),
            output.grammar_score,
            &output.readability,
        )
    }

    /// Badge texts in display order
    pub fn labels(&self) -> Vec<String> {
        self.badges.iter().map(Badge::text).collect()
    }

    pub fn to_markup(&self) -> String {
        let badges: String = self
            .badges
            .iter()
            .map(|badge| format!(r#"<span class="badge">{}</span>"#, escape(&badge.text())))
            .collect();
        format!(
            r#"<div class="badges">{}</div><div class="extra-metrics"><span>{}</span><span>{}</span></div>"#,
            badges,
            escape(&self.grammar.text()),
            escape(&self.readability.text()),
        )
    }
}
