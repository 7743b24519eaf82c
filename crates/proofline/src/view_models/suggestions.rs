//! Suggestion list

use crate::state::SuggestionStyle;
use proofline_client::Suggestion;
use proofline_diff::render::escape;

/// Shown instead of an empty list
pub const NO_SUGGESTIONS: &str = "No spelling suggestions — looks good! ✅";

const MAX_CANDIDATES: usize = 5;

fn candidates(suggestion: &Suggestion) -> String {
    suggestion
        .candidates
        .iter()
        .take(MAX_CANDIDATES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text line for one suggestion, as shown in the terminal
pub fn suggestion_text(suggestion: &Suggestion, style: SuggestionStyle) -> String {
    match style {
        SuggestionStyle::WithCandidates => format!(
            "{} → {} ({})",
            suggestion.from,
            suggestion.to,
            candidates(suggestion)
        ),
        SuggestionStyle::Compact => format!("{} → {}", suggestion.from, suggestion.to),
    }
}

/// HTML fragment for the suggestion list
pub fn render_suggestions(suggestions: &[Suggestion], style: SuggestionStyle) -> String {
    if suggestions.is_empty() {
        return format!(r#"<span class="muted">{}</span>"#, NO_SUGGESTIONS);
    }

    let items: String = suggestions
        .iter()
        .map(|s| {
            let head = format!("<b>{}</b> → <b>{}</b>", escape(&s.from), escape(&s.to));
            match style {
                SuggestionStyle::WithCandidates => format!(
                    r#"<li>{} <span class="muted">({})</span></li>"#,
                    head,
                    escape(&candidates(s))
                ),
                SuggestionStyle::Compact => format!("<li>{}</li>", head),
            }
        })
        .collect();

    format!("<ul>{}</ul>", items)
}
