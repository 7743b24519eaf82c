//! HTML markup for aligned segments.
//!
//! Token text always goes through [`escape`] before it is embedded, so
//! user-supplied text can never inject markup.

use crate::model::Segment;
use pulldown_cmark_escape::escape_html;

/// CSS class of the span holding removed text.
pub const DEL_CLASS: &str = "hl-del";
/// CSS class of the span holding added text.
pub const ADD_CLASS: &str = "hl-add";

/// Append `text` to `out` with HTML special characters escaped.
fn push_escaped(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = escape_html(&mut *out, text);
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    push_escaped(out, text);
    out.push_str("</span>");
}

/// Escape a text for embedding in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Render segments as highlighted markup.
///
/// - `Equal` and `Insert`: plain text
/// - `Replace`: deletion span with the original token directly followed by
///   an insertion span with the corrected token
/// - `Delete`: deletion span only
pub fn render_diff_markup(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Equal(token) | Segment::Insert(token) => {
                push_escaped(&mut out, &token.text)
            }
            Segment::Replace { deleted, inserted } => {
                push_span(&mut out, DEL_CLASS, &deleted.text);
                push_span(&mut out, ADD_CLASS, &inserted.text);
            }
            Segment::Delete(token) => push_span(&mut out, DEL_CLASS, &token.text),
        }
    }
    out
}

/// Render a text without any highlighting (file corrections).
pub fn render_plain_markup(text: &str) -> String {
    escape(text)
}
