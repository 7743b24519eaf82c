//! Output panel view model
//!
//! Maps aligned segments to styled terminal lines: deletions red and
//! crossed out, insertions green and bold. Tokens may contain line breaks,
//! so spans are split into lines as they are appended.

use crate::state::{AppState, OutputBody, Phase};
use crate::theme::Theme;
use proofline_diff::Segment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const PLACEHOLDER: &str = "Corrected text appears here. Type, or press Ctrl+R.";

#[derive(Debug, Clone)]
pub struct OutputViewModel {
    pub title: String,
    pub title_style: Style,
    pub lines: Vec<Line<'static>>,
}

impl OutputViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let session = &state.session;

        let (title, title_style) = match (session.phase(), &session.last_error) {
            (Phase::Requesting, _) => (" Corrected ⏳ ".to_string(), theme.panel_title()),
            (Phase::Idle, Some(_)) => (
                " Corrected ⚠ service unavailable ".to_string(),
                theme.warning(),
            ),
            (Phase::Idle, None) if session.debounce_pending => {
                (" Corrected … ".to_string(), theme.panel_title())
            }
            (Phase::Idle, None) => (" Corrected ".to_string(), theme.panel_title()),
        };

        let lines = match state.output.as_ref().map(|output| &output.body) {
            None => vec![Line::styled(PLACEHOLDER, theme.muted())],
            Some(OutputBody::Diff(segments)) => diff_lines(segments, theme),
            Some(OutputBody::Plain(text)) => text
                .split('\n')
                .map(|line| Line::styled(line.to_string(), theme.text()))
                .collect(),
        };

        Self {
            title,
            title_style,
            lines,
        }
    }
}

/// Accumulates spans, starting a new line at every `\n`
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn push(&mut self, text: &str, style: Style) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push_span(first, style);
        }
        for part in parts {
            self.break_line();
            self.push_span(part, style);
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        self.lines
    }
}

pub(crate) fn diff_lines(segments: &[Segment], theme: &Theme) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::default();

    for segment in segments {
        match segment {
            Segment::Equal(token) | Segment::Insert(token) => {
                builder.push(token.as_str(), theme.text())
            }
            Segment::Replace { deleted, inserted } => {
                builder.push(deleted.as_str(), theme.deleted());
                builder.push(inserted.as_str(), theme.inserted());
            }
            Segment::Delete(token) => builder.push(token.as_str(), theme.deleted()),
        }
    }

    builder.finish()
}
