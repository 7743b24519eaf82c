use crate::state::AppState;
use crate::view_models::BadgeSet;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(false))
        .title(Line::styled(" Metrics ", theme.panel_title()));

    let line = match &state.output {
        None => Line::styled("No metrics yet", theme.muted()),
        Some(output) => {
            let badges = BadgeSet::from_output(output);
            let mut spans = Vec::new();
            for label in badges.labels() {
                spans.push(Span::styled(format!(" {} ", label), theme.badge()));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("  {}   {}", badges.grammar.text(), badges.readability.text()),
                theme.key_description(),
            ));
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
