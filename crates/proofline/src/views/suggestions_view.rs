use crate::state::AppState;
use crate::view_models::{suggestion_text, NO_SUGGESTIONS};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(false))
        .title(Line::styled(" Suggestions ", theme.panel_title()));

    let items: Vec<ListItem> = match &state.output {
        None => vec![],
        Some(output) if output.suggestions.is_empty() => {
            vec![ListItem::new(Line::styled(NO_SUGGESTIONS, theme.muted()))]
        }
        Some(output) => output
            .suggestions
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", theme.key_hint()),
                    Span::styled(suggestion_text(s, output.suggestion_style), theme.text()),
                ]))
            })
            .collect(),
    };

    frame.render_widget(List::new(items).block(block), area);
}
