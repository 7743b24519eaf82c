use crate::state::AppState;
use crate::view_models::OutputViewModel;
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let vm = OutputViewModel::from_state(state);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.theme.panel_border(false))
        .title(Line::styled(vm.title, vm.title_style));

    let paragraph = Paragraph::new(Text::from(vm.lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
