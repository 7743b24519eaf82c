//! Input editor and single-line fields

use crate::state::{AppState, Focus, InputField};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_editor(state: &AppState, area: Rect, frame: &mut Frame) {
    render_field(
        state,
        &state.editor,
        Focus::Editor,
        " Input ",
        "Type or paste text to correct...",
        area,
        frame,
    );
}

pub fn render_dictionary_field(state: &AppState, area: Rect, frame: &mut Frame) {
    render_field(
        state,
        &state.dictionary_word,
        Focus::Dictionary,
        " Add word to dictionary ",
        "word, then Enter",
        area,
        frame,
    );
}

pub fn render_file_field(state: &AppState, area: Rect, frame: &mut Frame) {
    render_field(
        state,
        &state.file_path,
        Focus::File,
        " Correct .txt file ",
        "path/to/file.txt, then Enter",
        area,
        frame,
    );
}

fn render_field(
    state: &AppState,
    field: &InputField,
    focus: Focus,
    title: &str,
    placeholder: &str,
    area: Rect,
    frame: &mut Frame,
) {
    let theme = &state.theme;
    let focused = state.focus == focus;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused))
        .title(Line::styled(title.to_string(), theme.panel_title()));
    let inner = block.inner(area);

    let text = if field.value().is_empty() {
        Text::from(Line::styled(placeholder.to_string(), theme.muted()))
    } else {
        Text::styled(field.value().to_string(), theme.text())
    };

    // Keep the end of the text (where the cursor is) in view
    let line_count = field.value().split('\n').count() as u16;
    let scroll = line_count.saturating_sub(inner.height);

    frame.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let last_line = field.value().rsplit('\n').next().unwrap_or_default();
        let column = (Line::raw(last_line).width() as u16).min(inner.width - 1);
        let row = (line_count - scroll).saturating_sub(1).min(inner.height - 1);
        frame.set_cursor_position(Position::new(inner.x + column, inner.y + row));
    }
}
