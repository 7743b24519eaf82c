use crate::state::{AppState, Focus};
use ratatui::{layout::Rect, text::Line, text::Span, widgets::Paragraph, Frame};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = &state.theme;
    let enter = match state.focus {
        Focus::Editor => "new line",
        Focus::Dictionary => "add word",
        Focus::File => "correct file",
    };
    let save = match state.focus {
        Focus::File => "save file_corrected.txt",
        Focus::Editor | Focus::Dictionary => "save corrected.txt",
    };

    let hints = [
        ("Tab", "focus"),
        ("Enter", enter),
        ("^R", "correct"),
        ("^L", "clear"),
        ("^Y", "copy"),
        ("^S", save),
        ("^E", "export report"),
        ("Esc", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (key, description) in hints {
        spans.push(Span::styled(key, theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", description), theme.key_description()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
