//! Views - draw the application state
//!
//! ```text
//! ┌ Input ─────────────┐┌ Corrected ─────────┐
//! │                    ││                    │
//! └────────────────────┘└────────────────────┘
//! ┌ Metrics ───────────────────────────────────┐
//! ┌ Suggestions ───────────────────────────────┐
//! ┌ Add word ──────────┐┌ Correct file ──────┐
//!  key hints
//!  status bar
//! ```

mod input_view;
mod key_hints;
mod metrics_view;
mod output_view;
mod status_bar;
mod suggestions_view;

use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    frame.render_widget(Block::default().style(state.theme.text()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    input_view::render_editor(state, columns[0], frame);
    output_view::render(state, columns[1], frame);

    metrics_view::render(state, rows[1], frame);
    suggestions_view::render(state, rows[2], frame);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    input_view::render_dictionary_field(state, fields[0], frame);
    input_view::render_file_field(state, fields[1], frame);

    key_hints::render(state, rows[4], frame);

    let status = StatusBarViewModel::from_state(state);
    frame.render_widget(status_bar::StatusBarWidget(&status), rows[5]);
}
