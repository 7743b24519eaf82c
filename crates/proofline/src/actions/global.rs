//! Global actions - not tied to any specific panel

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Move focus to the next input field
    FocusNext,
    /// Move focus to the previous input field
    FocusPrevious,
    /// Reset input, output, fields and session
    Clear,
    /// Quit the application
    Quit,
}
