//! KeyboardMiddleware - translates keyboard events into focus-aware actions
//!
//! Two layers:
//!
//! ## Layer 1: Shortcuts
//! Control-key bindings and Tab work regardless of which field has focus.
//! `Ctrl+S` is the only shortcut that looks at focus: it saves under the
//! file-flow name while the file field is focused.
//!
//! ## Layer 2: Text input
//! Everything else edits the focused field. `Enter` submits the dictionary
//! and file fields, and inserts a line break in the editor.

use crate::actions::{
    Action, CorrectionAction, DictionaryAction, DownloadKind, ExportAction, FileAction,
    GlobalAction, TextInputAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Focus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Translate a key into an action, if it is bound
fn translate(key: KeyEvent, focus: Focus) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // ═══════════════════════════════════════════════════════════════════
    // LAYER 1: Shortcuts
    // ═══════════════════════════════════════════════════════════════════
    if ctrl {
        let action = match key.code {
            KeyCode::Char('c') => Action::Global(GlobalAction::Quit),
            KeyCode::Char('r') => Action::Correction(CorrectionAction::Request),
            KeyCode::Char('l') => Action::Global(GlobalAction::Clear),
            KeyCode::Char('y') => Action::Export(ExportAction::Copy),
            KeyCode::Char('s') => Action::Export(ExportAction::Download(match focus {
                Focus::File => DownloadKind::File,
                Focus::Editor | Focus::Dictionary => DownloadKind::Text,
            })),
            KeyCode::Char('e') => Action::Export(ExportAction::Report),
            KeyCode::Char('u') => Action::TextInput(TextInputAction::ClearLine),
            _ => return None,
        };
        return Some(action);
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Global(GlobalAction::Quit)),
        KeyCode::Tab => return Some(Action::Global(GlobalAction::FocusNext)),
        KeyCode::BackTab => return Some(Action::Global(GlobalAction::FocusPrevious)),
        _ => {}
    }

    // ═══════════════════════════════════════════════════════════════════
    // LAYER 2: Text input
    // ═══════════════════════════════════════════════════════════════════
    match key.code {
        KeyCode::Enter => Some(match focus {
            Focus::Editor => Action::TextInput(TextInputAction::Newline),
            Focus::Dictionary => Action::Dictionary(DictionaryAction::Add),
            Focus::File => Action::File(FileAction::Correct),
        }),
        KeyCode::Backspace => Some(Action::TextInput(TextInputAction::Backspace)),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::TextInput(TextInputAction::Char(c)))
        }
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match translate(*key, state.focus) {
            Some(translated) => dispatcher.dispatch(translated),
            None => log::trace!("Unbound key: {:?}", key),
        }

        // Raw key events never reach the reducer
        false
    }
}
