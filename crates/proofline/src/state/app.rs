//! Application State

use super::{CorrectionOutput, InputField, SessionState, StatusBarState};
use crate::theme::Theme;
use proofline_config::AppConfig;

/// Input field that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Multi-line text to correct
    #[default]
    Editor,
    /// Word to add to the custom dictionary
    Dictionary,
    /// Path of a .txt file to correct
    File,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Editor => Self::Dictionary,
            Self::Dictionary => Self::File,
            Self::File => Self::Editor,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Editor => Self::File,
            Self::Dictionary => Self::Editor,
            Self::File => Self::Dictionary,
        }
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    /// Text being corrected
    pub editor: InputField,
    /// Word to add to the dictionary
    pub dictionary_word: InputField,
    /// Path of the file to upload
    pub file_path: InputField,
    /// Request bookkeeping shared by the text and file flows
    pub session: SessionState,
    /// Last applied correction (None until the first success, and after Clear)
    pub output: Option<CorrectionOutput>,
    pub status_bar: StatusBarState,
    pub config: AppConfig,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            editor: InputField::multi_line(),
            dictionary_word: InputField::single_line(),
            file_path: InputField::single_line(),
            session: SessionState::default(),
            output: None,
            status_bar: StatusBarState::default(),
            config,
            theme: Theme::default(),
        }
    }

    /// Trimmed path in the file field, if one was entered
    pub fn file_to_correct(&self) -> Option<&str> {
        let path = self.file_path.value().trim();
        (!path.is_empty()).then_some(path)
    }

    /// The field that currently has focus
    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            Focus::Editor => &mut self.editor,
            Focus::Dictionary => &mut self.dictionary_word,
            Focus::File => &mut self.file_path,
        }
    }
}
