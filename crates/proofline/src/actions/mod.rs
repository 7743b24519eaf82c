//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (quit, focus, clear, raw keys)
//! - `TextInput`: edits applied to the focused input field
//! - Domain actions (`Correction`, `File`, `Dictionary`, `Export`) carrying
//!   both user intents and the results reported back by request tasks

pub mod correction;
pub mod dictionary;
pub mod export;
pub mod file;
pub mod global;
pub mod status_bar;
pub mod text_input;

pub use correction::CorrectionAction;
pub use dictionary::DictionaryAction;
pub use export::{DownloadKind, ExportAction};
pub use file::FileAction;
pub use global::GlobalAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Edit of the focused input field
    TextInput(TextInputAction),
    /// Live text correction
    Correction(CorrectionAction),
    /// File upload correction
    File(FileAction),
    /// Custom dictionary
    Dictionary(DictionaryAction),
    /// Copy, download and report export
    Export(ExportAction),
    /// Status bar feedback
    StatusBar(StatusBarAction),
}
