//! Application state

mod app;
mod input;
mod output;
mod session;
mod status_bar;

pub use app::{AppState, Focus};
pub use input::InputField;
pub use output::{CorrectionOutput, OutputBody, SuggestionStyle};
pub use session::{Phase, SessionState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
