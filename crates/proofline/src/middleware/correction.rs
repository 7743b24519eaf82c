//! Correction Middleware
//!
//! Owns every interaction with the correction service:
//! - live correction (debounced on editor edits, or explicit `Request`)
//! - file correction (reads the file, uploads it)
//! - custom dictionary
//!
//! Each text or file request uses the sequence number the session reducer
//! records when it reduces the same request action. Results are reported
//! back as actions carrying that number; the session reducer drops results
//! that are older than the last applied one.

use crate::actions::{
    Action, CorrectionAction, DictionaryAction, FileAction, GlobalAction, StatusBarAction,
    TextInputAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Focus};
use crate::utils::debounce::Debouncer;
use proofline_client::CorrectionService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const FALLBACK_FILE_NAME: &str = "upload.txt";

pub struct CorrectionMiddleware {
    service: Arc<dyn CorrectionService>,
    runtime: Handle,
    debouncer: Debouncer,
}

impl CorrectionMiddleware {
    pub fn new(service: Arc<dyn CorrectionService>, runtime: Handle, debounce: Duration) -> Self {
        Self {
            service,
            debouncer: Debouncer::new(runtime.clone(), debounce),
            runtime,
        }
    }

    /// Restart the quiet period if the edit changes the editor text
    fn on_editor_input(
        &mut self,
        input: &TextInputAction,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        let mut edited = state.editor.clone();
        if edited.apply(input) {
            self.debouncer
                .restart(dispatcher, Action::Correction(CorrectionAction::Request));
        }
    }

    fn correct_text(&self, state: &AppState, dispatcher: &Dispatcher) {
        let seq = state.session.next_seq();
        let text = state.editor.value().to_string();
        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let action = match service.correct(&text).await {
                Ok(report) => CorrectionAction::Succeeded {
                    seq,
                    request_text: text,
                    report,
                },
                Err(e) => {
                    log::warn!("Correction #{} failed: {}", seq, e);
                    CorrectionAction::Failed {
                        seq,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Correction(action));
        });
    }

    fn correct_file(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(path) = state.file_to_correct() else {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Please choose a .txt file first",
                "file",
            )));
            return;
        };

        let path = PathBuf::from(path);
        let file_name = upload_name(&path);
        let seq = state.session.next_seq();
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Correcting {}...", file_name),
            "file",
        )));

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let result = match tokio::fs::read(&path).await {
                Ok(content) => service
                    .correct_file(&file_name, content)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(format!("Unable to read {}: {}", path.display(), e)),
            };

            let action = match result {
                Ok(file) => FileAction::Succeeded { seq, file },
                Err(error) => {
                    log::warn!("File correction #{} failed: {}", seq, error);
                    FileAction::Failed { seq, error }
                }
            };
            dispatcher.dispatch(Action::File(action));
        });
    }

    fn add_word(&self, word: &str, dispatcher: &Dispatcher) {
        let word = word.trim();
        if word.is_empty() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Please enter a word first",
                "dictionary",
            )));
            return;
        }

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        let word = word.to_string();

        self.runtime.spawn(async move {
            let action = match service.add_word(&word).await {
                Ok(stored) => DictionaryAction::Added { word: stored },
                Err(e) => DictionaryAction::Failed {
                    error: e.to_string(),
                },
            };
            dispatcher.dispatch(Action::Dictionary(action));
        });
    }
}

/// Name sent with the upload: the path's file name
fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

impl Middleware for CorrectionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::TextInput(input) if state.focus == Focus::Editor => {
                self.on_editor_input(input, state, dispatcher);
            }
            Action::Correction(CorrectionAction::Request) => {
                self.debouncer.cancel();
                self.correct_text(state, dispatcher);
            }
            Action::Correction(CorrectionAction::Failed { seq, error })
                if !state.session.is_stale(*seq) =>
            {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    format!("Live correction unavailable: {}", error),
                    "correct",
                )));
            }
            Action::File(FileAction::Correct) => {
                self.correct_file(state, dispatcher);
            }
            Action::File(FileAction::Succeeded { seq, file }) if !state.session.is_stale(*seq) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!(
                        "File corrected ({} spelling fixes)",
                        file.suggestions.len()
                    ),
                    "file",
                )));
            }
            Action::File(FileAction::Failed { seq, error }) if !state.session.is_stale(*seq) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    error.clone(),
                    "file",
                )));
            }
            Action::Dictionary(DictionaryAction::Add) => {
                self.add_word(state.dictionary_word.value(), dispatcher);
            }
            Action::Dictionary(DictionaryAction::Added { word }) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Word \"{}\" added to dictionary.", word),
                    "dictionary",
                )));
            }
            Action::Dictionary(DictionaryAction::Failed { error }) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    error.clone(),
                    "dictionary",
                )));
            }
            Action::Global(GlobalAction::Clear) => {
                self.debouncer.cancel();
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info("Cleared", "clear")));
            }
            _ => {}
        }

        true
    }
}
