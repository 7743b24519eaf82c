//! Export Middleware
//!
//! Copy, download and report export of the last corrected text. Each
//! action checks synchronously that something was corrected, then does the
//! clipboard or file I/O on the runtime and reports the outcome in the
//! status bar.

use crate::actions::{Action, DownloadKind, ExportAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::report::{build_report, REPORT_FILE_NAME};
use crate::state::AppState;
use crate::utils::clipboard;
use std::path::PathBuf;
use tokio::runtime::Handle;

pub struct ExportMiddleware {
    runtime: Handle,
}

impl ExportMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    fn copy(&self, state: &AppState, dispatcher: &Dispatcher) {
        if !state.session.has_corrected_text() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Nothing to copy yet.",
                "copy",
            )));
            return;
        }

        let text = state.session.last_corrected_text.clone();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let status = match clipboard::copy(text).await {
                Ok(()) => StatusBarAction::success("Copied to clipboard", "copy"),
                Err(e) => {
                    log::error!("Copy failed: {:#}", e);
                    StatusBarAction::error(format!("Copy failed: {}", e), "copy")
                }
            };
            dispatcher.dispatch(Action::StatusBar(status));
        });
    }

    fn download(&self, kind: DownloadKind, state: &AppState, dispatcher: &Dispatcher) {
        if !state.session.has_corrected_text() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                kind.empty_message(),
                "download",
            )));
            return;
        }

        let path = state.config.download_dir.join(kind.file_name());
        self.write(path, state.session.last_corrected_text.clone(), "download", dispatcher);
    }

    fn export_report(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(output) = &state.output else {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Nothing to export yet.",
                "export",
            )));
            return;
        };

        let path = state.config.download_dir.join(REPORT_FILE_NAME);
        self.write(path, build_report(output), "export", dispatcher);
    }

    fn write(&self, path: PathBuf, content: String, source: &'static str, dispatcher: &Dispatcher) {
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let status = match tokio::fs::write(&path, content).await {
                Ok(()) => {
                    log::info!("Saved {}", path.display());
                    StatusBarAction::success(format!("Saved {}", path.display()), source)
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", path.display(), e);
                    StatusBarAction::error(
                        format!("Unable to save {}: {}", path.display(), e),
                        source,
                    )
                }
            };
            dispatcher.dispatch(Action::StatusBar(status));
        });
    }
}

impl Middleware for ExportMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Export(ExportAction::Copy) => self.copy(state, dispatcher),
            Action::Export(ExportAction::Download(kind)) => {
                self.download(*kind, state, dispatcher)
            }
            Action::Export(ExportAction::Report) => self.export_report(state, dispatcher),
            _ => {}
        }
        true
    }
}
