use crate::actions::{Action, DictionaryAction, GlobalAction};
use crate::reducers::{session_reducer, status_bar_reducer};
use crate::state::{AppState, Focus};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(state, global),
        Action::TextInput(input) => {
            let focus = state.focus;
            let changed = state.focused_field_mut().apply(input);
            if changed && focus == Focus::Editor {
                state.session.debounce_pending = true;
            }
            state
        }
        Action::Correction(correction) => {
            session_reducer::reduce_correction(state, correction)
        }
        Action::File(file) => session_reducer::reduce_file(state, file),
        Action::Dictionary(DictionaryAction::Added { .. }) => {
            state.dictionary_word.clear();
            state
        }
        Action::Dictionary(_) | Action::Export(_) => state,
        Action::StatusBar(status) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status);
            state
        }
    }
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::FocusNext => {
            state.focus = state.focus.next();
        }
        GlobalAction::FocusPrevious => {
            state.focus = state.focus.previous();
        }
        GlobalAction::Clear => {
            log::debug!("Clearing session");
            state.editor.clear();
            state.dictionary_word.clear();
            state.file_path.clear();
            state.output = None;
            state.session.reset();
        }
        GlobalAction::KeyPressed(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CorrectionAction, TextInputAction};
    use proofline_client::CorrectionReport;
    use proofline_config::AppConfig;

    fn type_text(mut state: AppState, text: &str) -> AppState {
        for c in text.chars() {
            state = reduce(state, &Action::TextInput(TextInputAction::Char(c)));
        }
        state
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = AppState::new(AppConfig::default());
        state = type_text(state, "teh");
        assert!(state.session.debounce_pending);

        state = reduce(state, &Action::Global(GlobalAction::FocusNext));
        state = type_text(state, "ferris");

        assert_eq!(state.editor.value(), "teh");
        assert_eq!(state.dictionary_word.value(), "ferris");
    }

    #[test]
    fn test_editing_other_fields_does_not_schedule_correction() {
        let mut state = AppState::new(AppConfig::default());
        state = reduce(state, &Action::Global(GlobalAction::FocusPrevious));
        state = type_text(state, "notes.txt");
        assert_eq!(state.file_path.value(), "notes.txt");
        assert!(!state.session.debounce_pending);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = AppState::new(AppConfig::default());
        state = type_text(state, "I has a dog");
        state.dictionary_word.set("ferris");
        state.file_path.set("notes.txt");
        state = reduce(state, &Action::Correction(CorrectionAction::Request));
        state = reduce(
            state,
            &Action::Correction(CorrectionAction::Succeeded {
                seq: 1,
                request_text: "I has a dog".to_string(),
                report: CorrectionReport {
                    corrected: "I have a dog".to_string(),
                    ..Default::default()
                },
            }),
        );
        assert!(state.output.is_some());

        state = reduce(state, &Action::Global(GlobalAction::Clear));

        assert_eq!(state.editor.value(), "");
        assert_eq!(state.dictionary_word.value(), "");
        assert_eq!(state.file_path.value(), "");
        assert!(state.output.is_none());
        assert_eq!(state.session.last_corrected_text, "");
        assert!(!state.session.debounce_pending);
        assert_eq!(state.session.last_applied_seq, 1);
    }

    #[test]
    fn test_added_word_clears_field() {
        let mut state = AppState::new(AppConfig::default());
        state.dictionary_word.set("ferris");
        state = reduce(
            state,
            &Action::Dictionary(DictionaryAction::Added {
                word: "ferris".to_string(),
            }),
        );
        assert_eq!(state.dictionary_word.value(), "");
    }
}
