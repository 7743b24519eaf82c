//! Session Reducer
//!
//! Applies request results from the text and file flows. Both flows share
//! one sequence counter, so a late live result never overwrites a newer
//! file result and vice versa.

use crate::actions::{CorrectionAction, FileAction};
use crate::state::{AppState, CorrectionOutput};

pub fn reduce_correction(mut state: AppState, action: &CorrectionAction) -> AppState {
    match action {
        CorrectionAction::Request => {
            state.session.debounce_pending = false;
            state.session.start();
        }
        CorrectionAction::Succeeded {
            seq,
            request_text,
            report,
        } => {
            if state.session.finish(*seq) {
                state.output = Some(CorrectionOutput::from_report(
                    request_text,
                    report,
                    state.config.align_mode,
                    state.config.trailing_tokens,
                ));
                state.session.apply(*seq, &report.corrected);
            }
        }
        CorrectionAction::Failed { seq, error } => {
            if state.session.finish(*seq) {
                state.session.last_error = Some(error.clone());
            }
        }
    }
    state
}

pub fn reduce_file(mut state: AppState, action: &FileAction) -> AppState {
    match action {
        FileAction::Correct => {
            if state.file_to_correct().is_some() {
                state.session.start();
            }
        }
        FileAction::Succeeded { seq, file } => {
            if state.session.finish(*seq) {
                state.output = Some(CorrectionOutput::from_file(file));
                state.session.apply(*seq, &file.corrected);
            }
        }
        FileAction::Failed { seq, .. } => {
            state.session.finish(*seq);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OutputBody, Phase, SuggestionStyle};
    use pretty_assertions::assert_eq;
    use proofline_client::{CorrectionReport, FileCorrection, Suggestion};
    use proofline_config::AppConfig;
    use proofline_diff::{AlignMode, Segment, Token, TrailingPolicy};

    fn report(corrected: &str) -> CorrectionReport {
        CorrectionReport {
            corrected: corrected.to_string(),
            ..Default::default()
        }
    }

    fn succeeded(seq: u64, request_text: &str, corrected: &str) -> CorrectionAction {
        CorrectionAction::Succeeded {
            seq,
            request_text: request_text.to_string(),
            report: report(corrected),
        }
    }

    #[test]
    fn test_success_applies_diff() {
        let mut state = AppState::new(AppConfig::default());
        state = reduce_correction(state, &CorrectionAction::Request);
        assert_eq!(state.session.phase(), Phase::Requesting);

        state = reduce_correction(state, &succeeded(1, "I has a dog", "I have a dog"));

        assert_eq!(state.session.phase(), Phase::Idle);
        assert_eq!(state.session.last_corrected_text, "I have a dog");
        let output = state.output.expect("output applied");
        assert_eq!(output.suggestion_style, SuggestionStyle::WithCandidates);
        let OutputBody::Diff(segments) = output.body else {
            panic!("expected diff body");
        };
        assert_eq!(
            segments.iter().filter(|s| s.is_change()).collect::<Vec<_>>(),
            vec![&Segment::replace(Token::content("has"), Token::content("have"))]
        );
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut state = AppState::new(AppConfig::default());
        state = reduce_correction(state, &CorrectionAction::Request);
        state = reduce_correction(state, &CorrectionAction::Request);

        state = reduce_correction(state, &succeeded(2, "teh cat", "the cat"));
        state = reduce_correction(state, &succeeded(1, "teh", "the"));

        assert_eq!(state.session.last_corrected_text, "the cat");
        assert_eq!(state.session.last_applied_seq, 2);
        assert_eq!(state.session.phase(), Phase::Idle);
    }

    #[test]
    fn test_failure_keeps_output() {
        let mut state = AppState::new(AppConfig::default());
        state = reduce_correction(state, &CorrectionAction::Request);
        state = reduce_correction(state, &succeeded(1, "teh", "the"));
        let before = state.output.clone();

        state = reduce_correction(state, &CorrectionAction::Request);
        state = reduce_correction(
            state,
            &CorrectionAction::Failed {
                seq: 2,
                error: "Network error: connection refused".to_string(),
            },
        );

        assert_eq!(state.output, before);
        assert_eq!(state.session.last_corrected_text, "the");
        assert_eq!(
            state.session.last_error.as_deref(),
            Some("Network error: connection refused")
        );
        assert_eq!(state.session.phase(), Phase::Idle);

        // The next applied result clears the indicator
        state = reduce_correction(state, &CorrectionAction::Request);
        state = reduce_correction(state, &succeeded(3, "teh", "the"));
        assert_eq!(state.session.last_error, None);
    }

    #[test]
    fn test_configured_aligner_is_used() {
        let config = AppConfig {
            align_mode: AlignMode::Greedy,
            trailing_tokens: TrailingPolicy::Emit,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state = reduce_correction(state, &CorrectionAction::Request);
        state = reduce_correction(state, &succeeded(1, "a b c", "a b"));

        let Some(OutputBody::Diff(segments)) = state.output.map(|o| o.body) else {
            panic!("expected diff body");
        };
        assert_eq!(
            segments.last(),
            Some(&Segment::Delete(Token::content("c")))
        );
    }

    #[test]
    fn test_file_success_shows_plain_output() {
        let mut state = AppState::new(AppConfig::default());
        state.file_path.set("notes.txt");
        state = reduce_file(state, &FileAction::Correct);
        state = reduce_file(
            state,
            &FileAction::Succeeded {
                seq: 1,
                file: FileCorrection {
                    corrected: "Fixed text.".to_string(),
                    suggestions: vec![Suggestion {
                        from: "Fixd".to_string(),
                        to: "Fixed".to_string(),
                        candidates: vec![],
                        index: None,
                    }],
                    ..Default::default()
                },
            },
        );

        let output = state.output.expect("output applied");
        assert_eq!(output.body, OutputBody::Plain("Fixed text.".to_string()));
        assert_eq!(output.suggestion_style, SuggestionStyle::Compact);
        assert_eq!(output.suggestions.len(), 1);
        assert_eq!(state.session.last_corrected_text, "Fixed text.");
    }

    #[test]
    fn test_file_failure_does_not_set_live_indicator() {
        let mut state = AppState::new(AppConfig::default());
        state.file_path.set("notes.txt");
        state = reduce_file(state, &FileAction::Correct);
        state = reduce_file(
            state,
            &FileAction::Failed {
                seq: 1,
                error: "No file uploaded".to_string(),
            },
        );
        assert_eq!(state.session.last_error, None);
        assert_eq!(state.session.phase(), Phase::Idle);
        assert!(state.output.is_none());
    }
}
