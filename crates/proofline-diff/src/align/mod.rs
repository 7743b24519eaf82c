//! Alignment of an original token sequence against a corrected one.
//!
//! Two strategies share the [`Aligner`] trait:
//!
//! - [`GreedyAligner`]: single positional pass, no lookahead. Default.
//! - [`MinimalAligner`]: minimum token edit distance (Wagner-Fischer).
//!
//! Both guarantee that the corrected side of the output, concatenated,
//! equals the corrected text.

mod greedy;
mod minimal;

pub use greedy::GreedyAligner;
pub use minimal::MinimalAligner;

use crate::model::{Segment, TokenSequence};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};

/// Produces aligned segments from two token sequences.
pub trait Aligner: Send + Sync {
    /// Align `original` against `corrected`.
    fn align(&self, original: &TokenSequence, corrected: &TokenSequence) -> Vec<Segment>;
}

/// Which alignment strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignMode {
    /// Positional two-pointer scan.
    #[default]
    Greedy,
    /// True minimum edit distance on tokens.
    Minimal,
}

/// What the greedy aligner does with original tokens left over once the
/// corrected sequence is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingPolicy {
    /// Leftover original tokens contribute nothing.
    #[default]
    Drop,
    /// Leftover original tokens become [`Segment::Delete`].
    Emit,
}

impl AlignMode {
    /// Build the aligner for this mode.
    pub fn aligner(self, trailing: TrailingPolicy) -> Box<dyn Aligner> {
        match self {
            AlignMode::Greedy => Box::new(GreedyAligner::new(trailing)),
            AlignMode::Minimal => Box::new(MinimalAligner::new()),
        }
    }
}

/// Tokenize both texts and align them with the chosen strategy.
pub fn align_texts(
    mode: AlignMode,
    trailing: TrailingPolicy,
    original: &str,
    corrected: &str,
) -> Vec<Segment> {
    let original = tokenize(original);
    let corrected = tokenize(corrected);
    let segments = mode.aligner(trailing).align(&original, &corrected);
    log::trace!(
        "Aligned {} original / {} corrected tokens into {} segments ({:?})",
        original.len(),
        corrected.len(),
        segments.len(),
        mode
    );
    segments
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::segment::corrected_side;

    pub(crate) const SAMPLES: &[(&str, &str)] = &[
        ("", ""),
        ("", "hello world"),
        ("hello world", ""),
        ("teh", "the"),
        ("I has a dog", "I have a dog"),
        ("i dont know", "I don't know."),
        ("  leading space", "Leading space"),
        ("one two three", "three two one"),
        ("u r late", "you are late"),
        ("btw it works", "by the way it works"),
        ("line one\nline two", "Line one.\nLine two."),
        ("trailing words dropped here", "trailing"),
    ];

    #[test]
    fn test_every_mode_reconstructs_corrected_text() {
        for mode in [AlignMode::Greedy, AlignMode::Minimal] {
            for trailing in [TrailingPolicy::Drop, TrailingPolicy::Emit] {
                for (original, corrected) in SAMPLES {
                    let segments = align_texts(mode, trailing, original, corrected);
                    assert_eq!(
                        corrected_side(&segments),
                        *corrected,
                        "{mode:?}/{trailing:?} on {original:?} -> {corrected:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: AlignMode,
            trailing: TrailingPolicy,
        }
        let parsed: Wrapper =
            serde_json::from_str(r#"{"mode":"minimal","trailing":"emit"}"#).unwrap();
        assert_eq!(parsed.mode, AlignMode::Minimal);
        assert_eq!(parsed.trailing, TrailingPolicy::Emit);
    }
}
