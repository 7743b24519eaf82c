//! Greedy two-pointer alignment.

use super::{Aligner, TrailingPolicy};
use crate::model::{Segment, TokenSequence};

/// Positional single-pass aligner.
///
/// At each step the first matching rule wins:
/// 1. identical token text: `Equal`, both cursors advance
/// 2. both tokens non-blank: `Replace`, both cursors advance
/// 3. otherwise: `Insert` of the corrected token, only the corrected cursor
///    advances
///
/// There is no lookahead, so reordered words render as a run of
/// replacements rather than a minimal diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAligner {
    trailing: TrailingPolicy,
}

impl GreedyAligner {
    pub fn new(trailing: TrailingPolicy) -> Self {
        Self { trailing }
    }
}

impl Aligner for GreedyAligner {
    fn align(&self, original: &TokenSequence, corrected: &TokenSequence) -> Vec<Segment> {
        let original = original.tokens();
        let corrected = corrected.tokens();
        let mut segments = Vec::with_capacity(corrected.len());
        let (mut i, mut j) = (0, 0);

        while i < original.len() && j < corrected.len() {
            let (orig, corr) = (&original[i], &corrected[j]);

            if orig.text == corr.text {
                segments.push(Segment::Equal(orig.clone()));
                i += 1;
                j += 1;
            } else if !orig.is_blank() && !corr.is_blank() {
                segments.push(Segment::replace(orig.clone(), corr.clone()));
                i += 1;
                j += 1;
            } else {
                segments.push(Segment::Insert(corr.clone()));
                j += 1;
            }
        }

        segments.extend(corrected[j..].iter().cloned().map(Segment::Insert));

        if self.trailing == TrailingPolicy::Emit {
            segments.extend(original[i..].iter().cloned().map(Segment::Delete));
        }

        segments
    }
}
