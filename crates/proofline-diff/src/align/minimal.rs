//! Minimum edit distance alignment on tokens.

use super::{Aligner, GreedyAligner, TrailingPolicy};
use crate::model::{Segment, Token, TokenSequence};

/// Largest cost table built before falling back to the greedy pass
/// (4M cells, 32 MB on 64-bit targets).
const DEFAULT_MAX_CELLS: usize = 4_000_000;

/// Wagner-Fischer alignment over tokens.
///
/// Insertions and deletions cost 1. A substitution costs 1 and is only
/// allowed between two non-blank tokens, so whitespace never turns into a
/// word. Memory is `O(n * m)` in the token counts; inputs whose table would
/// exceed `max_cells` are aligned greedily with leftover original tokens
/// emitted as deletions.
#[derive(Debug, Clone, Copy)]
pub struct MinimalAligner {
    max_cells: usize,
}

impl Default for MinimalAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimalAligner {
    pub fn new() -> Self {
        Self::with_max_cells(DEFAULT_MAX_CELLS)
    }

    pub fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Equal,
    Replace,
    Delete,
    Insert,
}

fn substitutable(a: &Token, b: &Token) -> bool {
    !a.is_blank() && !b.is_blank()
}

impl Aligner for MinimalAligner {
    fn align(&self, original: &TokenSequence, corrected: &TokenSequence) -> Vec<Segment> {
        let orig = original.tokens();
        let corr = corrected.tokens();
        let (n, m) = (orig.len(), corr.len());
        let width = m + 1;

        let cells = (n + 1).checked_mul(width).filter(|&cells| cells <= self.max_cells);
        let Some(cells) = cells else {
            log::warn!(
                "{} x {} tokens exceed the minimal diff limit, using the greedy pass",
                n,
                m
            );
            return GreedyAligner::new(TrailingPolicy::Emit).align(original, corrected);
        };

        // cost[i * width + j]: edits to turn orig[..i] into corr[..j]
        let mut cost = vec![0usize; cells];
        for i in 0..=n {
            cost[i * width] = i;
        }
        for j in 0..=m {
            cost[j] = j;
        }

        for i in 1..=n {
            for j in 1..=m {
                let (a, b) = (&orig[i - 1], &corr[j - 1]);
                let mut best = cost[(i - 1) * width + j].min(cost[i * width + j - 1]) + 1;
                if a.text == b.text {
                    best = best.min(cost[(i - 1) * width + j - 1]);
                } else if substitutable(a, b) {
                    best = best.min(cost[(i - 1) * width + j - 1] + 1);
                }
                cost[i * width + j] = best;
            }
        }

        let mut steps = Vec::with_capacity(n.max(m));
        let (mut i, mut j) = (n, m);
        while i > 0 || j > 0 {
            let here = cost[i * width + j];
            let step = if i > 0 && j > 0 {
                let (a, b) = (&orig[i - 1], &corr[j - 1]);
                let diagonal = cost[(i - 1) * width + j - 1];
                if a.text == b.text && here == diagonal {
                    Step::Equal
                } else if substitutable(a, b) && a.text != b.text && here == diagonal + 1 {
                    Step::Replace
                } else if here == cost[i * width + j - 1] + 1 {
                    Step::Insert
                } else {
                    Step::Delete
                }
            } else if j > 0 {
                Step::Insert
            } else {
                Step::Delete
            };

            match step {
                Step::Equal | Step::Replace => {
                    i -= 1;
                    j -= 1;
                }
                Step::Insert => j -= 1,
                Step::Delete => i -= 1,
            }
            steps.push((step, i, j));
        }

        steps
            .into_iter()
            .rev()
            .map(|(step, i, j)| match step {
                Step::Equal => Segment::Equal(orig[i].clone()),
                Step::Replace => Segment::replace(orig[i].clone(), corr[j].clone()),
                Step::Insert => Segment::Insert(corr[j].clone()),
                Step::Delete => Segment::Delete(orig[i].clone()),
            })
            .collect()
    }
}
