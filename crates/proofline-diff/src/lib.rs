//! # proofline-diff
//!
//! Token-level alignment between an original text and its corrected version,
//! and rendering of the aligned result for display.
//!
//! ## Pipeline
//!
//! ```text
//!  original ──► tokenize ──┐
//!                          ├──► Aligner ──► Vec<Segment> ──► render_diff_markup
//!  corrected ─► tokenize ──┘
//! ```
//!
//! The crate is pure: it performs no I/O and knows nothing about the
//! correction service. The orchestrating application feeds it the request
//! text and the corrected text from the service response.
//!
//! ## Usage
//!
//! ```rust
//! use proofline_diff::{align_texts, render_diff_markup, AlignMode, TrailingPolicy};
//!
//! let segments = align_texts(AlignMode::Greedy, TrailingPolicy::Drop, "I has a dog", "I have a dog");
//! let markup = render_diff_markup(&segments);
//! assert_eq!(
//!     markup,
//!     r#"I <span class="hl-del">has</span><span class="hl-add">have</span> a dog"#
//! );
//! ```

pub mod align;
pub mod model;
pub mod render;
pub mod tokenizer;

pub use align::{align_texts, AlignMode, Aligner, GreedyAligner, MinimalAligner, TrailingPolicy};
pub use model::{Segment, SegmentKind, Token, TokenKind, TokenSequence};
pub use render::{render_diff_markup, render_plain_markup};
pub use tokenizer::tokenize;
