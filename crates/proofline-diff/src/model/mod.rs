//! Data model for tokens and aligned segments.

pub mod segment;
pub mod token;

pub use segment::{Segment, SegmentKind};
pub use token::{Token, TokenKind, TokenSequence};
