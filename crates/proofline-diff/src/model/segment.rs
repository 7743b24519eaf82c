//! Aligned output segments.

use super::token::Token;

/// One unit of aligned output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Token identical in both sequences.
    Equal(Token),
    /// Both sides have a non-blank token at this position and they differ.
    Replace {
        /// Token from the original text.
        deleted: Token,
        /// Token from the corrected text.
        inserted: Token,
    },
    /// Token present only in the corrected sequence.
    Insert(Token),
    /// Token present only in the original sequence.
    Delete(Token),
}

/// Discriminant of a [`Segment`], handy for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Equal,
    Replace,
    Insert,
    Delete,
}

impl Segment {
    /// Build a replace segment.
    pub fn replace(deleted: Token, inserted: Token) -> Self {
        Self::Replace { deleted, inserted }
    }

    /// The kind of this segment.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Equal(_) => SegmentKind::Equal,
            Segment::Replace { .. } => SegmentKind::Replace,
            Segment::Insert(_) => SegmentKind::Insert,
            Segment::Delete(_) => SegmentKind::Delete,
        }
    }

    /// Text this segment contributes to the corrected side.
    pub fn corrected_text(&self) -> &str {
        match self {
            Segment::Equal(token) | Segment::Insert(token) => token.as_str(),
            Segment::Replace { inserted, .. } => inserted.as_str(),
            Segment::Delete(_) => "",
        }
    }

    /// Text this segment consumed from the original side.
    pub fn original_text(&self) -> &str {
        match self {
            Segment::Equal(token) | Segment::Delete(token) => token.as_str(),
            Segment::Replace { deleted, .. } => deleted.as_str(),
            Segment::Insert(_) => "",
        }
    }

    /// True for every segment that is not [`Segment::Equal`].
    pub fn is_change(&self) -> bool {
        !matches!(self, Segment::Equal(_))
    }
}

/// Concatenate the corrected side of a segment list.
pub fn corrected_side(segments: &[Segment]) -> String {
    segments.iter().map(Segment::corrected_text).collect()
}

/// Concatenate the original side of a segment list.
pub fn original_side(segments: &[Segment]) -> String {
    segments.iter().map(Segment::original_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides() {
        let segments = vec![
            Segment::Equal(Token::content("I")),
            Segment::Equal(Token::whitespace(" ")),
            Segment::replace(Token::content("has"), Token::content("have")),
            Segment::Insert(Token::whitespace(" ")),
            Segment::Delete(Token::content("extra")),
        ];

        assert_eq!(corrected_side(&segments), "I have ");
        assert_eq!(original_side(&segments), "I hasextra");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Segment::Equal(Token::content("a")).kind(), SegmentKind::Equal);
        assert!(!Segment::Equal(Token::content("a")).is_change());
        assert!(Segment::Insert(Token::content("a")).is_change());
    }
}
