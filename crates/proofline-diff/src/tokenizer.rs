//! Split text into alternating content and whitespace tokens.

use crate::model::{Token, TokenSequence};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Tokenize a text.
///
/// Whitespace runs are kept as their own tokens instead of being discarded,
/// so the output alternates content, whitespace, content, ... and always
/// starts and ends with a content token. A text that starts or ends with
/// whitespace gets an empty content token at that edge; the empty string
/// yields a single empty content token.
///
/// # Example
/// ```
/// use proofline_diff::tokenize;
///
/// let tokens = tokenize(" hi  there");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(texts, vec!["", " ", "hi", "  ", "there"]);
/// ```
pub fn tokenize(text: &str) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut last = 0;

    for run in WHITESPACE_RUN.find_iter(text) {
        tokens.push(Token::content(&text[last..run.start()]));
        tokens.push(Token::whitespace(run.as_str()));
        last = run.end();
    }
    tokens.push(Token::content(&text[last..]));

    TokenSequence::from_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenKind;
    use pretty_assertions::assert_eq;

    fn texts(seq: &TokenSequence) -> Vec<&str> {
        seq.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_simple_sentence() {
        let seq = tokenize("I has a dog");
        assert_eq!(texts(&seq), vec!["I", " ", "has", " ", "a", " ", "dog"]);
    }

    #[test]
    fn test_empty_string() {
        let seq = tokenize("");
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.tokens()[0], Token::content(""));
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let seq = tokenize("  word\n");
        assert_eq!(texts(&seq), vec!["", "  ", "word", "\n", ""]);
    }

    #[test]
    fn test_only_whitespace() {
        let seq = tokenize(" \t ");
        assert_eq!(texts(&seq), vec!["", " \t ", ""]);
    }

    #[test]
    fn test_kinds_alternate() {
        let seq = tokenize("one two\n\nthree ");
        for (idx, token) in seq.iter().enumerate() {
            let expected = if idx % 2 == 0 {
                TokenKind::Content
            } else {
                TokenKind::Whitespace
            };
            assert_eq!(token.kind, expected, "token {idx} {:?}", token.text);
        }
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            "",
            " ",
            "plain",
            "  leading",
            "trailing  ",
            "multi\nline\r\ntext\twith  tabs",
            "unicode café naïve\u{00a0}nbsp",
            "punctuation, stays. attached!",
        ];
        for sample in samples {
            assert_eq!(tokenize(sample).concat(), sample);
        }
    }
}
