//! Tokens produced by the tokenizer.

/// Kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of non-whitespace characters (may be empty at the edges).
    Content,
    /// A maximal run of whitespace characters.
    Whitespace,
}

/// An immutable run of characters from one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact characters of this token.
    pub text: String,
    /// Whether this is a content or whitespace run.
    pub kind: TokenKind,
}

impl Token {
    /// Create a content token.
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Content,
        }
    }

    /// Create a whitespace token.
    pub fn whitespace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Whitespace,
        }
    }

    /// True if the token has something other than whitespace in it.
    ///
    /// Empty content tokens at the edges of a text are blank.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Ordered tokens of one text. Concatenating them reproduces the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Reconstruct the source text.
    pub fn concat(&self) -> String {
        self.tokens.iter().map(Token::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tokens() {
        assert!(Token::content("").is_blank());
        assert!(Token::whitespace(" \n\t").is_blank());
        assert!(!Token::content("word").is_blank());
    }

    #[test]
    fn test_concat() {
        let seq = TokenSequence::from_tokens(vec![
            Token::content("a"),
            Token::whitespace("  "),
            Token::content("b"),
        ]);
        assert_eq!(seq.concat(), "a  b");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(1).map(Token::as_str), Some("  "));
    }
}
