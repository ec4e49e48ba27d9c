//! Parsed document model
//!
//! A [`Doc`] owns the token sequence of one property description plus a
//! precomputed children table, so tree walks never re-scan the token list.
//! Documents are immutable once built.

use crate::error::{Error, Result};
use crate::token::Token;

/// A dependency-parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Doc {
    tokens: Vec<Token>,
    /// children[i] = indices of tokens whose head is i, ascending.
    children: Vec<Vec<usize>>,
}

impl Doc {
    /// Build a document from tokens, validating head indices and computing
    /// the children table.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let len = tokens.len();
        let mut children = vec![Vec::new(); len];
        for token in &tokens {
            if token.head >= len {
                return Err(Error::HeadOutOfBounds {
                    token: token.i,
                    head: token.head,
                    len,
                });
            }
            // A root is its own head; it is not its own child.
            if token.head != token.i {
                children[token.head].push(token.i);
            }
        }
        Ok(Self { tokens, children })
    }

    #[inline]
    pub fn token(&self, i: usize) -> &Token {
        &self.tokens[i]
    }

    /// Syntactic children of token `i`, in document order.
    #[inline]
    pub fn children(&self, i: usize) -> &[usize] {
        &self.children[i]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Builder for constructing documents programmatically (mostly in tests and
/// when adapting a parser that doesn't speak CoNLL-U).
#[derive(Debug, Default)]
pub struct DocBuilder {
    tokens: Vec<Token>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; `head` is the index of its syntactic head.
    pub fn token(
        mut self,
        text: &str,
        lemma: &str,
        tag: &str,
        dep: &str,
        head: usize,
    ) -> Self {
        let i = self.tokens.len();
        self.tokens.push(Token::new(i, text, lemma, tag, dep, head));
        self
    }

    /// Append a sentence root (head points at itself).
    pub fn root(mut self, text: &str, lemma: &str, tag: &str) -> Self {
        let i = self.tokens.len();
        self.tokens.push(Token::new(i, text, lemma, tag, "ROOT", i));
        self
    }

    pub fn build(self) -> Result<Doc> {
        Doc::from_tokens(self.tokens)
    }
}

/// Collapse runs of spaces to a single space.
///
/// Applied to raw description text before it is handed to a parser. Only
/// plain spaces are collapsed; tabs and newlines pass through untouched.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            prev_space = false;
            out.push(ch);
        }
    }
    out
}
