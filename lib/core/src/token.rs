use serde::{Deserialize, Serialize};

/// A single token of a dependency-parsed document.
///
/// Part-of-speech tags are fine-grained (PTB-style, e.g. `JJ`, `CD`, `VBN`)
/// and dependency labels follow the parser's scheme (e.g. `amod`, `nummod`,
/// `compound`, `nmod`). Root tokens point `head` at their own index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position of the token in the document.
    pub i: usize,
    /// Surface form as it appears in the text.
    pub text: String,
    /// Lemma (base form); phrase matching runs on this.
    pub lemma: String,
    /// Fine-grained part-of-speech tag.
    pub tag: String,
    /// Dependency label toward the head.
    pub dep: String,
    /// Index of the syntactic head.
    pub head: usize,
}

impl Token {
    pub fn new(
        i: usize,
        text: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
        dep: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            i,
            text: text.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            dep: dep.into(),
            head,
        }
    }

    /// True for the sentence root (head points at itself).
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.head == self.i
    }
}
