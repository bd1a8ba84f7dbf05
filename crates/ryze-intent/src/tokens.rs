//! Prompt tokenization

use std::collections::HashSet;

/// De-duplicated lowercase words of a prompt
///
/// Everything outside `[a-z0-9]` and whitespace is dropped before
/// splitting, so `"Sign-in!"` becomes the single token `"signin"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    /// Tokenize a prompt
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        let cleaned: String = prompt
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect();

        Self {
            tokens: cleaned.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Number of keywords present in this set
    #[must_use]
    pub fn overlap(&self, keywords: &HashSet<String>) -> usize {
        keywords.iter().filter(|k| self.tokens.contains(*k)).count()
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the prompt had no tokens
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
