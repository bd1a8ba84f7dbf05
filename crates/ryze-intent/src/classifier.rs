//! Intent classification
//!
//! Scores every archetype by the number of its keywords present in the
//! prompt. The highest score wins; ties resolve to the archetype declared
//! first in the lexicon, and a prompt with no hits is [`Archetype::Generic`].

use crate::archetype::Archetype;
use crate::lexicon::Lexicon;
use crate::tokens::TokenSet;
use std::sync::Arc;

/// Keyword-frequency classifier
///
/// Cheap to clone; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    lexicon: Arc<Lexicon>,
}

impl IntentClassifier {
    /// Create a classifier over a lexicon
    #[inline]
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The lexicon in use
    #[inline]
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Per-archetype scores in lexicon order
    #[must_use]
    pub fn scores(&self, prompt: &str) -> Vec<(Archetype, usize)> {
        let tokens = TokenSet::from_prompt(prompt);
        self.lexicon
            .iter()
            .map(|(archetype, keywords)| (archetype, tokens.overlap(keywords)))
            .collect()
    }

    /// Classify a prompt
    #[must_use]
    pub fn classify(&self, prompt: &str) -> Archetype {
        let mut best = Archetype::Generic;
        let mut best_score = 0;

        // Strict comparison keeps the earliest archetype on ties.
        for (archetype, score) in self.scores(prompt) {
            if score > best_score {
                best = archetype;
                best_score = score;
            }
        }

        tracing::debug!(intent = %best, score = best_score, "classified prompt");
        best
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::standard()))
    }
}
