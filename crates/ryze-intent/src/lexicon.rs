//! Keyword lexicon
//!
//! Maps each [`Archetype`] to the words that characterize it. Entries keep
//! their insertion order; the classifier walks them in that order and the
//! first maximum wins, so reordering entries changes tie outcomes.

use crate::archetype::Archetype;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Archetype → keyword set, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: IndexMap<Archetype, HashSet<String>>,
}

impl Lexicon {
    /// Create an empty lexicon
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in lexicon
    ///
    /// Multi-word entries ("sign in", "how it works", ...) are kept as-is.
    /// Tokens never contain whitespace, so they cannot match; removing them
    /// would still change nothing, but they document the intended vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_entry(
                Archetype::Dashboard,
                &[
                    "dashboard", "analytics", "admin", "charts", "graphs", "sidebar", "overview",
                    "stats", "metrics", "panel", "console",
                ],
            )
            .with_entry(
                Archetype::Login,
                &[
                    "login",
                    "sign in",
                    "signin",
                    "authentication",
                    "register",
                    "signup",
                    "password",
                    "email",
                    "auth",
                    "account",
                ],
            )
            .with_entry(
                Archetype::Form,
                &[
                    "form",
                    "contact",
                    "input",
                    "message",
                    "feedback",
                    "submit",
                    "survey",
                    "questionnaire",
                    "inputs",
                ],
            )
            .with_entry(
                Archetype::Landing,
                &[
                    "landing",
                    "home",
                    "website",
                    "hero",
                    "marketing",
                    "product",
                    "features",
                    "pricing",
                    "showcase",
                    "startup",
                    "saas",
                    "footer",
                    "how it works",
                    "get started",
                    "sections",
                ],
            )
            .with_entry(
                Archetype::Portfolio,
                &[
                    "portfolio", "resume", "cv", "personal", "profile", "projects", "work",
                    "developer", "designer", "showcase",
                ],
            )
            .with_entry(
                Archetype::Ecommerce,
                &[
                    "ecommerce",
                    "shop",
                    "store",
                    "product",
                    "cart",
                    "buy",
                    "sell",
                    "checkout",
                    "marketplace",
                    "retail",
                ],
            )
            .with_entry(
                Archetype::Generic,
                &[
                    "app",
                    "site",
                    "platform",
                    "page",
                    "section",
                    "view",
                    "component",
                    "interface",
                    "web app",
                    "application",
                ],
            )
    }

    /// Add keywords for an archetype
    ///
    /// Keywords are lowercased. Extending an existing archetype keeps its
    /// original position.
    #[must_use]
    pub fn with_entry(mut self, archetype: Archetype, keywords: &[&str]) -> Self {
        self.entries
            .entry(archetype)
            .or_default()
            .extend(keywords.iter().map(|k| k.to_lowercase()));
        self
    }

    /// Keywords for one archetype
    #[inline]
    #[must_use]
    pub fn keywords(&self, archetype: Archetype) -> Option<&HashSet<String>> {
        self.entries.get(&archetype)
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, &HashSet<String>)> {
        self.entries.iter().map(|(a, k)| (*a, k))
    }

    /// Number of archetypes with entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
