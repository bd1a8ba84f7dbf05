//! Screen archetypes
//!
//! The fixed set of UI categories a prompt can resolve to. Declaration
//! order matters: it is the order of the standard lexicon, which decides
//! classification ties.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI screen category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Admin/analytics dashboard
    Dashboard,
    /// Sign-in screen
    Login,
    /// Contact / feedback form
    Form,
    /// Marketing landing page
    Landing,
    /// Personal portfolio
    Portfolio,
    /// Product detail / shop page
    Ecommerce,
    /// Fallback when nothing matches
    Generic,
}

impl Archetype {
    /// All archetypes in declaration order
    pub const ALL: [Archetype; 7] = [
        Archetype::Dashboard,
        Archetype::Login,
        Archetype::Form,
        Archetype::Landing,
        Archetype::Portfolio,
        Archetype::Ecommerce,
        Archetype::Generic,
    ];

    /// Lowercase tag used on the wire and as template key
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Login => "login",
            Self::Form => "form",
            Self::Landing => "landing",
            Self::Portfolio => "portfolio",
            Self::Ecommerce => "ecommerce",
            Self::Generic => "generic",
        }
    }

    /// Capitalized label for human-readable explanations
    #[must_use]
    pub fn label(self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
