//! Patch rule trait and core types
//!
//! Provides the [`PatchRule`] trait for one guarded text transformation,
//! and the [`PatchContext`] every rule reads its triggers from.

use ryze_intent::{StyleAttributes, StyleExtractor, DEFAULT_BRAND, MODIFY_BRAND};

/// Per-request inputs shared by all rules
///
/// Built once from the follow-up prompt; rules never see the raw
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchContext {
    prompt: String,
    lowered: String,
    color: String,
    brand: Option<String>,
}

impl PatchContext {
    /// Extract color and brand from a prompt
    #[must_use]
    pub fn from_prompt(prompt: &str, extractor: &StyleExtractor) -> Self {
        Self {
            prompt: prompt.to_string(),
            lowered: prompt.to_lowercase(),
            color: extractor.extract_color(prompt),
            brand: extractor.find_brand(prompt),
        }
    }

    /// Original prompt
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Requested color (palette default when none named)
    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Brand the prompt explicitly named
    #[inline]
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Brand for an injected navbar
    #[inline]
    #[must_use]
    pub fn navbar_brand(&self) -> &str {
        self.brand().unwrap_or(MODIFY_BRAND)
    }

    /// Style for filling template fragments
    #[must_use]
    pub fn style(&self) -> StyleAttributes {
        StyleAttributes::new(self.color.clone(), self.brand().unwrap_or(DEFAULT_BRAND))
    }

    /// Case-insensitive substring test on the prompt
    #[inline]
    #[must_use]
    pub fn mentions(&self, phrase: &str) -> bool {
        self.lowered.contains(phrase)
    }

    /// Whether any phrase is mentioned
    #[must_use]
    pub fn mentions_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.mentions(p))
    }
}

/// What a fired rule reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Imperative plan step, unnumbered
    pub plan: String,
    /// Past-tense explanation line, without bullet
    pub explanation: String,
}

impl LogEntry {
    /// Create a log entry
    #[inline]
    #[must_use]
    pub fn new(plan: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            explanation: explanation.into(),
        }
    }
}

/// Output of a fired rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// Rewritten artifact text
    pub text: String,
    /// Log lines for this rule
    pub log: LogEntry,
}

impl Patched {
    /// Create a patch result
    #[inline]
    #[must_use]
    pub fn new(text: String, log: LogEntry) -> Self {
        Self { text, log }
    }
}

/// One guarded transformation of artifact text
///
/// # Contract
/// - Pure: the same text and context always give the same result
/// - `None` means the rule did not fire (trigger absent, guard marker
///   present, or no insertion point); it then contributes nothing to the
///   logs
pub trait PatchRule: Send + Sync + std::fmt::Debug {
    /// Stable rule name (for logging)
    fn name(&self) -> &'static str;

    /// Apply the rule
    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched>;
}
