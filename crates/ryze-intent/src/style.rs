//! Style entity extraction
//!
//! Pulls a primary color and a brand name out of a prompt with plain
//! pattern matching. Misses fall back to defaults; nothing here fails.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Color used when the prompt names none
pub const DEFAULT_COLOR: &str = "blue";

/// Brand used by generation when the prompt names none
pub const DEFAULT_BRAND: &str = "Ryze AI";

/// Brand used by the modification path's navbar when the prompt names none
pub const MODIFY_BRAND: &str = "Ryze App";

/// Color words recognized in prompts
///
/// Distinct from the Tailwind families the recolor rule rewrites.
pub const INTENT_PALETTE: [&str; 7] = ["blue", "red", "green", "purple", "orange", "gray", "black"];

// After "brand" the name must be quoted or capitalized, so prose such as
// "no brand mentioned" does not yield a brand.
const BRAND_PATTERN: &str = r#"(?i)(?:(?:called|named)\s+["']?([^"']+)["']?|brand\s+(?:["']([^"']+)["']?|((?-i:[A-Z0-9])[^"']*)))"#;

/// Extracted style entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttributes {
    /// Palette color, e.g. `"red"`
    pub primary_color: String,
    /// Product or company name
    pub brand_name: String,
}

impl StyleAttributes {
    /// Create attributes from explicit values
    #[must_use]
    pub fn new(primary_color: impl Into<String>, brand_name: impl Into<String>) -> Self {
        Self {
            primary_color: primary_color.into(),
            brand_name: brand_name.into(),
        }
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_BRAND)
    }
}

/// Color and brand extractor
///
/// Holds its palette and compiled pattern; build once and clone freely.
#[derive(Debug, Clone)]
pub struct StyleExtractor {
    palette: Arc<[String]>,
    brand_pattern: Regex,
}

impl StyleExtractor {
    /// Extractor with the standard palette
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(&INTENT_PALETTE)
    }

    /// Extractor recognizing a custom set of color words
    #[must_use]
    pub fn with_palette(palette: &[&str]) -> Self {
        Self {
            palette: palette.iter().map(|c| c.to_lowercase()).collect(),
            brand_pattern: Regex::new(BRAND_PATTERN).expect("valid brand pattern"),
        }
    }

    /// Recognized color words
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// First whitespace-separated word (in prompt order) that is a palette color
    ///
    /// Matching is exact per word: `"reddish"` and `"red,"` do not count.
    #[must_use]
    pub fn extract_color(&self, prompt: &str) -> String {
        prompt
            .to_lowercase()
            .split_whitespace()
            .find_map(|word| self.palette.iter().find(|c| c.as_str() == word))
            .map_or_else(|| DEFAULT_COLOR.to_string(), Clone::clone)
    }

    /// Brand named after `called`, `named` or `brand`, if any
    ///
    /// The capture stops at the first quote character, otherwise it runs to
    /// the end of the prompt. Surrounding quotes are trimmed; whitespace is
    /// kept as typed.
    #[must_use]
    pub fn find_brand(&self, prompt: &str) -> Option<String> {
        let captures = self.brand_pattern.captures(prompt)?;
        let captured = (1..=3).find_map(|i| captures.get(i))?.as_str();
        let brand = captured.trim_matches(|c: char| c == '"' || c == '\'');
        if brand.is_empty() {
            None
        } else {
            Some(brand.to_string())
        }
    }

    /// Brand name, defaulting to [`DEFAULT_BRAND`]
    #[must_use]
    pub fn extract_brand(&self, prompt: &str) -> String {
        self.find_brand(prompt)
            .unwrap_or_else(|| DEFAULT_BRAND.to_string())
    }

    /// Both entities with generation defaults
    #[must_use]
    pub fn extract(&self, prompt: &str) -> StyleAttributes {
        let attributes =
            StyleAttributes::new(self.extract_color(prompt), self.extract_brand(prompt));
        tracing::debug!(
            color = %attributes.primary_color,
            brand = %attributes.brand_name,
            "extracted style"
        );
        attributes
    }
}

impl Default for StyleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_prompt_order() {
        let extractor = StyleExtractor::new();
        assert_eq!(extractor.extract_color("I want a red and blue theme"), "red");
        assert_eq!(extractor.extract_color("Blue or green?"), "blue");
        assert_eq!(extractor.extract_color("a BLACK page"), "black");
    }

    #[test]
    fn color_requires_exact_word() {
        let extractor = StyleExtractor::new();
        assert_eq!(extractor.extract_color("reddish tones"), DEFAULT_COLOR);
        assert_eq!(extractor.extract_color("make it green."), DEFAULT_COLOR);
        assert_eq!(extractor.extract_color("teal"), DEFAULT_COLOR);
    }

    #[test]
    fn brand_stops_at_quote() {
        let extractor = StyleExtractor::new();
        assert_eq!(
            extractor.extract_brand(r#"Create an app called "Nova""#),
            "Nova"
        );
        assert_eq!(
            extractor.extract_brand("a shop named 'Acme Goods' for shoes"),
            "Acme Goods"
        );
    }

    #[test]
    fn unquoted_brand_runs_to_end() {
        let extractor = StyleExtractor::new();
        assert_eq!(
            extractor.extract_brand("Create a red dashboard called Nova"),
            "Nova"
        );
        assert_eq!(
            extractor.extract_brand("a landing page NAMED Star Forge  "),
            "Star Forge  "
        );
        assert_eq!(extractor.extract_brand("called Nova "), "Nova ");
    }

    #[test]
    fn brand_defaults() {
        let extractor = StyleExtractor::new();
        assert_eq!(extractor.extract_brand("no brand mentioned"), DEFAULT_BRAND);
        assert_eq!(extractor.extract_brand("nothing to see"), DEFAULT_BRAND);
        assert_eq!(extractor.find_brand("nothing to see"), None);
    }

    #[test]
    fn brand_keyword_needs_quoted_or_capitalized_name() {
        let extractor = StyleExtractor::new();
        assert_eq!(extractor.extract_brand("brand Lumen"), "Lumen");
        assert_eq!(extractor.extract_brand("use the brand 'lumen'"), "lumen");
        assert_eq!(extractor.extract_brand("an app called nova"), "nova");
    }

    #[test]
    fn extract_combines_both() {
        let extractor = StyleExtractor::new();
        let style = extractor.extract("a purple portfolio called Ada");
        assert_eq!(style, StyleAttributes::new("purple", "Ada"));
        assert_eq!(extractor.extract(""), StyleAttributes::default());
    }

    #[test]
    fn custom_palette() {
        let extractor = StyleExtractor::with_palette(&["Teal"]);
        assert_eq!(extractor.extract_color("teal and red"), "teal");
        assert_eq!(extractor.palette().len(), 1);
    }
}
