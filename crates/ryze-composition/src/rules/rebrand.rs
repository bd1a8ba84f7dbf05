//! Brand renaming

use crate::rule::{LogEntry, PatchContext, PatchRule, Patched};
use regex::{NoExpand, Regex};

const BRAND_ATTRIBUTE: &str = r#"brand=""#;

/// Rewrites every `brand="…"` attribute when the prompt names a brand
#[derive(Debug, Clone)]
pub struct RebrandRule {
    pattern: Regex,
}

impl RebrandRule {
    /// Compile the attribute pattern
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r#"brand="[^"]+""#).expect("valid brand attribute pattern"),
        }
    }
}

impl Default for RebrandRule {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for RebrandRule {
    fn name(&self) -> &'static str {
        "rebrand"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        let brand = ctx.brand()?;
        if !text.contains(BRAND_ATTRIBUTE) {
            return None;
        }

        let replacement = format!(r#"brand="{brand}""#);
        let text = self
            .pattern
            .replace_all(text, NoExpand(&replacement))
            .into_owned();

        Some(Patched::new(
            text,
            LogEntry::new(
                format!("Renamed the application brand to '{brand}'."),
                format!("Renamed application brand to '{brand}'."),
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryze_intent::StyleExtractor;

    fn ctx(prompt: &str) -> PatchContext {
        PatchContext::from_prompt(prompt, &StyleExtractor::new())
    }

    #[test]
    fn renames_every_brand_attribute() {
        let text = r#"<Navbar brand="Old" /><Footer brand="Old Co" />"#;
        let patched = RebrandRule::new()
            .apply(text, &ctx("rename it, it is now called Nova"))
            .unwrap();
        assert_eq!(patched.text, r#"<Navbar brand="Nova" /><Footer brand="Nova" />"#);
    }

    #[test]
    fn needs_explicit_brand() {
        let text = r#"<Navbar brand="Old" />"#;
        assert!(RebrandRule::new().apply(text, &ctx("make it red")).is_none());
    }

    #[test]
    fn needs_brand_attribute() {
        assert!(RebrandRule::new()
            .apply("<h1>Old</h1>", &ctx("called Nova"))
            .is_none());
    }

    #[test]
    fn dollar_signs_are_literal() {
        let patched = RebrandRule::new()
            .apply(r#"<Navbar brand="Old" />"#, &ctx("called $1 Store"))
            .unwrap();
        assert_eq!(patched.text, r#"<Navbar brand="$1 Store" />"#);
    }
}
