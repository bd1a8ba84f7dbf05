//! Theme recoloring
//!
//! Rewrites every Tailwind color utility (`bg-indigo-600`, `from-sky-50`,
//! ...) to the requested color, keeping prefix and shade.

use crate::rule::{LogEntry, PatchContext, PatchRule, Patched};
use regex::{Captures, Regex};

/// Utility prefixes that take a color
pub const COLOR_PREFIXES: [&str; 9] = [
    "bg",
    "text",
    "border",
    "ring",
    "from",
    "to",
    "via",
    "shadow",
    "decoration",
];

/// Tailwind color families recognized for rewriting
pub const TAILWIND_FAMILIES: [&str; 22] = [
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// Global color-token substitution; fires on every request
#[derive(Debug, Clone)]
pub struct RecolorRule {
    pattern: Regex,
}

impl RecolorRule {
    /// Compile the token pattern
    #[must_use]
    pub fn new() -> Self {
        let pattern = format!(
            r"\b({})-({})-(\d+)\b",
            COLOR_PREFIXES.join("|"),
            TAILWIND_FAMILIES.join("|")
        );
        Self {
            pattern: Regex::new(&pattern).expect("valid recolor pattern"),
        }
    }

    /// Rewrite all color tokens to `color`
    #[must_use]
    pub fn recolor(&self, text: &str, color: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{}-{color}-{}", &caps[1], &caps[3])
            })
            .into_owned()
    }
}

impl Default for RecolorRule {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for RecolorRule {
    fn name(&self) -> &'static str {
        "recolor"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        let color = ctx.color();
        Some(Patched::new(
            self.recolor(text, color),
            LogEntry::new(
                format!(
                    "Swapped Tailwind color tokens to '{color}' while preserving layout and component structure."
                ),
                format!("Updated theme color tokens across the component tree to '{color}'."),
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
    fn rewrites_all_prefixes_and_keeps_shades() {
        let rule = RecolorRule::new();
        let out = rule.recolor(
            r#"<div className="bg-indigo-600 text-sky-50 hover:border-rose-300 from-teal-400">"#,
            "green",
        );
        assert_eq!(
            out,
            r#"<div className="bg-green-600 text-green-50 hover:border-green-300 from-green-400">"#
        );
    }

    #[test]
    fn leaves_unknown_tokens_alone() {
        let rule = RecolorRule::new();
        let text = "bg-background text-muted-foreground bg-white bg-blue-500/20 px-4";
        assert_eq!(
            rule.recolor(text, "red"),
            "bg-background text-muted-foreground bg-white bg-red-500/20 px-4"
        );
    }

    #[test]
    fn fires_even_without_tokens() {
        let rule = RecolorRule::new();
        let patched = rule.apply("<p>plain</p>", &ctx("whatever")).unwrap();
        assert_eq!(patched.text, "<p>plain</p>");
        assert!(patched.log.explanation.contains("'blue'"));
    }

    #[test]
    fn same_color_is_a_fixed_point() {
        let rule = RecolorRule::new();
        let once = rule.recolor("bg-red-500 text-blue-200", "red");
        assert_eq!(rule.recolor(&once, "red"), once);
    }
}
