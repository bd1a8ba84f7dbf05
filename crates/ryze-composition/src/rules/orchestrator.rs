//! Full-site assembly
//!
//! One request ("full app", "complete website", "landing page") that
//! forces navbar, hero, features and footer in their enterprise variants.
//! Each part keeps its own guard and anchor; a part whose anchor is
//! missing is skipped without affecting the others.

use crate::fragments;
use crate::markers;
use crate::rule::{LogEntry, PatchContext, PatchRule, Patched};
use crate::rules::sections::insert_footer;
use crate::text::{
    insert_after_first, insert_after_first_from, offset_of, replace_first, replace_first_from,
};

/// Enterprise landing-page orchestrator
#[derive(Debug, Clone, Copy, Default)]
pub struct OrchestratorRule;

impl OrchestratorRule {
    fn inject_navbar(text: &str) -> Option<String> {
        let start = text.find(markers::RETURN_OPEN)?;
        let opening = format!(
            "{}\n{}\n{}\n",
            markers::RETURN_OPEN,
            fragments::ENTERPRISE_WRAPPER_OPEN,
            fragments::ENTERPRISE_NAVBAR
        );
        let opened = replace_first(text, markers::RETURN_OPEN, &opening)?;
        if opened.contains(markers::WRAPPER_CLOSE) {
            return Some(opened);
        }
        let after = start + opening.len();
        Some(
            replace_first_from(&opened, after, markers::RETURN_CLOSE, "</div>\n);")
                .unwrap_or(opened),
        )
    }

    fn inject_hero(text: &str) -> Option<String> {
        if text.contains(markers::WELCOME) {
            return None;
        }
        let start = offset_of(text, markers::NAVBAR);
        insert_after_first_from(
            text,
            start,
            markers::SELF_CLOSE_LINE,
            &format!("{}\n", fragments::ENTERPRISE_HERO),
        )
    }

    fn inject_features(text: &str) -> Option<String> {
        if text.contains(markers::FEATURE) {
            return None;
        }
        insert_after_first(
            text,
            markers::ENTERPRISE_HERO_CLOSE,
            &format!("\n{}", fragments::ENTERPRISE_FEATURES),
        )
    }

    fn inject_footer(text: &str) -> Option<String> {
        if text.contains(markers::FOOTER) {
            return None;
        }
        insert_footer(text, fragments::ENTERPRISE_FOOTER)
    }
}

impl PatchRule for OrchestratorRule {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["full app", "complete website", "landing page"])
            || text.contains(markers::NAVBAR)
        {
            return None;
        }

        let steps: [fn(&str) -> Option<String>; 4] = [
            Self::inject_navbar,
            Self::inject_hero,
            Self::inject_features,
            Self::inject_footer,
        ];

        let mut current = text.to_string();
        let mut changed = false;
        for step in steps {
            if let Some(next) = step(&current) {
                current = next;
                changed = true;
            }
        }

        if !changed {
            return None;
        }

        Some(Patched::new(
            current,
            LogEntry::new(
                "ORCHESTRATOR: Assembled complete SaaS Landing Page architecture.",
                "Generated Full-Stack Landing Page structure.",
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryze_intent::StyleExtractor;
    use ryze_test_utils::{assert_ordered, count_of, MAIN_LAYOUT, PLAIN_COMPONENT};

    fn ctx(prompt: &str) -> PatchContext {
        PatchContext::from_prompt(prompt, &StyleExtractor::new())
    }

    #[test]
    fn assembles_all_four_parts_in_order() {
        let patched = OrchestratorRule
            .apply(MAIN_LAYOUT, &ctx("turn this into a full app"))
            .unwrap();
        let text = &patched.text;

        assert_ordered(text, r#"<Navbar brand="Ryze Enterprise""#, "Ship Your Idea");
        assert_ordered(text, "Ship Your Idea", "AI Powered");
        assert_ordered(text, "AI Powered", "<p>Content</p>");
        assert_ordered(text, "Ryze AI Inc.", "</main>");
        assert_eq!(count_of(text, fragments::ENTERPRISE_WRAPPER_OPEN), 1);
        assert_ordered(text, "</main>", "</div>\n);");
    }

    #[test]
    fn wrapper_is_not_closed_twice() {
        let text = "function App() {\n  return (\n<div>\n</div>\n);\n}";
        let patched = OrchestratorRule.apply(text, &ctx("landing page")).unwrap();
        assert_eq!(count_of(&patched.text, "</div>\n);"), 1);
    }

    #[test]
    fn guards_skip_parts_individually() {
        let text = "function App() {\n  return (\n<main><p>Welcome</p><footer>x</footer></main>\n  );\n}";
        let patched = OrchestratorRule
            .apply(text, &ctx("complete website"))
            .unwrap();
        assert!(patched.text.contains("<Navbar"));
        assert!(!patched.text.contains("Ship Your Idea"));
        assert!(!patched.text.contains("AI Powered"));
        assert_eq!(count_of(&patched.text, "<footer"), 1);
    }

    #[test]
    fn does_not_fire_with_navbar_or_without_anchors() {
        assert!(OrchestratorRule
            .apply("<Navbar /> return (", &ctx("full app"))
            .is_none());
        assert!(OrchestratorRule
            .apply("<p>Welcome</p>", &ctx("full app"))
            .is_none());
        assert!(OrchestratorRule
            .apply(PLAIN_COMPONENT, &ctx("make it red"))
            .is_none());
    }
}
