//! Page section injections
//!
//! Each rule is keyword-triggered, skipped when its marker is already
//! present, and inserts one fragment at the first matching anchor.

use crate::fragments;
use crate::markers;
use crate::rule::{LogEntry, PatchContext, PatchRule, Patched};
use crate::text::{
    insert_after_first_from, insert_before_first, offset_of, replace_first, replace_first_from,
};

/// Wraps the returned markup and puts a navbar at its top
#[derive(Debug, Clone, Copy, Default)]
pub struct NavbarRule;

impl PatchRule for NavbarRule {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["navbar", "navigation"]) || text.contains(markers::NAVBAR) {
            return None;
        }

        let opening = format!(
            "{}\n{}\n{}\n",
            markers::RETURN_OPEN,
            fragments::WRAPPER_OPEN,
            fragments::navbar(ctx.navbar_brand())
        );
        let text = wrap_return(text, &opening)?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Injected Navigation Bar component with responsive layout.",
                "Added <Navbar> component to the top of the view hierarchy.",
            ),
        ))
    }
}

/// Replace the first `return (` with `opening` and close the wrapper at the
/// first `);` that follows it
pub(crate) fn wrap_return(text: &str, opening: &str) -> Option<String> {
    let start = text.find(markers::RETURN_OPEN)?;
    let opened = replace_first(text, markers::RETURN_OPEN, opening)?;
    let after = start + opening.len();
    Some(
        replace_first_from(&opened, after, markers::RETURN_CLOSE, "</div>\n);")
            .unwrap_or(opened),
    )
}

/// Gradient hero below the navbar or at the top of the wrapper
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroRule;

impl PatchRule for HeroRule {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["hero", "banner"])
            || text.contains(markers::HEADING)
            || text.contains(markers::WELCOME)
        {
            return None;
        }

        let text = if text.contains(markers::NAVBAR) {
            let start = offset_of(text, markers::NAVBAR);
            insert_after_first_from(
                text,
                start,
                markers::SELF_CLOSE,
                &format!("\n{}", fragments::HERO),
            )
        } else {
            insert_after_first_from(
                text,
                0,
                markers::WRAPPER_OPEN_LINE,
                &format!("{}\n", fragments::HERO),
            )
        }?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Generated conversion-optimized Hero Section.",
                "Added gradient Hero section with CTAs.",
            ),
        ))
    }
}

/// Three-column feature grid after the hero, the navbar, or inside `<main>`
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturesRule;

impl PatchRule for FeaturesRule {
    fn name(&self) -> &'static str {
        "features"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["features", "benefits"]) || text.contains(markers::FEATURE) {
            return None;
        }

        let fragment = format!("\n{}", fragments::FEATURES);
        let text = if text.contains(fragments::HERO_HEADLINE) {
            let start = offset_of(text, fragments::HERO_HEADLINE);
            insert_after_first_from(text, start, markers::HERO_CLOSE, &fragment)
        } else if text.contains(markers::NAVBAR) {
            let start = offset_of(text, markers::NAVBAR);
            insert_after_first_from(text, start, markers::SELF_CLOSE, &fragment)
        } else {
            insert_before_first(
                text,
                markers::MAIN_CLOSE,
                &format!("{}\n", fragments::FEATURES),
            )
        }?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Added Features Grid with hover effects.",
                "Created 3-column Features section using Card components.",
            ),
        ))
    }
}

/// Insert a footer before `</main>`, else before the wrapper's close
pub(crate) fn insert_footer(text: &str, footer: &str) -> Option<String> {
    insert_before_first(text, markers::MAIN_CLOSE, &format!("{footer}\n"))
        .or_else(|| insert_before_first(text, markers::WRAPPER_CLOSE, &format!("{footer}\n")))
}

/// Copyright footer
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterRule;

impl PatchRule for FooterRule {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions("footer") || text.contains(markers::FOOTER) {
            return None;
        }

        let text = insert_footer(text, fragments::FOOTER)?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Appended professional Footer.",
                "Added clean Footer with copyright and links.",
            ),
        ))
    }
}

/// Testimonial cards before the footer or inside `<main>`
#[derive(Debug, Clone, Copy, Default)]
pub struct TestimonialsRule;

impl PatchRule for TestimonialsRule {
    fn name(&self) -> &'static str {
        "testimonials"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["testimonials", "reviews"]) || text.contains(markers::TESTIMONIAL)
        {
            return None;
        }

        let fragment = format!("{}\n", fragments::TESTIMONIALS);
        let text = insert_before_first(text, markers::FOOTER, &fragment)
            .or_else(|| insert_before_first(text, markers::MAIN_CLOSE, &fragment))?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Added Social Proof section with user testimonials.",
                "Created trusted Testimonials grid.",
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ryze_intent::StyleExtractor;
    use ryze_test_utils::{assert_ordered, count_of, BARE_WRAPPER, MAIN_LAYOUT, PLAIN_COMPONENT};

    fn ctx(prompt: &str) -> PatchContext {
        PatchContext::from_prompt(prompt, &StyleExtractor::new())
    }

    const SIMPLE: &str = "function App() {\n  return (\n    <p>Hi</p>\n  );\n}";

    #[test]
    fn navbar_wraps_returned_markup() {
        let patched = NavbarRule.apply(SIMPLE, &ctx("add a navbar")).unwrap();
        let expected = format!(
            "function App() {{\n  return (\n{}\n{}\n\n    <p>Hi</p>\n  </div>\n);\n}}",
            fragments::WRAPPER_OPEN,
            fragments::navbar("Ryze App")
        );
        assert_eq!(patched.text, expected);
    }

    #[test]
    fn navbar_closes_after_return_not_before() {
        let text = "function App() {\n  const [a, b] = React.useState(0);\n  return (\n    <p>Hi</p>\n  );\n}";
        let patched = NavbarRule.apply(text, &ctx("navigation please")).unwrap();
        assert!(patched.text.contains("React.useState(0);\n"));
        assert_ordered(&patched.text, "<p>Hi</p>", "</div>\n);");
    }

    #[test]
    fn navbar_uses_named_brand() {
        let patched = NavbarRule.apply(SIMPLE, &ctx("navbar named Orbit")).unwrap();
        assert!(patched.text.contains(r#"<Navbar brand="Orbit""#));
    }

    #[test]
    fn navbar_skips_without_return_or_when_present() {
        assert!(NavbarRule.apply("<p/>", &ctx("navbar")).is_none());
        let once = NavbarRule.apply(SIMPLE, &ctx("navbar")).unwrap().text;
        assert!(NavbarRule.apply(&once, &ctx("navbar")).is_none());
    }

    #[test]
    fn hero_goes_after_navbar() {
        let with_nav = NavbarRule.apply(SIMPLE, &ctx("navbar")).unwrap().text;
        let patched = HeroRule.apply(&with_nav, &ctx("hero")).unwrap();
        assert_ordered(&patched.text, "<Navbar", fragments::HERO_HEADLINE);
        assert_ordered(&patched.text, fragments::HERO_HEADLINE, "<p>Hi</p>");
        assert!(patched.text.contains(&format!(" />\n{}", fragments::HERO)));
    }

    #[test]
    fn hero_goes_inside_basic_wrapper() {
        let patched = HeroRule.apply(BARE_WRAPPER, &ctx("a banner")).unwrap();
        assert!(patched.text.contains(&format!(
            "{}\n{}\n</div>",
            fragments::WRAPPER_OPEN,
            fragments::HERO
        )));
    }

    #[test]
    fn hero_skips_recolored_wrapper() {
        let recolored = BARE_WRAPPER.replace("bg-gray-50", "bg-red-50");
        assert!(HeroRule.apply(&recolored, &ctx("hero")).is_none());
    }

    #[test]
    fn hero_respects_guards_and_anchors() {
        assert!(HeroRule.apply("<h1>Title</h1>", &ctx("hero")).is_none());
        assert!(HeroRule.apply("Welcome back", &ctx("hero")).is_none());
        assert!(HeroRule.apply(PLAIN_COMPONENT, &ctx("hero")).is_none());
        assert!(HeroRule.apply(BARE_WRAPPER, &ctx("make it red")).is_none());
    }

    #[test]
    fn features_follow_the_hero() {
        let with_hero = HeroRule.apply(BARE_WRAPPER, &ctx("hero")).unwrap().text;
        let patched = FeaturesRule.apply(&with_hero, &ctx("features")).unwrap();
        assert!(patched
            .text
            .contains(&format!("{}\n{}", fragments::HERO, fragments::FEATURES)));
    }

    #[test]
    fn features_fall_back_to_main() {
        let patched = FeaturesRule.apply(MAIN_LAYOUT, &ctx("list the benefits")).unwrap();
        assert!(patched
            .text
            .contains(&format!("{}\n</main>", fragments::FEATURES)));
        assert!(FeaturesRule.apply(PLAIN_COMPONENT, &ctx("features")).is_none());
        assert!(FeaturesRule.apply("Feature 1 </main>", &ctx("features")).is_none());
    }

    #[test]
    fn footer_prefers_main_then_wrapper() {
        let in_main = FooterRule.apply(MAIN_LAYOUT, &ctx("footer")).unwrap().text;
        assert!(in_main.contains(&format!("{}\n</main>", fragments::FOOTER)));

        let in_wrapper = FooterRule.apply(BARE_WRAPPER, &ctx("footer")).unwrap().text;
        assert!(in_wrapper.contains(&format!("{}\n</div>\n);", fragments::FOOTER)));

        assert!(FooterRule.apply(PLAIN_COMPONENT, &ctx("footer")).is_none());
    }

    #[test]
    fn footer_is_idempotent() {
        let once = FooterRule.apply(MAIN_LAYOUT, &ctx("footer")).unwrap().text;
        assert!(FooterRule.apply(&once, &ctx("footer")).is_none());
        assert_eq!(count_of(&once, "<footer"), 1);
    }

    #[test]
    fn testimonials_sit_before_footer() {
        let with_footer = FooterRule.apply(MAIN_LAYOUT, &ctx("footer")).unwrap().text;
        let patched = TestimonialsRule
            .apply(&with_footer, &ctx("reviews"))
            .unwrap();
        assert_ordered(&patched.text, "Trusted by Developers", "<footer");

        let in_main = TestimonialsRule.apply(MAIN_LAYOUT, &ctx("testimonials")).unwrap();
        assert_ordered(&in_main.text, "Trusted by Developers", "</main>");
        assert!(TestimonialsRule.apply(BARE_WRAPPER, &ctx("testimonials")).is_none());
    }
}
