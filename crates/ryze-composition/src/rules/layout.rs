//! Layout and data blocks: sidebar, charts, pricing

use crate::fragments;
use crate::markers;
use crate::rule::{LogEntry, PatchContext, PatchRule, Patched};
use crate::text::{insert_before_first, insert_before_last, replace_first};
use regex::{NoExpand, Regex};
use ryze_templates::{fill_placeholders, PRICING_SECTION};

/// Sidebar as first child of the first `<div>`, with a flex row wrapper
#[derive(Debug, Clone)]
pub struct SidebarRule {
    first_div: Regex,
}

impl SidebarRule {
    /// Compile the container pattern
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_div: Regex::new(r"<div[^>]*>").expect("valid container pattern"),
        }
    }
}

impl Default for SidebarRule {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for SidebarRule {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["sidebar", "drawer"]) || text.contains(markers::SIDEBAR) {
            return None;
        }

        let flexed = replace_first(
            text,
            markers::FULL_HEIGHT_CLASS,
            &format!("{} flex", markers::FULL_HEIGHT_CLASS),
        )?;
        let container = self.first_div.find(&flexed)?;
        let insertion = format!("{}\n{}", container.as_str(), fragments::SIDEBAR);
        let text = self
            .first_div
            .replacen(&flexed, 1, NoExpand(&insertion))
            .into_owned();

        Some(Patched::new(
            text,
            LogEntry::new(
                "Integrated Sidebar navigation panel.",
                "Added <Sidebar> component and updated layout to Flexbox 'row'.",
            ),
        ))
    }
}

/// Bar and line charts in the requested color
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRule;

impl PatchRule for ChartRule {
    fn name(&self) -> &'static str {
        "chart"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !ctx.mentions_any(&["chart", "graph"]) || text.contains(markers::CHART) {
            return None;
        }

        let fragment = format!("{}\n", fragments::charts(ctx.color()));
        let text = insert_before_first(text, markers::MAIN_CLOSE, &fragment)
            .or_else(|| insert_before_last(text, markers::DIV_CLOSE, &fragment))?;

        Some(Patched::new(
            text,
            LogEntry::new(
                "Visualized data with interactive Charts.",
                "Added Bar and Line <Chart> components.",
            ),
        ))
    }
}

/// Three-tier pricing section before `</main>` or at the end
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingRule;

impl PatchRule for PricingRule {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn apply(&self, text: &str, ctx: &PatchContext) -> Option<Patched> {
        if !(ctx.mentions("pricing") && ctx.mentions("section"))
            || text.contains(markers::PRICING_COMMENT)
            || text.contains(markers::PRICING_ID)
        {
            return None;
        }

        let section = fill_placeholders(PRICING_SECTION, &ctx.style());
        let text = insert_before_first(text, markers::MAIN_CLOSE, &format!("{section}\n"))
            .unwrap_or_else(|| format!("{}{section}\n", text.trim_end()));

        Some(Patched::new(
            text,
            LogEntry::new(
                "Inserted a deterministic Pricing section snippet before the main footer.",
                "Added a structured pricing section using the shared component library.",
            ),
        ))
    }
}
