//! Ordered patch pipeline
//!
//! Runs every rule in sequence; each rule sees the text produced by the
//! rules before it. Only rules that fire contribute plan and explanation
//! lines, in firing order.

use crate::error::PatchError;
use crate::rule::{PatchContext, PatchRule};
use crate::rules::{
    ChartRule, FeaturesRule, FooterRule, HeroRule, NavbarRule, OrchestratorRule, PricingRule,
    RebrandRule, RecolorRule, SidebarRule, TestimonialsRule,
};
use ryze_artifact::Artifact;
use ryze_intent::StyleExtractor;
use std::sync::Arc;

/// Header line of every modification explanation
pub const EXPLANATION_HEADER: &str = "I performed a constrained iterative update:";

/// Result of one modification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Modified artifact
    pub artifact: Artifact,
    /// Numbered plan, one line per fired rule after the request line
    pub plan: String,
    /// Explanation header plus one bullet per fired rule
    pub explanation: String,
    /// Names of the rules that fired, in order
    pub applied: Vec<&'static str>,
}

/// Sequence of patch rules
///
/// Cheap to clone; rules are shared.
#[derive(Debug, Clone)]
pub struct PatchPipeline {
    rules: Vec<Arc<dyn PatchRule>>,
    extractor: StyleExtractor,
}

impl PatchPipeline {
    /// Pipeline with no rules
    #[must_use]
    pub fn new(extractor: StyleExtractor) -> Self {
        Self {
            rules: Vec::new(),
            extractor,
        }
    }

    /// The built-in rule order
    ///
    /// recolor, rebrand, navbar, hero, features, footer, testimonials,
    /// orchestrator, sidebar, chart, pricing
    #[must_use]
    pub fn standard(extractor: StyleExtractor) -> Self {
        Self::new(extractor)
            .with_rule(RecolorRule::new())
            .with_rule(RebrandRule::new())
            .with_rule(NavbarRule)
            .with_rule(HeroRule)
            .with_rule(FeaturesRule)
            .with_rule(FooterRule)
            .with_rule(TestimonialsRule)
            .with_rule(OrchestratorRule)
            .with_rule(SidebarRule::new())
            .with_rule(ChartRule)
            .with_rule(PricingRule)
    }

    /// Append a rule
    #[must_use]
    pub fn with_rule(mut self, rule: impl PatchRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Rule names in execution order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of rules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the pipeline has no rules
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the follow-up instruction `prompt` to `artifact`
    ///
    /// Callers holding untrusted text build the artifact with
    /// [`Artifact::parse`] so blank code never gets here.
    ///
    /// # Errors
    /// Returns [`PatchError::EmptyPrompt`] if the prompt is blank
    pub fn run(&self, prompt: &str, artifact: &Artifact) -> Result<PatchReport, PatchError> {
        if prompt.trim().is_empty() {
            return Err(PatchError::EmptyPrompt);
        }

        let ctx = PatchContext::from_prompt(prompt, &self.extractor);
        let mut text = artifact.as_str().to_string();
        let mut plan = vec![format!(
            "1. Detected iterative style change request in: '{prompt}'."
        )];
        let mut explanation = vec![EXPLANATION_HEADER.to_string()];
        let mut applied = Vec::new();

        for rule in &self.rules {
            let Some(patched) = rule.apply(&text, &ctx) else {
                continue;
            };
            tracing::debug!(rule = rule.name(), "patch rule fired");
            text = patched.text;
            plan.push(format!("{}. {}", plan.len() + 1, patched.log.plan));
            explanation.push(format!("- {}", patched.log.explanation));
            applied.push(rule.name());
        }

        let modified = Artifact::new(text);
        tracing::info!(
            from = %artifact.hash().short(),
            to = %modified.hash().short(),
            color = ctx.color(),
            rules = ?applied,
            "artifact modified"
        );

        Ok(PatchReport {
            artifact: modified,
            plan: plan.join("\n"),
            explanation: explanation.join("\n"),
            applied,
        })
    }
}

impl Default for PatchPipeline {
    fn default() -> Self {
        Self::standard(StyleExtractor::new())
    }
}
