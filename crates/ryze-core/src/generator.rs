//! UI generator
//!
//! The synchronous core behind both request paths:
//! - Generation: classify → extract style → fill template
//! - Modification: extract style → run the patch pipeline
//!
//! Both are pure per call; the generator only holds read-only tables.

use crate::error::RyzeError;
use crate::types::{GenerateResponse, GenerationMeta, ModifyResponse};
use ryze_artifact::Artifact;
use ryze_composition::PatchPipeline;
use ryze_intent::{IntentClassifier, Lexicon, StyleExtractor};
use ryze_templates::TemplateLibrary;
use std::sync::Arc;
use std::time::Instant;

/// Prompt-to-component generator
///
/// Cheap to clone; every table is shared.
#[derive(Debug, Clone)]
pub struct UiGenerator {
    classifier: IntentClassifier,
    extractor: StyleExtractor,
    templates: TemplateLibrary,
    pipeline: PatchPipeline,
}

impl UiGenerator {
    /// Assemble a generator from its parts
    #[must_use]
    pub fn new(
        classifier: IntentClassifier,
        extractor: StyleExtractor,
        templates: TemplateLibrary,
        pipeline: PatchPipeline,
    ) -> Self {
        Self {
            classifier,
            extractor,
            templates,
            pipeline,
        }
    }

    /// Generator with the built-in lexicon, palette, templates and rules
    #[must_use]
    pub fn standard() -> Self {
        let extractor = StyleExtractor::new();
        Self::new(
            IntentClassifier::new(Arc::new(Lexicon::standard())),
            extractor.clone(),
            TemplateLibrary::standard(),
            PatchPipeline::standard(extractor),
        )
    }

    /// Generate a component from a description
    ///
    /// # Errors
    /// Returns [`RyzeError::InvalidInput`] if the prompt is blank
    pub fn generate(&self, prompt: &str) -> Result<GenerateResponse, RyzeError> {
        if prompt.trim().is_empty() {
            return Err(RyzeError::invalid_input("prompt is required"));
        }

        let started = Instant::now();

        let intent = self.classifier.classify(prompt);
        let style = self.extractor.extract(prompt);
        let template = self.templates.get(intent);
        let code = template.fill(&style);

        let processing_time_ms = round_ms(started.elapsed().as_secs_f64() * 1000.0);
        let artifact = Artifact::new(code);
        tracing::info!(
            %intent,
            color = %style.primary_color,
            brand = %style.brand_name,
            artifact = %artifact.hash().short(),
            processing_time_ms,
            "generated component"
        );

        let explanation = format!(
            "I analyzed your request using a Symbolic NLP engine.\n\
             - **Intent Detected**: {label} (Based on keyword frequency)\n\
             - **Style Extraction**: Primary Color = '{color}', Brand = '{brand}'\n\
             - **Architecture**: Selected the optimal {intent} layout pattern from the deterministic library.\n\
             - **Processing Time**: {processing_time_ms}ms",
            label = intent.label(),
            color = style.primary_color,
            brand = style.brand_name,
        );

        let plan = format!(
            "1. **Analyze Intent**: '{prompt}' -> {intent}\n\
             2. **Extract Entities**: Color: {color}, Brand: {brand}\n\
             3. **Select Template**: {template_name}\n\
             4. **Compile**: Inject variables and validate structure.",
            color = style.primary_color,
            brand = style.brand_name,
            template_name = template.name(),
        );

        Ok(GenerateResponse {
            plan,
            code: artifact.into_text(),
            explanation,
            meta: GenerationMeta {
                intent,
                processing_time_ms,
            },
        })
    }

    /// Apply a follow-up instruction to an existing component
    ///
    /// # Errors
    /// Returns [`RyzeError::InvalidInput`] if either input is blank
    pub fn modify(&self, prompt: &str, current_code: &str) -> Result<ModifyResponse, RyzeError> {
        let artifact = Artifact::parse(current_code)?;
        let report = self.pipeline.run(prompt, &artifact)?;

        Ok(ModifyResponse {
            plan: report.plan,
            code: report.artifact.into_text(),
            explanation: report.explanation,
        })
    }
}

impl Default for UiGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

// Two decimals, as reported to clients.
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryze_intent::Archetype;
    use ryze_templates::unfilled_placeholders;
    use ryze_test_utils::MAIN_LAYOUT;

    #[test]
    fn generate_fills_template() {
        let generator = UiGenerator::standard();
        let resp = generator
            .generate("Create a red dashboard called Nova")
            .unwrap();

        assert_eq!(resp.meta.intent, Archetype::Dashboard);
        assert!(resp.meta.processing_time_ms >= 0.0);
        assert!(resp.code.contains("bg-red-500"));
        assert!(resp.code.contains(r#"brand="Nova""#));
        assert!(unfilled_placeholders(&resp.code).is_empty());
    }

    #[test]
    fn generate_reports_plan_and_explanation() {
        let resp = UiGenerator::standard()
            .generate("a login page")
            .unwrap();
        assert!(resp
            .plan
            .starts_with("1. **Analyze Intent**: 'a login page' -> login\n"));
        assert!(resp.plan.contains("3. **Select Template**: login_v1.0.js"));
        assert!(resp.explanation.contains("- **Intent Detected**: Login (Based"));
        assert!(resp
            .explanation
            .contains("Primary Color = 'blue', Brand = 'Ryze AI'"));
    }

    #[test]
    fn generate_rejects_blank_prompt() {
        let generator = UiGenerator::standard();
        for prompt in ["", "   \n"] {
            let err = generator.generate(prompt).unwrap_err();
            assert!(matches!(err, RyzeError::InvalidInput(ref m) if m == "prompt is required"));
        }
    }

    #[test]
    fn unmatched_prompt_uses_generic_template() {
        let resp = UiGenerator::standard().generate("xyz123").unwrap();
        assert_eq!(resp.meta.intent, Archetype::Generic);
        assert!(resp.code.starts_with("export default function GenericPage()"));
    }

    #[test]
    fn modify_rejects_missing_input() {
        let generator = UiGenerator::standard();
        let err = generator.modify("", MAIN_LAYOUT).unwrap_err();
        assert_eq!(err.to_string(), "prompt and artifact required");
        let err = generator.modify("make it red", "").unwrap_err();
        assert_eq!(err.to_string(), "prompt and artifact required");
        let err = generator.modify("make it red", " \n  ").unwrap_err();
        assert!(matches!(err, RyzeError::InvalidInput(_)));
    }

    #[test]
    fn modify_runs_pipeline() {
        let resp = UiGenerator::standard()
            .modify("add a footer", MAIN_LAYOUT)
            .unwrap();
        assert!(resp.code.contains("<footer"));
        assert!(resp.explanation.starts_with("I performed a constrained iterative update:"));
        assert!(resp.plan.contains("3. Appended professional Footer."));
    }

    #[test]
    fn round_ms_keeps_two_decimals() {
        assert!((round_ms(1.23456) - 1.23).abs() < f64::EPSILON);
        assert!((round_ms(0.005) - 0.01).abs() < 1e-9);
    }
}
