//! Ryze Composition System
//!
//! Iterative refinement of generated components through ordered,
//! marker-guarded text rules. There is no parser: every rule works on raw
//! text with substring and regex matching.
//!
//! # Core Concepts
//!
//! - [`PatchRule`]: One guarded transformation (trigger, guard, anchor)
//! - [`PatchContext`]: Lowercased prompt plus extracted color and brand
//! - [`PatchPipeline`]: Fixed rule order, accumulating plan and explanation
//! - [`markers`] / [`fragments`]: The guard strings and inserted markup
//!
//! # Example
//!
//! ```rust
//! use ryze_artifact::Artifact;
//! use ryze_composition::PatchPipeline;
//!
//! let pipeline = PatchPipeline::default();
//! let artifact = Artifact::new("<div className=\"bg-blue-500\"><main></main></div>");
//! let report = pipeline.run("make it red and add a footer", &artifact).unwrap();
//!
//! assert!(report.artifact.contains("bg-red-500"));
//! assert!(report.artifact.contains("<footer"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
pub mod fragments;
pub mod markers;
mod pipeline;
mod rule;
mod rules;
mod text;

pub use error::PatchError;
pub use pipeline::{PatchPipeline, PatchReport, EXPLANATION_HEADER};
pub use rule::{LogEntry, PatchContext, PatchRule, Patched};
pub use rules::{
    ChartRule, FeaturesRule, FooterRule, HeroRule, NavbarRule, OrchestratorRule, PricingRule,
    RebrandRule, RecolorRule, SidebarRule, TestimonialsRule, COLOR_PREFIXES, TAILWIND_FAMILIES,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
