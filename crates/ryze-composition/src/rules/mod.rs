//! Built-in patch rules

mod layout;
mod orchestrator;
mod rebrand;
mod recolor;
mod sections;

pub use layout::{ChartRule, PricingRule, SidebarRule};
pub use orchestrator::OrchestratorRule;
pub use rebrand::RebrandRule;
pub use recolor::{RecolorRule, COLOR_PREFIXES, TAILWIND_FAMILIES};
pub use sections::{FeaturesRule, FooterRule, HeroRule, NavbarRule, TestimonialsRule};
