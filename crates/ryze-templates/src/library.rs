//! Template library
//!
//! Archetype → template body, embedded at compile time and shared
//! read-only. Lookups for an archetype without a body fall back to the
//! dashboard template.

use crate::placeholder::fill_placeholders;
use indexmap::IndexMap;
use ryze_intent::{Archetype, StyleAttributes};
use std::sync::Arc;

/// Version tag reported in generation plans
pub const TEMPLATE_VERSION: &str = "1.0";

/// Archetype used when a lookup misses
pub const FALLBACK_ARCHETYPE: Archetype = Archetype::Dashboard;

/// Three-tier pricing block inserted by the pricing patch rule
///
/// Starts with two newlines and the `[RYZE_PRICING_SECTION]` marker
/// comment; the section carries `id="pricing"`.
pub const PRICING_SECTION: &str = include_str!("../templates/pricing_section.jsx");

const DASHBOARD: &str = include_str!("../templates/dashboard.jsx");
const LOGIN: &str = include_str!("../templates/login.jsx");
const FORM: &str = include_str!("../templates/form.jsx");
const LANDING: &str = include_str!("../templates/landing.jsx");
const PORTFOLIO: &str = include_str!("../templates/portfolio.jsx");
const ECOMMERCE: &str = include_str!("../templates/ecommerce.jsx");
const GENERIC: &str = include_str!("../templates/generic.jsx");

/// One archetype's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    archetype: Archetype,
    body: &'static str,
}

impl Template {
    /// Archetype this body implements
    #[inline]
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Raw body with placeholders
    #[inline]
    #[must_use]
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// File-style name used in plans, e.g. `dashboard_v1.0.js`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}_v{TEMPLATE_VERSION}.js", self.archetype)
    }

    /// Body with placeholders replaced
    #[must_use]
    pub fn fill(&self, style: &StyleAttributes) -> String {
        fill_placeholders(self.body, style)
    }
}

/// Archetype → template table
///
/// Cheap to clone.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Arc<IndexMap<Archetype, &'static str>>,
}

impl TemplateLibrary {
    /// Library holding only the given bodies
    #[must_use]
    pub fn from_bodies(bodies: impl IntoIterator<Item = (Archetype, &'static str)>) -> Self {
        Self {
            templates: Arc::new(bodies.into_iter().collect()),
        }
    }

    /// The built-in library covering every archetype
    #[must_use]
    pub fn standard() -> Self {
        Self::from_bodies([
            (Archetype::Dashboard, DASHBOARD),
            (Archetype::Login, LOGIN),
            (Archetype::Form, FORM),
            (Archetype::Landing, LANDING),
            (Archetype::Portfolio, PORTFOLIO),
            (Archetype::Ecommerce, ECOMMERCE),
            (Archetype::Generic, GENERIC),
        ])
    }

    /// Template for an archetype, falling back to the dashboard
    ///
    /// A library built with [`TemplateLibrary::from_bodies`] may lack the
    /// dashboard too; the built-in dashboard body is used then.
    #[must_use]
    pub fn get(&self, archetype: Archetype) -> Template {
        if let Some(body) = self.templates.get(&archetype) {
            return Template { archetype, body };
        }

        tracing::warn!(intent = %archetype, "no template for archetype, using fallback");
        Template {
            archetype: FALLBACK_ARCHETYPE,
            body: self
                .templates
                .get(&FALLBACK_ARCHETYPE)
                .copied()
                .unwrap_or(DASHBOARD),
        }
    }

    /// Whether an archetype has its own body
    #[inline]
    #[must_use]
    pub fn contains(&self, archetype: Archetype) -> bool {
        self.templates.contains_key(&archetype)
    }

    /// Fill the template for an archetype
    #[must_use]
    pub fn fill(&self, archetype: Archetype, style: &StyleAttributes) -> String {
        self.get(archetype).fill(style)
    }

    /// Number of archetypes with bodies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::unfilled_placeholders;

    #[test]
    fn standard_covers_every_archetype() {
        let library = TemplateLibrary::standard();
        assert_eq!(library.len(), Archetype::ALL.len());
        for archetype in Archetype::ALL {
            assert!(library.contains(archetype));
            assert_eq!(library.get(archetype).archetype(), archetype);
        }
    }

    #[test]
    fn bodies_export_a_component() {
        let library = TemplateLibrary::standard();
        for archetype in Archetype::ALL {
            let body = library.get(archetype).body();
            assert!(body.starts_with("export default function"), "{archetype}");
            assert!(body.contains("return ("), "{archetype}");
        }
    }

    #[test]
    fn missing_archetype_falls_back_to_dashboard() {
        let library = TemplateLibrary::from_bodies([(Archetype::Login, LOGIN)]);
        let template = library.get(Archetype::Portfolio);
        assert_eq!(template.archetype(), Archetype::Dashboard);
        assert_eq!(template.body(), DASHBOARD);
    }

    #[test]
    fn template_name_carries_version() {
        let library = TemplateLibrary::standard();
        assert_eq!(library.get(Archetype::Landing).name(), "landing_v1.0.js");
    }

    #[test]
    fn filled_dashboard_uses_color_and_brand() {
        let library = TemplateLibrary::standard();
        let code = library.fill(Archetype::Dashboard, &StyleAttributes::new("red", "Nova"));
        assert!(code.contains("bg-red-500"));
        assert!(code.contains(r#"brand="Nova""#));
        assert!(unfilled_placeholders(&code).is_empty());
    }

    #[test]
    fn pricing_section_has_markers() {
        assert!(PRICING_SECTION.starts_with("\n\n"));
        assert!(PRICING_SECTION.contains("RYZE_PRICING_SECTION"));
        assert!(PRICING_SECTION.contains(r#"id="pricing""#));
    }
}
