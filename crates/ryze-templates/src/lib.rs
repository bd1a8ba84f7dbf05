//! Ryze Template Library
//!
//! Static component bodies per screen archetype, plus the reusable
//! fragments the patch engine inserts.
//!
//! # Example
//!
//! ```rust
//! use ryze_intent::{Archetype, StyleAttributes};
//! use ryze_templates::{unfilled_placeholders, TemplateLibrary};
//!
//! let library = TemplateLibrary::standard();
//! let code = library.fill(Archetype::Login, &StyleAttributes::new("green", "Acme"));
//! assert!(unfilled_placeholders(&code).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod library;
mod placeholder;

pub use library::{
    Template, TemplateLibrary, FALLBACK_ARCHETYPE, PRICING_SECTION, TEMPLATE_VERSION,
};
pub use placeholder::{fill_placeholders, unfilled_placeholders, BRAND_NAME, PRIMARY_COLOR};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
