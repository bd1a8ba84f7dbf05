//! Ryze Intent Engine
//!
//! Symbolic prompt understanding: keyword-frequency classification into a
//! screen archetype plus color and brand extraction.
//!
//! # Core Concepts
//!
//! - [`Archetype`]: The fixed set of screen categories
//! - [`Lexicon`]: Ordered archetype → keyword table
//! - [`IntentClassifier`]: Intersection-count scoring with first-max tie-break
//! - [`StyleExtractor`]: Palette color and brand name extraction
//!
//! # Example
//!
//! ```rust
//! use ryze_intent::{Archetype, IntentClassifier, StyleExtractor};
//!
//! let classifier = IntentClassifier::default();
//! let extractor = StyleExtractor::new();
//!
//! let prompt = "Create a red dashboard called Nova";
//! assert_eq!(classifier.classify(prompt), Archetype::Dashboard);
//! assert_eq!(extractor.extract(prompt).brand_name, "Nova");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod archetype;
mod classifier;
mod lexicon;
mod style;
mod tokens;

pub use archetype::Archetype;
pub use classifier::IntentClassifier;
pub use lexicon::Lexicon;
pub use style::{
    StyleAttributes, StyleExtractor, DEFAULT_BRAND, DEFAULT_COLOR, INTENT_PALETTE, MODIFY_BRAND,
};
pub use tokens::TokenSet;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
