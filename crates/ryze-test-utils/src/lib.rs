//! Testing utilities for Ryze workspace
//!
//! Shared artifacts and assertions for patch and generation tests.

#![allow(missing_docs)]

use ryze_artifact::Artifact;
use ryze_intent::{Archetype, StyleAttributes};
use ryze_templates::TemplateLibrary;

/// Component with only the basic wrapper a navbar injection produces.
pub const BARE_WRAPPER: &str = "export default function App() {\n  return (\n<div className=\"min-h-screen bg-gray-50 dark:bg-black\">\n</div>\n);\n}";

/// Component with a `<main>` content area.
pub const MAIN_LAYOUT: &str = "export default function App() {\n  return (\n    <div className=\"min-h-screen bg-white\">\n      <main className=\"p-8\">\n        <p>Content</p>\n      </main>\n    </div>\n  );\n}";

/// Component with neither a wrapper nor a `<main>`.
pub const PLAIN_COMPONENT: &str = "export default function App() {\n  return (\n    <section className=\"p-4\"><span>Hi</span></section>\n  );\n}";

pub fn bare_wrapper() -> Artifact {
    Artifact::new(BARE_WRAPPER)
}

pub fn main_layout() -> Artifact {
    Artifact::new(MAIN_LAYOUT)
}

pub fn plain_component() -> Artifact {
    Artifact::new(PLAIN_COMPONENT)
}

/// Filled built-in template for an archetype.
pub fn template_artifact(archetype: Archetype, color: &str, brand: &str) -> Artifact {
    let code = TemplateLibrary::standard().fill(archetype, &StyleAttributes::new(color, brand));
    Artifact::new(code)
}

/// Byte offset of `needle`, panicking with context when absent.
pub fn position_of(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in artifact:\n{text}"))
}

/// Assert `first` appears before `second`.
pub fn assert_ordered(text: &str, first: &str, second: &str) {
    let a = position_of(text, first);
    let b = position_of(text, second);
    assert!(a < b, "expected {first:?} (at {a}) before {second:?} (at {b})");
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count_of(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}
