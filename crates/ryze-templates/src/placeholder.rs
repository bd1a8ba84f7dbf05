//! Template placeholders
//!
//! Bodies carry `{{PRIMARY_COLOR}}` and `{{BRAND_NAME}}` tokens. Filling is
//! plain substitution of every occurrence; nothing else in the body is
//! interpreted.

use regex::Regex;
use ryze_intent::StyleAttributes;
use std::sync::OnceLock;

/// Primary color token
pub const PRIMARY_COLOR: &str = "{{PRIMARY_COLOR}}";

/// Brand name token
pub const BRAND_NAME: &str = "{{BRAND_NAME}}";

/// Replace every placeholder in `body`
#[must_use]
pub fn fill_placeholders(body: &str, style: &StyleAttributes) -> String {
    body.replace(PRIMARY_COLOR, &style.primary_color)
        .replace(BRAND_NAME, &style.brand_name)
}

/// Placeholder-shaped tokens (`{{UPPER_SNAKE}}`) left in `text`
///
/// JSX object literals such as `style={{ color: 'red' }}` are not counted.
#[must_use]
pub fn unfilled_placeholders(text: &str) -> Vec<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"\{\{[A-Z][A-Z0-9_]*\}\}").expect("valid pattern"));
    pattern.find_iter(text).map(|m| m.as_str()).collect()
}
