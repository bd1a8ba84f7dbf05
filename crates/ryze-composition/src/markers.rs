//! Text markers used as guards and anchors
//!
//! Guards are presence tests that keep a rule from firing twice; anchors
//! are the substrings fragments are inserted next to. All matching is
//! plain substring search.

/// Navbar presence
pub const NAVBAR: &str = "<Navbar";
/// Sidebar presence
pub const SIDEBAR: &str = "<Sidebar";
/// Chart presence
pub const CHART: &str = "<Chart";
/// Footer presence, and the testimonials anchor
pub const FOOTER: &str = "<footer";
/// Bare top-level heading
pub const HEADING: &str = "<h1>";
/// Greeting text found in dashboard and login templates
pub const WELCOME: &str = "Welcome";
/// First feature card
pub const FEATURE: &str = "Feature 1";
/// Testimonial quote
pub const TESTIMONIAL: &str = "user says";
/// Pricing section comment
pub const PRICING_COMMENT: &str = "RYZE_PRICING_SECTION";
/// Pricing section id
pub const PRICING_ID: &str = r#"id="pricing""#;

/// Start of the returned markup
pub const RETURN_OPEN: &str = "return (";
/// End of the returned markup
pub const RETURN_CLOSE: &str = ");";
/// Close of the main content area
pub const MAIN_CLOSE: &str = "</main>";
/// Close of an injected wrapper
pub const WRAPPER_CLOSE: &str = "</div>\n);";
/// Opening line of the basic wrapper, without its `<div`; only the gray
/// shade matches, so a recolored wrapper gets no hero
pub const WRAPPER_OPEN_LINE: &str = "className=\"min-h-screen bg-gray-50 dark:bg-black\">\n";
/// Full-height wrapper class prefix
pub const FULL_HEIGHT_CLASS: &str = "className=\"min-h-screen";
/// Self-closing tag end
pub const SELF_CLOSE: &str = "/>";
/// Self-closing tag end at end of line
pub const SELF_CLOSE_LINE: &str = "/>\n";
/// End of the gradient hero
pub const HERO_CLOSE: &str = "</div></div>";
/// End of the full-site hero
pub const ENTERPRISE_HERO_CLOSE: &str = "</button></div>";
/// Generic container close
pub const DIV_CLOSE: &str = "</div>";
