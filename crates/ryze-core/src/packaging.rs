//! Standalone HTML packaging
//!
//! Turns a component artifact into a single self-contained page: a pinned
//! CDN runtime, the component shim, the artifact itself and a small share
//! toolbar. The page is rendered in the browser by Babel standalone.

use crate::error::PackagingError;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// Page shell with `__RYZE_*__` slots
const SHELL: &str = include_str!("../assets/standalone.html");

const TITLE_SLOT: &str = "__RYZE_TITLE__";
const VIEW_URL_SLOT: &str = "__RYZE_VIEW_URL__";
const DOWNLOAD_URL_SLOT: &str = "__RYZE_DOWNLOAD_URL__";
const COMPONENT_SLOT: &str = "__RYZE_COMPONENT__";

/// Global the shell mounts into `#root`
pub const COMPONENT_GLOBAL: &str = "window.__RyzeComponent";

/// Title used when no prompt is supplied
pub const DEFAULT_TITLE: &str = "Ryze AI App";

/// Longest title kept from a prompt, in characters
pub const MAX_TITLE_CHARS: usize = 60;

/// Length of generated deployment identifiers
pub const ID_LENGTH: usize = 10;

/// Short random deployment identifier
///
/// Always ASCII alphanumeric, which also makes it safe as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeploymentId(String);

impl DeploymentId {
    /// Fresh random identifier of [`ID_LENGTH`] characters
    #[must_use]
    pub fn generate() -> Self {
        let id = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Validate an identifier received from a caller
    ///
    /// # Errors
    /// Returns [`PackagingError::InvalidId`] unless the input is 1 to 64
    /// ASCII alphanumeric characters
    pub fn parse(raw: &str) -> Result<Self, PackagingError> {
        if raw.is_empty() || raw.len() > 64 || !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(PackagingError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page title for a prompt
///
/// Trimmed, cut to [`MAX_TITLE_CHARS`], and [`DEFAULT_TITLE`] when blank.
#[must_use]
pub fn derive_title(prompt: Option<&str>) -> String {
    let trimmed = prompt.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    if trimmed.chars().count() <= MAX_TITLE_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_TITLE_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Make an artifact loadable inside the shell's script block
///
/// The first `export default` becomes an assignment to
/// [`COMPONENT_GLOBAL`]; `</script` is escaped so the code cannot close the
/// surrounding tag.
#[must_use]
pub fn prepare_component(code: &str) -> String {
    let assigned = code.replacen("export default", &format!("{COMPONENT_GLOBAL} ="), 1);
    assigned.replace("</script", "<\\/script")
}

/// Render the standalone page for `code`
///
/// `title` is raw text; it is escaped here along with both URLs.
#[must_use]
pub fn render_standalone(code: &str, title: &str, view_url: &str, download_url: &str) -> String {
    let title = escape_html(title);
    let view_url = escape_html(view_url);
    let download_url = escape_html(download_url);
    let component = prepare_component(code);

    // Slots in document order; substituted text is never rescanned.
    fill_slots(
        SHELL,
        &[
            (TITLE_SLOT, &title),
            (VIEW_URL_SLOT, &view_url),
            (DOWNLOAD_URL_SLOT, &download_url),
            (COMPONENT_SLOT, &component),
        ],
    )
}

fn fill_slots(shell: &str, slots: &[(&str, &str)]) -> String {
    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(shell.len() + extra);
    let mut rest = shell;
    for (slot, value) in slots {
        if let Some(at) = rest.find(slot) {
            out.push_str(&rest[..at]);
            out.push_str(value);
            rest = &rest[at + slot.len()..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ryze_test_utils::MAIN_LAYOUT;

    #[test]
    fn generated_ids_are_alphanumeric() {
        let a = DeploymentId::generate();
        let b = DeploymentId::generate();
        assert_eq!(a.as_str().len(), ID_LENGTH);
        assert!(a.as_str().bytes().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
        assert_eq!(DeploymentId::parse(a.as_str()).unwrap(), a);
    }

    #[test]
    fn parse_rejects_path_like_ids() {
        for raw in ["", "../etc", "a/b", "abc.html", "a b"] {
            assert!(matches!(
                DeploymentId::parse(raw),
                Err(PackagingError::InvalidId(_))
            ));
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b a="1">Tom & 'Jerry'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn title_from_prompt() {
        assert_eq!(derive_title(None), DEFAULT_TITLE);
        assert_eq!(derive_title(Some("   ")), DEFAULT_TITLE);
        assert_eq!(derive_title(Some("  a red dashboard ")), "a red dashboard");

        let long = "word ".repeat(30);
        let title = derive_title(Some(&long));
        assert!(title.ends_with("..."));
        assert!(title.chars().count() <= MAX_TITLE_CHARS + 3);
    }

    #[test]
    fn component_is_assigned_to_global() {
        let prepared = prepare_component(MAIN_LAYOUT);
        assert!(prepared.starts_with("window.__RyzeComponent = function App()"));
        assert!(!prepared.contains("export default"));
    }

    #[test]
    fn script_close_is_escaped() {
        let prepared = prepare_component("export default () => <p>{'</script>'}</p>;");
        assert!(!prepared.contains("</script"));
        assert!(prepared.contains("<\\/script>"));
    }

    #[test]
    fn page_carries_runtime_and_component() {
        let html = render_standalone(
            MAIN_LAYOUT,
            "A <red> page",
            "http://localhost:3000/view/abc",
            "http://localhost:3000/download/abc",
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;red&gt; page</title>"));
        assert!(html.contains("react@18.2.0"));
        assert!(html.contains("@babel/standalone"));
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("lucide-react"));
        assert!(html.contains("window.__RyzeComponent = function App()"));
        assert!(html.contains(r#"<a href="http://localhost:3000/download/abc">Download</a>"#));
        assert!(!html.contains("__RYZE_"));
    }

    #[test]
    fn slot_text_in_user_input_is_left_alone() {
        let html = render_standalone(
            "export default () => <p>__RYZE_TITLE__</p>;",
            "__RYZE_VIEW_URL__",
            "v",
            "d",
        );
        assert!(html.contains("<title>__RYZE_VIEW_URL__</title>"));
        assert!(html.contains("<p>__RYZE_TITLE__</p>"));
    }
}
