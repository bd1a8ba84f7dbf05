//! First-match text edits
//!
//! Every helper returns `None` when its anchor is absent so rules can tell
//! "no insertion point" apart from "inserted".

/// Replace the first `from` at or after byte `start`
pub(crate) fn replace_first_from(text: &str, start: usize, from: &str, to: &str) -> Option<String> {
    let offset = text.get(start..)?.find(from)? + start;
    let mut out = String::with_capacity(text.len() + to.len());
    out.push_str(&text[..offset]);
    out.push_str(to);
    out.push_str(&text[offset + from.len()..]);
    Some(out)
}

/// Replace the first `from`
pub(crate) fn replace_first(text: &str, from: &str, to: &str) -> Option<String> {
    replace_first_from(text, 0, from, to)
}

/// Insert `fragment` immediately after the first `anchor`
pub(crate) fn insert_after_first(text: &str, anchor: &str, fragment: &str) -> Option<String> {
    insert_after_first_from(text, 0, anchor, fragment)
}

/// Insert `fragment` after the first `anchor` at or after byte `start`
pub(crate) fn insert_after_first_from(
    text: &str,
    start: usize,
    anchor: &str,
    fragment: &str,
) -> Option<String> {
    replace_first_from(text, start, anchor, &format!("{anchor}{fragment}"))
}

/// Insert `fragment` immediately before the first `anchor`
pub(crate) fn insert_before_first(text: &str, anchor: &str, fragment: &str) -> Option<String> {
    replace_first(text, anchor, &format!("{fragment}{anchor}"))
}

/// Insert `fragment` immediately before the last `anchor`
pub(crate) fn insert_before_last(text: &str, anchor: &str, fragment: &str) -> Option<String> {
    let offset = text.rfind(anchor)?;
    let mut out = String::with_capacity(text.len() + fragment.len());
    out.push_str(&text[..offset]);
    out.push_str(fragment);
    out.push_str(&text[offset..]);
    Some(out)
}

/// Byte offset of `marker`, or 0 when absent
pub(crate) fn offset_of(text: &str, marker: &str) -> usize {
    text.find(marker).unwrap_or(0)
}
