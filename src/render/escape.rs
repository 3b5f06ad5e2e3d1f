//! HTML escaping and tag slugification.
//!
//! All text interpolated into the page passes through these helpers. Tag
//! values are free-form strings (`product designer`, `ui/ux`), so pill
//! identity attributes are derived through [`slugify_tag`] rather than used
//! raw.

/// Escape text content for interpolation into an HTML element body.
///
/// Replaces `&`, `<`, and `>` with their entity forms. `&` is replaced
/// first so already-produced entities are not double-escaped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for interpolation into a double-quoted HTML attribute.
///
/// Applies [`escape_text`] and additionally escapes both quote characters.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Slugify a tag value into a stable `[a-z0-9_]+` identity attribute.
///
/// # Rules
/// 1. Lowercase the entire string
/// 2. Replace spaces, dashes, and slashes with underscores
/// 3. Strip any character not in `[a-z0-9_]`
/// 4. Collapse consecutive underscores
/// 5. Trim leading/trailing underscores
/// 6. If the result is empty, use `tag_{index}`
#[must_use]
pub fn slugify_tag(tag: &str, index: usize) -> String {
    let mut slug: String = tag
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c == ' ' || c == '-' || c == '/' {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    // Collapse consecutive underscores
    while slug.contains("__") {
        slug = slug.replace("__", "_");
    }

    // Trim leading/trailing underscores
    slug = slug.trim_matches('_').to_string();

    if slug.is_empty() {
        format!("tag_{index}")
    } else {
        slug
    }
}
