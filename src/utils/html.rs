//! HTML utility functions.
//!
//! Provides the small amount of HTML knowledge the renderer needs:
//! - `escape_attr()` - attribute value escaping
//! - `is_raw_text_element()` - elements whose body is not scanned for tags
//! - `is_tag_name_boundary()` - characters that terminate a tag name

use std::borrow::Cow;

// =============================================================================
// Attribute Escaping
// =============================================================================

/// Characters that require escaping inside a quoted attribute value.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escape a string for inclusion in an HTML attribute value.
///
/// Character references that are already present (`&amp;`, `&#039;`,
/// `&#x27;`) are kept as-is, so escaping twice is harmless.
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```
/// use safe_svg::utils::html::escape_attr;
///
/// assert_eq!(escape_attr("a\"b"), "a&quot;b");
/// assert_eq!(escape_attr("a &amp; b"), "a &amp; b");
/// assert_eq!(escape_attr("auto"), "auto"); // No allocation
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c == '&'
            && let Some(len) = entity_len(rest)
        {
            result.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(result)
}

/// Length of a well-formed character reference at the start of `s`.
///
/// Recognizes `&name;`, `&#123;` and `&#x1F;`.
fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];
    if name.is_empty() || name.len() > 32 {
        return None;
    }

    let valid = if let Some(hex) = name
        .strip_prefix("#x")
        .or_else(|| name.strip_prefix("#X"))
    {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = name.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        name.chars().all(|c| c.is_ascii_alphanumeric())
    };

    valid.then_some(end + 2)
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if tag is a raw text element (content is not markup).
///
/// Per the HTML standard: script and style content is "raw text".
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
}

/// Check if tag is an escapable raw text element.
///
/// Per the HTML standard: textarea and title are "escapable raw text".
#[inline]
pub fn is_escapable_raw_text_element(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("textarea") || tag.eq_ignore_ascii_case("title")
}

/// Check if a byte ends a tag name (`<svg>`, `<svg/>`, `<svg viewBox=..>`).
#[inline]
pub fn is_tag_name_boundary(b: u8) -> bool {
    matches!(b, b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

// =============================================================================
// Tests
// =============================================================================
