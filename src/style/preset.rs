//! Design-system preset references.
//!
//! Block attributes store preset choices as `var:<category>|<slot>|<value>`,
//! e.g. `var:preset|spacing|50`. On the page these become CSS custom
//! properties under `--wp--preset--`:
//!
//! ```text
//! var:preset|spacing|50   ->  var(--wp--preset--spacing--50)
//! var:spacing|50|40       ->  var(--wp--preset--spacing--50--40)
//! ```
//!
//! The `preset` category is already spelled by the property prefix and is
//! not repeated.

use std::borrow::Cow;

/// Prefix marking a preset reference.
const VAR_PREFIX: &str = "var:";

/// Category implied by the `--wp--preset--` prefix.
const PRESET_CATEGORY: &str = "preset";

/// Resolve a `var:` reference to a CSS custom property.
///
/// Only references with exactly three `|`-separated parts are converted;
/// anything else, including malformed references, is returned unchanged.
///
/// ```
/// use safe_svg::style::resolve_preset_var;
///
/// assert_eq!(resolve_preset_var("var:preset|spacing|50"), "var(--wp--preset--spacing--50)");
/// assert_eq!(resolve_preset_var("var:bad"), "var:bad");
/// assert_eq!(resolve_preset_var("10px"), "10px");
/// ```
pub fn resolve_preset_var(value: &str) -> Cow<'_, str> {
    let Some(reference) = value.strip_prefix(VAR_PREFIX) else {
        return Cow::Borrowed(value);
    };

    let parts: Vec<&str> = reference.split('|').collect();
    let [category, slot, name] = parts[..] else {
        return Cow::Borrowed(value);
    };

    if category == PRESET_CATEGORY {
        Cow::Owned(format!("var(--wp--preset--{slot}--{name})"))
    } else {
        Cow::Owned(format!("var(--wp--preset--{category}--{slot}--{name})"))
    }
}

/// CSS custom property of a color preset slot.
pub fn preset_color(slot: &str) -> String {
    format!("var(--wp--preset--color--{slot})")
}
