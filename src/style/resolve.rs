//! Inline style of the inner container.

use super::{StyleMap, preset_color, resolve_preset_var};
use crate::block::BlockAttributes;

/// Collect the inner container's CSS properties.
///
/// Order: padding sides, margin sides, `background-color`, `color`.
/// Both color properties are always present, possibly empty.
pub fn build_style_map(attrs: &BlockAttributes) -> StyleMap {
    let mut styles = StyleMap::new();
    let spacing = &attrs.style.spacing;

    if let Some(padding) = &spacing.padding {
        styles.extend_prefixed("padding", padding);
    }
    if let Some(margin) = &spacing.margin {
        styles.extend_prefixed("margin", margin);
    }

    styles.map_values(|value| resolve_preset_var(value).into_owned());

    let color = &attrs.style.color;
    styles.insert(
        "background-color",
        color_value(attrs.background_color(), color.background.as_deref()),
    );
    styles.insert(
        "color",
        color_value(attrs.text_color(), color.text.as_deref()),
    );

    styles
}

/// Inline style string for the block, before any hook runs.
pub fn resolve_style(attrs: &BlockAttributes) -> String {
    build_style_map(attrs).to_inline_css()
}

/// A preset slot wins over a raw color.
fn color_value(slot: Option<&str>, raw: Option<&str>) -> String {
    match (slot, raw) {
        (Some(slot), _) => preset_color(slot),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> BlockAttributes {
        let mut value = value;
        value["imageID"] = json!(1);
        BlockAttributes::from_json(&value).unwrap()
    }

    #[test]
    fn test_no_style() {
        assert_eq!(resolve_style(&attrs(json!({}))), "");
    }

    #[test]
    fn test_single_padding() {
        let style = resolve_style(&attrs(json!({
            "style": { "spacing": { "padding": { "top": "10px" } } }
        })));
        assert_eq!(style, "padding-top: 10px;");
    }

    #[test]
    fn test_padding_then_margin_then_colors() {
        let style = resolve_style(&attrs(json!({
            "textColor": "contrast",
            "style": {
                "color": { "background": "#fff" },
                "spacing": {
                    "margin": { "bottom": "2em", "top": "1em" },
                    "padding": { "left": "4px", "right": "var:preset|spacing|30" }
                }
            }
        })));
        assert_eq!(
            style,
            "padding-left: 4px; padding-right: var(--wp--preset--spacing--30); \
             margin-bottom: 2em; margin-top: 1em; background-color: #fff; \
             color: var(--wp--preset--color--contrast);"
        );
    }

    #[test]
    fn test_background_preset() {
        let style = resolve_style(&attrs(json!({ "backgroundColor": "red" })));
        assert_eq!(style, "background-color: var(--wp--preset--color--red);");
    }

    #[test]
    fn test_background_raw_fallback() {
        let style = resolve_style(&attrs(json!({
            "style": { "color": { "background": "#fff" } }
        })));
        assert_eq!(style, "background-color: #fff;");
    }

    #[test]
    fn test_preset_wins_over_raw() {
        let style = resolve_style(&attrs(json!({
            "backgroundColor": "red",
            "textColor": "white",
            "style": { "color": { "background": "#fff", "text": "#000" } }
        })));
        assert_eq!(
            style,
            "background-color: var(--wp--preset--color--red); color: var(--wp--preset--color--white);"
        );
    }

    #[test]
    fn test_color_keys_always_present() {
        let map = build_style_map(&attrs(json!({})));
        assert_eq!(map.get("background-color"), Some(""));
        assert_eq!(map.get("color"), Some(""));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_variable_references() {
        let map = build_style_map(&attrs(json!({
            "style": { "spacing": { "padding": {
                "top": "var:spacing|50|40",
                "bottom": "var:bad"
            } } }
        })));
        assert_eq!(map.get("padding-top"), Some("var(--wp--preset--spacing--50--40)"));
        assert_eq!(map.get("padding-bottom"), Some("var:bad"));
    }

    #[test]
    fn test_raw_colors_not_resolved() {
        // Only spacing values go through var: resolution
        let style = resolve_style(&attrs(json!({
            "style": { "color": { "text": "var:preset|color|red" } }
        })));
        assert_eq!(style, "color: var:preset|color|red;");
    }

    #[test]
    fn test_empty_spacing_values_dropped() {
        let style = resolve_style(&attrs(json!({
            "style": { "spacing": { "padding": { "top": "", "left": "0" } } }
        })));
        assert_eq!(style, "padding-left: 0;");
    }
}
