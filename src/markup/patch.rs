//! SVG sizing.

use std::borrow::Cow;

use super::TagProcessor;

/// Value of a `width`/`height` attribute: `"<n>px"` or `"auto"`.
pub fn dimension_value(dimension: Option<f64>) -> String {
    match dimension {
        Some(n) => format!("{n}px"),
        None => "auto".to_string(),
    }
}

/// Set `width` and `height` on the first `<svg>` tag of `markup`.
///
/// Markup without an `<svg>` tag is returned unchanged.
pub fn patch_dimensions<'a>(
    markup: &'a str,
    width: Option<f64>,
    height: Option<f64>,
    escape: &dyn Fn(&str) -> String,
) -> Cow<'a, str> {
    let mut processor = TagProcessor::new(markup);
    if !processor.next_tag("svg") {
        return Cow::Borrowed(markup);
    }

    processor.set_attribute("width", &escape(&dimension_value(width)));
    processor.set_attribute("height", &escape(&dimension_value(height)));
    Cow::Owned(processor.updated_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::html::escape_attr;

    fn escape(s: &str) -> String {
        escape_attr(s).into_owned()
    }

    #[test]
    fn test_dimension_value() {
        assert_eq!(dimension_value(Some(100.0)), "100px");
        assert_eq!(dimension_value(Some(12.5)), "12.5px");
        assert_eq!(dimension_value(Some(0.0)), "0px");
        assert_eq!(dimension_value(None), "auto");
    }

    #[test]
    fn test_defaults_to_auto() {
        assert_eq!(
            patch_dimensions("<svg></svg>", None, None, &escape),
            "<svg width=\"auto\" height=\"auto\"></svg>"
        );
    }

    #[test]
    fn test_explicit_dimensions() {
        assert_eq!(
            patch_dimensions("<svg viewBox=\"0 0 24 24\"/>", Some(48.0), None, &escape),
            "<svg width=\"48px\" height=\"auto\" viewBox=\"0 0 24 24\"/>"
        );
    }

    #[test]
    fn test_overwrites_existing_dimensions() {
        assert_eq!(
            patch_dimensions("<svg width=\"300\" height=\"150\">", Some(30.0), Some(15.0), &escape),
            "<svg width=\"30px\" height=\"15px\">"
        );
    }

    #[test]
    fn test_only_first_svg_patched() {
        let out = patch_dimensions("<svg><svg></svg></svg>", None, None, &escape);
        assert_eq!(out, "<svg width=\"auto\" height=\"auto\"><svg></svg></svg>");
    }

    #[test]
    fn test_no_svg_passthrough() {
        let markup = "<?xml version=\"1.0\"?><p>not an icon</p>";
        let out = patch_dimensions(markup, Some(10.0), Some(10.0), &escape);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, markup);
    }

    #[test]
    fn test_uses_escaper() {
        let shout = |s: &str| s.to_uppercase();
        assert_eq!(
            patch_dimensions("<svg>", Some(1.0), None, &shout),
            "<svg width=\"1PX\" height=\"AUTO\">"
        );
    }
}
