//! Stored attributes of the svg icon block.
//!
//! The host hands the render callback a JSON object. Only the keys below are
//! recognized; everything else is ignored.
//!
//! | Key                      | Type     | Purpose                              |
//! |--------------------------|----------|--------------------------------------|
//! | `imageID`                | integer  | attachment to inline (required)      |
//! | `dimensionWidth`         | number   | `width` of the `<svg>` in px         |
//! | `dimensionHeight`        | number   | `height` of the `<svg>` in px        |
//! | `align`                  | string   | `align<value>` class on the wrapper  |
//! | `className`              | string   | extra class on the inner container   |
//! | `backgroundColor`        | string   | color preset slot                    |
//! | `textColor`              | string   | color preset slot                    |
//! | `style.spacing.padding`  | object   | side -> length or `var:` reference   |
//! | `style.spacing.margin`   | object   | side -> length or `var:` reference   |
//! | `style.color.background` | string   | raw color, used without a preset     |
//! | `style.color.text`       | string   | raw color, used without a preset     |

use serde::{Deserialize, Serialize};

use crate::media::MediaId;

/// Insertion-ordered JSON object (`serde_json` is built with `preserve_order`).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Deserialize a dimension given either as a number or a numeric string.
///
/// Strings that are not numbers are treated as absent.
fn deserialize_dimension<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Dimension {
        Number(f64),
        Text(String),
    }

    let value: Option<Dimension> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Dimension::Number(n)) => Some(n),
        Some(Dimension::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Attributes of one svg icon block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    #[serde(rename = "imageID")]
    pub image_id: MediaId,
    #[serde(default, deserialize_with = "deserialize_dimension")]
    pub dimension_width: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_dimension")]
    pub dimension_height: Option<f64>,
    #[serde(default)]
    pub align: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub style: BlockStyle,
}

/// The `style` attribute object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    pub spacing: Spacing,
    pub color: StyleColor,
}

/// `style.spacing`: each side maps to a length or a `var:` reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub padding: Option<JsonMap>,
    pub margin: Option<JsonMap>,
}

/// `style.color`: raw CSS colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleColor {
    pub background: Option<String>,
    pub text: Option<String>,
}

impl BlockAttributes {
    /// Attributes referencing `image_id` with every option unset.
    pub fn new(image_id: MediaId) -> Self {
        Self {
            image_id,
            ..Self::default()
        }
    }

    /// Parse attributes from the host's JSON object.
    pub fn from_json(value: &serde_json::Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }

    /// Alignment, if one was chosen.
    pub fn align(&self) -> Option<&str> {
        non_empty(self.align.as_deref())
    }

    /// User supplied extra class names.
    pub fn class_name(&self) -> Option<&str> {
        non_empty(self.class_name.as_deref())
    }

    /// Background color preset slot.
    pub fn background_color(&self) -> Option<&str> {
        non_empty(self.background_color.as_deref())
    }

    /// Text color preset slot.
    pub fn text_color(&self) -> Option<&str> {
        non_empty(self.text_color.as_deref())
    }
}

#[inline]
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_attributes() {
        let attrs = BlockAttributes::from_json(&json!({ "imageID": 42 })).unwrap();
        assert_eq!(attrs, BlockAttributes::new(MediaId(42)));
        assert!(attrs.style.spacing.padding.is_none());
    }

    #[test]
    fn test_missing_image_id_is_error() {
        assert!(BlockAttributes::from_json(&json!({ "align": "wide" })).is_err());
    }

    #[test]
    fn test_full_attributes() {
        let attrs = BlockAttributes::from_json(&json!({
            "imageID": 7,
            "dimensionWidth": 120,
            "dimensionHeight": 80.5,
            "align": "wide",
            "className": "foo bar",
            "backgroundColor": "primary",
            "textColor": "contrast",
            "style": {
                "spacing": {
                    "padding": { "top": "10px", "left": "var:preset|spacing|20" },
                    "margin": { "bottom": "1em" }
                },
                "color": { "background": "#fff", "text": "#000" }
            }
        }))
        .unwrap();

        assert_eq!(attrs.image_id, MediaId(7));
        assert_eq!(attrs.dimension_width, Some(120.0));
        assert_eq!(attrs.dimension_height, Some(80.5));
        assert_eq!(attrs.align(), Some("wide"));
        assert_eq!(attrs.class_name(), Some("foo bar"));
        assert_eq!(attrs.background_color(), Some("primary"));
        assert_eq!(attrs.text_color(), Some("contrast"));
        assert_eq!(attrs.style.color.background.as_deref(), Some("#fff"));

        let padding = attrs.style.spacing.padding.unwrap();
        let sides: Vec<_> = padding.keys().map(String::as_str).collect();
        assert_eq!(sides, ["top", "left"]);
    }

    #[test]
    fn test_padding_preserves_document_order() {
        let attrs = BlockAttributes::from_json(&json!({
            "imageID": 1,
            "style": { "spacing": { "padding": {
                "right": "1px", "top": "2px", "left": "3px", "bottom": "4px"
            } } }
        }))
        .unwrap();
        let padding = attrs.style.spacing.padding.unwrap();
        let sides: Vec<_> = padding.keys().map(String::as_str).collect();
        assert_eq!(sides, ["right", "top", "left", "bottom"]);
    }

    #[test]
    fn test_dimension_from_string_and_null() {
        let attrs = BlockAttributes::from_json(&json!({
            "imageID": 1,
            "dimensionWidth": "64",
            "dimensionHeight": null
        }))
        .unwrap();
        assert_eq!(attrs.dimension_width, Some(64.0));
        assert_eq!(attrs.dimension_height, None);

        let attrs =
            BlockAttributes::from_json(&json!({ "imageID": 1, "dimensionWidth": "wide" }))
                .unwrap();
        assert_eq!(attrs.dimension_width, None);
    }

    #[test]
    fn test_empty_strings_read_as_unset() {
        let attrs = BlockAttributes::from_json(&json!({
            "imageID": 1,
            "align": "",
            "className": "",
            "backgroundColor": ""
        }))
        .unwrap();
        assert_eq!(attrs.align(), None);
        assert_eq!(attrs.class_name(), None);
        assert_eq!(attrs.background_color(), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let attrs = BlockAttributes::from_json(&json!({
            "imageID": 3,
            "lock": { "move": true },
            "style": { "typography": { "fontSize": "12px" } }
        }))
        .unwrap();
        assert_eq!(attrs.image_id, MediaId(3));
    }
}
