//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! inline_class = "safe-svg-inline"   # class on the inner container
//! empty_file = "skip"                # skip | render
//! ```

use serde::{Deserialize, Serialize};

/// Default class of the inner container.
pub const DEFAULT_INLINE_CLASS: &str = "safe-svg-inline";

/// What to do with an attachment whose file is empty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFilePolicy {
    /// Treat an empty file like an unreadable one: render nothing.
    #[default]
    Skip,
    /// Render the wrapper around the empty markup.
    Render,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Class of the inner container, before the `inline_class` hook runs.
    pub inline_class: String,

    /// Handling of zero-byte attachments.
    pub empty_file: EmptyFilePolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            inline_class: DEFAULT_INLINE_CLASS.to_string(),
            empty_file: EmptyFilePolicy::Skip,
        }
    }
}

impl RenderConfig {
    /// Validate render configuration.
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.inline_class.contains(['"', '<', '>']) {
            errors.push(format!(
                "render.inline_class `{}` contains characters not allowed in a class name",
                self.inline_class
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.render.inline_class, DEFAULT_INLINE_CLASS);
        assert_eq!(config.render.empty_file, EmptyFilePolicy::Skip);
    }

    #[test]
    fn test_empty_file_parsing() {
        let cases = [("skip", EmptyFilePolicy::Skip), ("render", EmptyFilePolicy::Render)];
        for (input, expected) in cases {
            let config = test_parse_config(&format!("[render]\nempty_file = \"{input}\""));
            assert_eq!(config.render.empty_file, expected, "failed for {input}");
        }
    }

    #[test]
    fn test_custom_inline_class() {
        let config = test_parse_config("[render]\ninline_class = \"icon\"");
        assert_eq!(config.render.inline_class, "icon");
        assert_eq!(config.render.empty_file, EmptyFilePolicy::Skip);
    }

    #[test]
    fn test_validate_rejects_quotes() {
        let mut errors = Vec::new();
        RenderConfig {
            inline_class: "a\"b".into(),
            ..RenderConfig::default()
        }
        .validate(&mut errors);
        assert_eq!(errors.len(), 1);

        let mut errors = Vec::new();
        RenderConfig::default().validate(&mut errors);
        assert!(errors.is_empty());
    }
}
