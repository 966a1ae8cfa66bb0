//! `[media]` section configuration.
//!
//! Describes the attachments the preview host knows about.
//!
//! # Example
//!
//! ```toml
//! [media]
//! root = "uploads"
//!
//! [[media.items]]
//! id = 12
//! path = "2024/logo.svg"
//!
//! [[media.items]]
//! id = 13
//! path = "icons/arrow"
//! mime = "image/svg+xml"   # optional, guessed from the extension otherwise
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::media::MediaId;
use crate::utils::mime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory holding attachment files, relative to the project root.
    pub root: PathBuf,

    /// Known attachments.
    pub items: Vec<MediaItem>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("uploads"),
            items: Vec::new(),
        }
    }
}

/// A single `[[media.items]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub path: PathBuf,
    #[serde(default)]
    pub mime: Option<String>,
}

impl MediaItem {
    /// Declared MIME type, or one guessed from the file extension.
    pub fn mime(&self) -> Cow<'_, str> {
        match &self.mime {
            Some(mime) => Cow::Borrowed(mime),
            None => Cow::Borrowed(mime::from_path(&self.path)),
        }
    }
}

impl MediaConfig {
    /// Validate media configuration.
    ///
    /// # Checks
    /// - ids are unique
    /// - item paths are not empty
    pub fn validate(&self, errors: &mut Vec<String>) {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                errors.push(format!("media.items: duplicate id {}", item.id));
            }
            if item.path.as_os_str().is_empty() {
                errors.push(format!("media.items: id {} has an empty path", item.id));
            }
        }
    }
}
