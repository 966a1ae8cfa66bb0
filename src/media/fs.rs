//! Filesystem-backed media library.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{MediaId, MediaLibrary};
use crate::config::MediaConfig;

#[derive(Debug, Clone)]
struct Entry {
    path: PathBuf,
    mime: String,
}

/// Media library mapping ids to files under a root directory.
#[derive(Debug, Clone, Default)]
pub struct FsMediaLibrary {
    entries: HashMap<MediaId, Entry>,
}

impl FsMediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[media]` config section.
    ///
    /// `root` is the project root; `media.root` and item paths are resolved
    /// against it. Later items with a duplicate id replace earlier ones.
    pub fn from_config(media: &MediaConfig, root: &Path) -> Self {
        let media_root = root.join(&media.root);
        let mut library = Self::new();
        for item in &media.items {
            library.insert(item.id, media_root.join(&item.path), item.mime());
        }
        library
    }

    /// Register an attachment.
    pub fn insert(&mut self, id: MediaId, path: PathBuf, mime: impl Into<String>) {
        self.entries.insert(
            id,
            Entry {
                path,
                mime: mime.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MediaLibrary for FsMediaLibrary {
    fn mime_type(&self, id: MediaId) -> Option<String> {
        self.entries.get(&id).map(|e| e.mime.clone())
    }

    fn attached_file(&self, id: MediaId) -> Option<PathBuf> {
        self.entries.get(&id).map(|e| e.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::mime::types;

    #[test]
    fn test_from_config_resolves_paths() {
        let config = test_parse_config(
            r#"
[media]
root = "uploads"

[[media.items]]
id = 1
path = "2024/logo.svg"

[[media.items]]
id = 2
path = "photo.png"

[[media.items]]
id = 3
path = "vector.bin"
mime = "image/svg+xml"
"#,
        );
        let library = FsMediaLibrary::from_config(&config.media, Path::new("/site"));

        assert_eq!(library.len(), 3);
        assert_eq!(library.mime_type(MediaId(1)).as_deref(), Some(types::SVG));
        assert_eq!(library.mime_type(MediaId(2)).as_deref(), Some(types::PNG));
        assert_eq!(library.mime_type(MediaId(3)).as_deref(), Some(types::SVG));
        assert_eq!(
            library.attached_file(MediaId(1)),
            Some(PathBuf::from("/site/uploads/2024/logo.svg"))
        );
    }

    #[test]
    fn test_unknown_id() {
        let library = FsMediaLibrary::new();
        assert!(library.is_empty());
        assert_eq!(library.mime_type(MediaId(9)), None);
        assert_eq!(library.attached_file(MediaId(9)), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut library = FsMediaLibrary::new();
        library.insert(MediaId(1), PathBuf::from("a.svg"), types::SVG);
        library.insert(MediaId(1), PathBuf::from("b.png"), types::PNG);

        assert_eq!(library.len(), 1);
        assert_eq!(library.mime_type(MediaId(1)).as_deref(), Some(types::PNG));
    }
}
