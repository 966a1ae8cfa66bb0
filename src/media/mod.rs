//! Media collaborators.
//!
//! The renderer never talks to a storage layer directly. It asks a
//! [`MediaLibrary`] for the MIME type and file path of an attachment and a
//! [`FileReader`] for the bytes behind that path.
//!
//! - `fs`: a library backed by the `[media]` section of `safe-svg.toml`

mod fs;

pub use fs::FsMediaLibrary;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opaque attachment identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MediaId(pub u64);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MediaId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Errors raised by media collaborators.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("no file attached to media {0}")]
    NotAttached(MediaId),
}

/// Attachment metadata lookup.
pub trait MediaLibrary {
    /// Stored MIME type of an attachment, `None` if the id is unknown.
    fn mime_type(&self, id: MediaId) -> Option<String>;

    /// Filesystem path of the attachment's file.
    fn attached_file(&self, id: MediaId) -> Option<PathBuf>;
}

/// Raw file access.
pub trait FileReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>, MediaError>;
}

/// [`FileReader`] over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileReader;

impl FileReader for StdFileReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>, MediaError> {
        std::fs::read(path).map_err(|err| MediaError::Io(path.to_path_buf(), err))
    }
}

impl<T: MediaLibrary + ?Sized> MediaLibrary for &T {
    fn mime_type(&self, id: MediaId) -> Option<String> {
        (**self).mime_type(id)
    }

    fn attached_file(&self, id: MediaId) -> Option<PathBuf> {
        (**self).attached_file(id)
    }
}

impl<T: FileReader + ?Sized> FileReader for &T {
    fn read(&self, path: &Path) -> Result<Vec<u8>, MediaError> {
        (**self).read(path)
    }
}
