//! MIME type detection utilities.
//!
//! Used by the filesystem media library when an item does not declare its
//! MIME type explicitly.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";
    pub const PDF: &str = "application/pdf";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(ext.as_deref())
}

/// Guess MIME type from file extension string (lowercase).
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("svg" | "svgz") => types::SVG,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("avif") => types::AVIF,
        Some("ico") => types::ICO,
        Some("bmp") => types::BMP,
        Some("tif" | "tiff") => types::TIFF,
        Some("pdf") => types::PDF,
        _ => types::OCTET_STREAM,
    }
}

/// Check if the MIME type is exactly the SVG type.
///
/// No parameter stripping or case folding: the stored type must match.
#[inline]
pub fn is_svg(mime: &str) -> bool {
    mime == types::SVG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("icon.svg")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("ICON.SVG")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("logo.png")), types::PNG);
        assert_eq!(from_path(&PathBuf::from("photo.jpeg")), types::JPEG);
        assert_eq!(from_path(&PathBuf::from("unknown.xyz")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("no_extension")), types::OCTET_STREAM);
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg("image/svg+xml"));
        assert!(!is_svg("image/png"));
        assert!(!is_svg("IMAGE/SVG+XML"));
        assert!(!is_svg("image/svg+xml; charset=utf-8"));
        assert!(!is_svg(""));
    }
}
