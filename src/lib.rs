//! safe-svg - inline SVG icon block renderer.
//!
//! Turns the stored attributes of an svg icon block into markup: the
//! attachment's SVG is read, sized and wrapped in two styled containers.
//!
//! ```no_run
//! use safe_svg::{BlockAttributes, FsMediaLibrary, MediaId, StdFileReader, SvgIconRenderer};
//!
//! let mut library = FsMediaLibrary::new();
//! library.insert(MediaId(1), "uploads/logo.svg".into(), "image/svg+xml");
//!
//! let renderer = SvgIconRenderer::new(library, StdFileReader);
//! let html = renderer.render(&BlockAttributes::new(MediaId(1)));
//! ```

pub mod block;
pub mod config;
pub mod logger;
pub mod markup;
pub mod media;
pub mod render;
pub mod style;
pub mod utils;

pub use block::BlockAttributes;
pub use config::{RenderConfig, SafeSvgConfig};
pub use media::{FileReader, FsMediaLibrary, MediaError, MediaId, MediaLibrary, StdFileReader};
pub use render::{Hooks, MarkupContext, RenderError, SvgIconRenderer};
