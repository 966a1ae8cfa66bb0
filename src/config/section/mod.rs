//! Configuration section definitions.
//!
//! Each module corresponds to a section in `safe-svg.toml`:
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `render` | `[render]`   | Wrapper class, empty file handling    |
//! | `media`  | `[media]`    | Attachments known to the preview host |

mod media;
mod render;

pub use media::{MediaConfig, MediaItem};
pub use render::{DEFAULT_INLINE_CLASS, EmptyFilePolicy, RenderConfig};
