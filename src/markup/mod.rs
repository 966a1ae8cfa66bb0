//! Markup scanning and patching.
//!
//! - `tag`: forward-only tag scanner (`TagProcessor`)
//! - `patch`: sizing of the first `<svg>` element

mod patch;
mod tag;

pub use patch::{dimension_value, patch_dimensions};
pub use tag::TagProcessor;
