//! Style attribute resolution.
//!
//! Turns the block's spacing and color attributes into the inline style of
//! the inner container:
//!
//! ```text
//! style.spacing.padding.top = "var:preset|spacing|30"
//! backgroundColor           = "primary"
//!         │
//!         ▼
//! padding-top: var(--wp--preset--spacing--30); background-color: var(--wp--preset--color--primary);
//! ```

mod map;
mod preset;
mod resolve;

pub use map::StyleMap;
pub use preset::{preset_color, resolve_preset_var};
pub use resolve::{build_style_map, resolve_style};
