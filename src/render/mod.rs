//! The svg icon block render callback.
//!
//! # Pipeline
//!
//! ```text
//! BlockAttributes
//!     │
//!     ├── guard     MIME type must be image/svg+xml
//!     ├── load      read the attached file
//!     ├── patch     width/height on the first <svg>
//!     ├── style     padding, margin, colors -> inline CSS
//!     └── compose   wrapper divs, then the markup hook
//!     │
//!     ▼
//! String (empty when the guard or the load fails)
//! ```

mod compose;
mod hooks;


pub use hooks::{Hooks, MarkupContext};

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::block::BlockAttributes;
use crate::config::{EmptyFilePolicy, RenderConfig};
use crate::markup::patch_dimensions;
use crate::media::{FileReader, MediaError, MediaId, MediaLibrary};
use crate::style::resolve_style;
use crate::utils::{html::escape_attr, mime};
use compose::{compose, join_class_name};

type Escaper = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Why a block rendered to nothing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("media is `{mime}`, not an svg")]
    NotSvg { mime: String },

    #[error("media {0} is unknown or has no attached file")]
    MissingMedia(MediaId),

    #[error("failed to read `{}`", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: MediaError,
    },

    #[error("`{}` is empty", .0.display())]
    EmptyFile(PathBuf),

    #[error("invalid block attributes: {0}")]
    Attributes(#[from] serde_json::Error),
}

/// Whether media of this MIME type is inlined.
#[inline]
pub fn is_renderable(mime_type: &str) -> bool {
    mime::is_svg(mime_type)
}

/// Renders svg icon blocks against a media library.
pub struct SvgIconRenderer<L, R> {
    library: L,
    reader: R,
    config: RenderConfig,
    hooks: Hooks,
    escaper: Escaper,
}

impl<L: MediaLibrary, R: FileReader> SvgIconRenderer<L, R> {
    pub fn new(library: L, reader: R) -> Self {
        Self {
            library,
            reader,
            config: RenderConfig::default(),
            hooks: Hooks::default(),
            escaper: Box::new(|s: &str| escape_attr(s).into_owned()),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace the attribute escaper used for sizes, class names and style.
    pub fn with_escaper(mut self, escaper: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.escaper = Box::new(escaper);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a block, or `""` if it cannot be rendered.
    pub fn render(&self, attrs: &BlockAttributes) -> String {
        self.try_render(attrs).unwrap_or_else(|err| {
            crate::debug!("render"; "media {}: {}", attrs.image_id, err);
            String::new()
        })
    }

    /// Render a block from the host's raw JSON attributes.
    pub fn render_json(&self, attrs: &Value) -> String {
        self.try_render_json(attrs).unwrap_or_else(|err| {
            crate::debug!("render"; "{}", err);
            String::new()
        })
    }

    pub fn try_render_json(&self, attrs: &Value) -> Result<String, RenderError> {
        let attrs = BlockAttributes::from_json(attrs)?;
        self.try_render(&attrs)
    }

    /// Render a block, reporting why nothing was rendered.
    pub fn try_render(&self, attrs: &BlockAttributes) -> Result<String, RenderError> {
        let id = attrs.image_id;
        self.check_mime(id)?;
        let contents = self.load_contents(id)?;

        let svg = patch_dimensions(
            &contents,
            attrs.dimension_width,
            attrs.dimension_height,
            &*self.escaper,
        );
        let class_name = self.class_name(attrs);
        let style = self.inline_style(attrs);

        let markup = compose(&svg, &class_name, &style, attrs.align(), &*self.escaper);
        let ctx = MarkupContext {
            svg: &svg,
            class_name: &class_name,
            media_id: id,
        };
        Ok(self.hooks.inline_markup(markup, &ctx))
    }

    /// Class of the inner container after the class hook, unescaped.
    pub fn class_name(&self, attrs: &BlockAttributes) -> String {
        let inline_class = self.hooks.inline_class(&self.config.inline_class);
        join_class_name(&inline_class, attrs.class_name())
    }

    /// Inline style of the inner container after the style hook, unescaped.
    pub fn inline_style(&self, attrs: &BlockAttributes) -> String {
        self.hooks.inside_style(resolve_style(attrs))
    }

    fn check_mime(&self, id: MediaId) -> Result<(), RenderError> {
        let mime = self.library.mime_type(id).unwrap_or_default();
        if is_renderable(&mime) {
            Ok(())
        } else {
            Err(RenderError::NotSvg { mime })
        }
    }

    fn load_contents(&self, id: MediaId) -> Result<String, RenderError> {
        let path = self
            .library
            .attached_file(id)
            .ok_or(RenderError::MissingMedia(id))?;

        let bytes = self
            .reader
            .read(&path)
            .map_err(|source| RenderError::Unreadable {
                path: path.clone(),
                source,
            })?;

        if bytes.is_empty() && self.config.empty_file == EmptyFilePolicy::Skip {
            return Err(RenderError::EmptyFile(path));
        }

        crate::debug!("media"; "loaded {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
