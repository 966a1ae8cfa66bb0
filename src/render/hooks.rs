//! Interception points of the render pipeline.
//!
//! Each hook receives the value the pipeline computed and returns the value
//! to continue with. An unset hook passes the value through.
//!
//! ```
//! use safe_svg::render::Hooks;
//!
//! let hooks = Hooks::new()
//!     .on_inline_class(|default| format!("{default} icon"))
//!     .on_inside_style(|style| style.replace("padding", "margin"));
//! # let _ = hooks;
//! ```

use std::fmt;

use crate::media::MediaId;

type ClassHook = Box<dyn Fn(&str) -> String + Send + Sync>;
type StyleHook = Box<dyn Fn(&str) -> String + Send + Sync>;
type MarkupHook = Box<dyn Fn(&str, &MarkupContext<'_>) -> String + Send + Sync>;

/// What the markup hook gets to see besides the composed markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupContext<'a> {
    /// The patched SVG markup.
    pub svg: &'a str,
    /// Class of the inner container, unescaped.
    pub class_name: &'a str,
    pub media_id: MediaId,
}

/// Optional overrides applied while rendering.
#[derive(Default)]
pub struct Hooks {
    inline_class: Option<ClassHook>,
    inside_style: Option<StyleHook>,
    inline_markup: Option<MarkupHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default class of the inner container.
    pub fn on_inline_class(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.inline_class = Some(Box::new(f));
        self
    }

    /// Override the resolved inline style.
    pub fn on_inside_style(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.inside_style = Some(Box::new(f));
        self
    }

    /// Override the composed markup.
    pub fn on_inline_markup(
        mut self,
        f: impl Fn(&str, &MarkupContext<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.inline_markup = Some(Box::new(f));
        self
    }

    pub(crate) fn inline_class(&self, default: &str) -> String {
        match &self.inline_class {
            Some(f) => f(default),
            None => default.to_string(),
        }
    }

    pub(crate) fn inside_style(&self, style: String) -> String {
        match &self.inside_style {
            Some(f) => f(&style),
            None => style,
        }
    }

    pub(crate) fn inline_markup(&self, markup: String, ctx: &MarkupContext<'_>) -> String {
        match &self.inline_markup {
            Some(f) => f(&markup, ctx),
            None => markup,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("inline_class", &self.inline_class.is_some())
            .field("inside_style", &self.inside_style.is_some())
            .field("inline_markup", &self.inline_markup.is_some())
            .finish()
    }
}
