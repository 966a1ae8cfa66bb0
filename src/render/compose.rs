//! Wrapper markup around the patched SVG.

/// Class of the outer container.
const COVER_CLASS: &str = "wp-block-safe-svg-svg-icon safe-svg-cover";

/// Class of the inner container, before the configured class name.
const INSIDE_CLASS: &str = "safe-svg-inside";

/// Join the configured class with the user's `className`, skipping empty parts.
pub(crate) fn join_class_name(inline_class: &str, user_class: Option<&str>) -> String {
    [Some(inline_class), user_class]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the two nested containers.
///
/// ```text
/// <div class="wp-block-safe-svg-svg-icon safe-svg-cover[ align<A>]"><div class="safe-svg-inside[ <C>]"[ style="<S>"]><SVG></div></div>
/// ```
///
/// `class_name`, `style` and `align` are escaped here; `svg` is inserted as is.
pub(crate) fn compose(
    svg: &str,
    class_name: &str,
    style: &str,
    align: Option<&str>,
    escape: &dyn Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(svg.len() + 128);

    out.push_str("<div class=\"");
    out.push_str(COVER_CLASS);
    if let Some(align) = align {
        out.push_str(" align");
        out.push_str(&escape(align));
    }
    out.push_str("\">");

    out.push_str("<div class=\"");
    out.push_str(INSIDE_CLASS);
    if !class_name.is_empty() {
        out.push(' ');
        out.push_str(&escape(class_name));
    }
    out.push('"');
    if !style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape(style));
        out.push('"');
    }
    out.push('>');

    out.push_str(svg);
    out.push_str("</div></div>");
    out
}
