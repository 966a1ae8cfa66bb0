//! Forward-only HTML tag scanner with in-place attribute updates.
//!
//! The scanner walks markup one tag at a time without building a tree:
//!
//! ```text
//! <?xml version="1.0"?><!-- comment --><svg viewBox="0 0 24 24">...
//! ^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^
//! skipped               skipped          matched by next_tag("svg")
//! ```
//!
//! Comments, `<!...>` declarations, `<?...?>` processing instructions,
//! CDATA sections, closing tags and the bodies of raw text elements
//! (`script`, `style`, `title`, `textarea`) are never matched.
//!
//! Updates are recorded as byte-range replacements against the original
//! input and applied by [`TagProcessor::updated_html`], so untouched bytes
//! come through exactly as they were.

use std::ops::Range;

use crate::utils::html::{
    is_escapable_raw_text_element, is_raw_text_element, is_tag_name_boundary,
};

/// An attribute inside the current tag.
#[derive(Debug, Clone)]
struct AttrSpan {
    /// Attribute name bytes.
    name: Range<usize>,
    /// Whole `name="value"` text.
    whole: Range<usize>,
}

/// An opening tag located by the scanner.
#[derive(Debug, Clone)]
struct TagSpan {
    name: Range<usize>,
    attrs: Vec<AttrSpan>,
}

/// A pending edit of the original markup.
#[derive(Debug, Clone)]
struct Replacement {
    /// Lowercased attribute name, so a second `set_attribute` wins.
    key: String,
    range: Range<usize>,
    text: String,
}

/// Scanner over one markup string.
#[derive(Debug)]
pub struct TagProcessor<'a> {
    html: &'a str,
    cursor: usize,
    current: Option<TagSpan>,
    updates: Vec<Replacement>,
}

impl<'a> TagProcessor<'a> {
    pub fn new(html: &'a str) -> Self {
        Self {
            html,
            cursor: 0,
            current: None,
            updates: Vec::new(),
        }
    }

    /// Advance to the next opening tag named `name` (ASCII case-insensitive).
    ///
    /// Returns `false` and clears the current tag when the input runs out.
    pub fn next_tag(&mut self, name: &str) -> bool {
        while let Some(tag) = self.scan_tag() {
            let tag_name = &self.html[tag.name.clone()];
            if tag_name.eq_ignore_ascii_case(name) {
                self.current = Some(tag);
                return true;
            }
            if is_raw_text_element(tag_name) || is_escapable_raw_text_element(tag_name) {
                self.skip_raw_text(tag.name.clone());
            }
        }
        self.current = None;
        false
    }

    /// Name of the current tag as written in the source.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.current.as_ref().map(|tag| &self.html[tag.name.clone()])
    }

    /// Raw value of an attribute on the current tag.
    ///
    /// Returns `Some("")` for attributes written without a value.
    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        let tag = self.current.as_ref()?;
        let attr = self.find_attr(tag, name)?;
        let whole = &self.html[attr.whole.clone()];
        let value = whole[attr.name.len()..].trim_start();
        let Some(value) = value.strip_prefix('=') else {
            return Some("");
        };
        let value = value.trim_start();
        Some(
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value),
        )
    }

    /// Set an attribute on the current tag.
    ///
    /// `value` is written between double quotes verbatim and must already be
    /// attribute-escaped. An existing attribute (first occurrence) is
    /// rewritten in place; otherwise the attribute is inserted right after
    /// the tag name. Returns `false` if there is no current tag.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let Some(tag) = self.current.as_ref() else {
            return false;
        };

        let text = format!("{name}=\"{value}\"");
        let key = format!("{}@{}", name.to_ascii_lowercase(), tag.name.start);
        let (range, text) = match self.find_attr(tag, name) {
            Some(attr) => (attr.whole.clone(), text),
            None => (tag.name.end..tag.name.end, format!(" {text}")),
        };

        match self.updates.iter_mut().find(|u| u.key == key) {
            Some(update) => update.text = text,
            None => self.updates.push(Replacement { key, range, text }),
        }
        true
    }

    /// The input with all recorded updates applied.
    pub fn updated_html(&self) -> String {
        if self.updates.is_empty() {
            return self.html.to_string();
        }

        let mut updates: Vec<&Replacement> = self.updates.iter().collect();
        updates.sort_by_key(|u| u.range.start);

        let extra: usize = updates.iter().map(|u| u.text.len()).sum();
        let mut out = String::with_capacity(self.html.len() + extra);
        let mut pos = 0;
        for update in updates {
            out.push_str(&self.html[pos..update.range.start]);
            out.push_str(&update.text);
            pos = update.range.end;
        }
        out.push_str(&self.html[pos..]);
        out
    }

    fn find_attr<'t>(&self, tag: &'t TagSpan, name: &str) -> Option<&'t AttrSpan> {
        tag.attrs
            .iter()
            .find(|attr| self.html[attr.name.clone()].eq_ignore_ascii_case(name))
    }

    // ------------------------------------------------------------------------
    // scanning
    // ------------------------------------------------------------------------

    /// Scan forward to the next opening tag, skipping everything else.
    fn scan_tag(&mut self) -> Option<TagSpan> {
        let html = self.html;
        let bytes = html.as_bytes();

        loop {
            let at = self.cursor + html.get(self.cursor..)?.find('<')?;
            let rest = &html[at..];

            if rest.starts_with("<!--") {
                self.cursor = skip_past(html, at + 4, "-->");
                continue;
            }
            if rest.starts_with("<![CDATA[") {
                self.cursor = skip_past(html, at + 9, "]]>");
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") || rest.starts_with("</") {
                self.cursor = skip_past(html, at + 2, ">");
                continue;
            }

            let name_start = at + 1;
            if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
                // A literal '<' in text
                self.cursor = name_start;
                continue;
            }

            let mut pos = name_start;
            while pos < bytes.len() && !is_tag_name_boundary(bytes[pos]) {
                pos += 1;
            }
            let name = name_start..pos;

            let Some((attrs, end)) = scan_attributes(bytes, pos) else {
                // Unterminated tag: nothing more to match
                self.cursor = bytes.len();
                return None;
            };
            self.cursor = end;
            return Some(TagSpan { name, attrs });
        }
    }

    /// Move the cursor past the closing tag of a raw text element.
    fn skip_raw_text(&mut self, name: Range<usize>) {
        let html = self.html;
        let bytes = html.as_bytes();
        let tag_name = &html[name];

        let mut search = self.cursor;
        while let Some(rel) = html.get(search..).and_then(|s| s.find("</")) {
            let start = search + rel + 2;
            let end = start + tag_name.len();
            let matches = html
                .get(start..end)
                .is_some_and(|n| n.eq_ignore_ascii_case(tag_name))
                && bytes.get(end).is_none_or(|&b| is_tag_name_boundary(b));
            if matches {
                self.cursor = start - 2;
                return;
            }
            search = start;
        }
        self.cursor = bytes.len();
    }
}

/// Index just past the first `terminator` at or after `from`, or the end.
fn skip_past(html: &str, from: usize, terminator: &str) -> usize {
    html.get(from..)
        .and_then(|s| s.find(terminator))
        .map_or(html.len(), |rel| from + rel + terminator.len())
}

/// Parse attributes from just after the tag name to the closing `>`.
///
/// Returns the attributes and the index after `>`, or `None` when the input
/// ends before the tag does.
fn scan_attributes(bytes: &[u8], mut pos: usize) -> Option<(Vec<AttrSpan>, usize)> {
    let mut attrs = Vec::new();

    loop {
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        if *bytes.get(pos)? == b'>' {
            return Some((attrs, pos + 1));
        }

        // Attribute name: a leading '=' is part of the name
        let start = pos;
        pos += 1;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'/' | b'>' | b'=')
        {
            pos += 1;
        }
        let name = start..pos;
        let mut end = pos;

        let mut after = pos;
        while after < bytes.len() && bytes[after].is_ascii_whitespace() {
            after += 1;
        }

        if bytes.get(after) == Some(&b'=') {
            pos = after + 1;
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            match *bytes.get(pos)? {
                quote @ (b'"' | b'\'') => {
                    let close = bytes[pos + 1..].iter().position(|&b| b == quote)?;
                    pos += close + 2;
                }
                _ => {
                    while pos < bytes.len()
                        && !bytes[pos].is_ascii_whitespace()
                        && bytes[pos] != b'>'
                    {
                        pos += 1;
                    }
                }
            }
            end = pos;
        } else {
            pos = after;
        }

        attrs.push(AttrSpan {
            name,
            whole: start..end,
        });
    }
}
