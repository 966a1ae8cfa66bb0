//! Ordered CSS property map.

use serde_json::Value;

use crate::block::JsonMap;

/// CSS property -> value, kept in first-insertion order.
///
/// Re-inserting a property replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Insert every side of a spacing object as `<prefix>-<side>`.
    ///
    /// String values are taken verbatim and numbers by their JSON text;
    /// anything else is skipped.
    pub fn extend_prefixed(&mut self, prefix: &str, sides: &JsonMap) {
        for (side, value) in sides {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => continue,
            };
            self.insert(format!("{prefix}-{side}"), value);
        }
    }

    /// Rewrite every value in place.
    pub fn map_values(&mut self, f: impl Fn(&str) -> String) {
        for (_, value) in &mut self.entries {
            *value = f(value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as an inline style: `"a: 1; b: 2;"`.
    ///
    /// Properties with an empty value are dropped.
    pub fn to_inline_css(&self) -> String {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
