//! Ordered key/value attributes attached to graphs, nodes and edges.

use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;

use super::dot_writer::quote_id;

/// Attribute names the pipeline reads or writes.
pub const LEN: &str = "len";
pub const LABEL: &str = "label";
pub const SHAPE: &str = "shape";

/// Attributes are kept as strings, exactly as they will be written to dot.
///
/// A BTreeMap keeps the output order stable, so the same graph always
/// produces the same dot text.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(BTreeMap::new())
    }

    /// Set key to value, returning the previous value if there was one.
    pub fn set(&mut self, key: &str, value: impl ToString) -> Option<String> {
        self.0.insert(key.to_string(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (key, value) in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Copy every attribute of other into self, overwriting existing keys.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Formats as the inside of a dot attribute list: `a=1, b="x y"`.
impl Display for Attributes {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = self
            .iter()
            .map(|(key, value)| format!("{}={}", quote_id(key), quote_id(value)))
            .join(", ");

        write!(fmt, "{list}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = Attributes::new();

        assert_eq!(attrs.set(LEN, 2), None);
        assert_eq!(attrs.set(LEN, 3.5), Some("2".to_string()));
        assert_eq!(attrs.get(LEN), Some("3.5"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut attrs: Attributes = [("color", "red"), ("len", "2")].into_iter().collect();

        assert_eq!(attrs.remove("color"), Some("red".to_string()));
        assert_eq!(attrs.remove("color"), None);
        assert_eq!(attrs.get("color"), None);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.to_string(), "len=2");
    }

    #[test]
    fn test_display_is_sorted_and_quoted() {
        let attrs: Attributes = [("label", "a b"), ("color", "red"), ("len", "1.5")]
            .into_iter()
            .collect();

        assert_eq!(attrs.to_string(), r#"color=red, label="a b", len=1.5"#);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut attrs: Attributes = [("overlap", "true"), ("sep", "1")].into_iter().collect();
        let other: Attributes = [("overlap", "false")].into_iter().collect();

        attrs.merge(&other);

        assert_eq!(attrs.get("overlap"), Some("false"));
        assert_eq!(attrs.get("sep"), Some("1"));
    }
}
