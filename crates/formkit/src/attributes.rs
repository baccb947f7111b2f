//! HTML attribute maps and their serialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pairs::PairList;

/// Ordered attribute name → value map.
///
/// Attributes render in insertion order. Inserting an existing name replaces
/// its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(PairList);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self(PairList::new())
    }

    /// Insert or replace an attribute, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style insert.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    /// Consume the map, yielding values in insertion order.
    pub fn into_values(self) -> impl Iterator<Item = String> {
        self.0.into_values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Renders each pair as `name='value' `, trailing space included.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, "{name}='{value}' ")?;
        }
        Ok(())
    }
}

/// Serialize attributes into a tag fragment.
///
/// Every pair becomes `name='value' ` with one trailing space; an empty map
/// yields an empty string. Names and values are written verbatim with no
/// escaping.
pub fn attributes_to_string(attributes: &Attributes) -> String {
    attributes.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attributes() {
        assert_eq!(attributes_to_string(&Attributes::new()), "");
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let attrs = Attributes::from([("method", "post"), ("action", "/submit")]);
        assert_eq!(
            attributes_to_string(&attrs),
            "method='post' action='/submit' "
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let attrs = Attributes::new().attr("data-x", "it's <b>");
        assert_eq!(attributes_to_string(&attrs), "data-x='it's <b>' ");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut attrs = Attributes::from([("class", "a"), ("id", "x")]);
        attrs.insert("class", "b");
        assert_eq!(attrs.to_string(), "class='b' id='x' ");
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_extend_and_get() {
        let mut attrs = Attributes::new();
        attrs.extend([("required", "required"), ("maxlength", "20")]);
        assert_eq!(attrs.get("maxlength"), Some("20"));
        assert_eq!(attrs.get("missing"), None);
        assert!(!attrs.is_empty());
    }
}
