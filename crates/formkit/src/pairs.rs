//! Insertion-ordered string pairs shared by attribute and option maps.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered list of unique keys with string values.
///
/// Re-inserting a key replaces the value and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PairList(Vec<(String, String)>);

impl PairList {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = String> {
        self.0.into_iter().map(|(_, v)| v)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PairList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (k, v) in iter {
            list.insert(k.into(), v.into());
        }
        list
    }
}

// Serialized as a map so `{"action": "/submit"}` round-trips in order.
impl Serialize for PairList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Accepts either a map or a sequence of `[key, value]` pairs. Map entries
// are visited in document order, so ordering is preserved without relying
// on an order-preserving map type.
impl<'de> Deserialize<'de> for PairList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairListVisitor;

        impl<'de> Visitor<'de> for PairListVisitor {
            type Value = PairList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings or a list of [key, value] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PairList, A::Error> {
                let mut list = PairList::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    list.insert(k, v);
                }
                Ok(list)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<PairList, A::Error> {
                let mut list = PairList::new();
                while let Some((k, v)) = access.next_element::<(String, String)>()? {
                    list.insert(k, v);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_any(PairListVisitor)
    }
}
