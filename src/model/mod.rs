use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod node;
pub mod options;
pub mod value;

pub use node::{Node, Tag};
pub use options::{ClosingSingleTag, Options, QuoteStyle, SingleTag};
pub use value::Value;

/// Attribute map that keeps insertion order, which is also the order the
/// attributes are written in.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Attributes(Vec<(String, Value)>);

impl Attributes {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.iter().find(|(name, _)| name == key).map(|(_, value)| value)
  }

  /// Replaces the value in place when `key` is already present, so the
  /// attribute keeps its original position.
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    let key = key.into();
    let value = value.into();

    match self.0.iter_mut().find(|(name, _)| *name == key) {
      Some((_, slot)) => Some(std::mem::replace(slot, value)),
      None => {
        self.0.push((key, value));
        None
      }
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.0.iter().map(|(name, value)| (name.as_str(), value))
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut attrs = Attributes::new();
    for (key, value) in iter {
      attrs.insert(key, value);
    }
    attrs
  }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Attributes {
  fn from(entries: [(K, V); N]) -> Self {
    entries.into_iter().collect()
  }
}

impl Serialize for Attributes {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for (key, value) in &self.0 {
      map.serialize_entry(key, value)?;
    }
    map.end()
  }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
  type Value = Attributes;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a map of attribute names to values")
  }

  fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut attrs = Attributes(Vec::with_capacity(access.size_hint().unwrap_or(0)));
    while let Some((key, value)) = access.next_entry::<String, Value>()? {
      attrs.insert(key, value);
    }
    Ok(attrs)
  }
}

impl<'de> Deserialize<'de> for Attributes {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(AttributesVisitor)
  }
}
