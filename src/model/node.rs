use super::value::Value;
use super::Attributes;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tag name used when a node has no tag of its own.
pub const DEFAULT_TAG: &str = "view";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Tag {
  Name(String),
  /// Written as `tag: false` in a tree: the node renders its content only.
  Transparent,
}

impl From<&str> for Tag {
  fn from(name: &str) -> Tag {
    Tag::Name(name.into())
  }
}

impl From<String> for Tag {
  fn from(name: String) -> Tag {
    Tag::Name(name)
  }
}

impl Serialize for Tag {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Tag::Name(name) => serializer.serialize_str(name),
      Tag::Transparent => serializer.serialize_bool(false),
    }
  }
}

struct TagVisitor;

impl<'de> Visitor<'de> for TagVisitor {
  type Value = Tag;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a tag name or `false`")
  }

  fn visit_str<E: de::Error>(self, value: &str) -> Result<Tag, E> {
    Ok(Tag::Name(value.into()))
  }

  fn visit_string<E: de::Error>(self, value: String) -> Result<Tag, E> {
    Ok(Tag::Name(value))
  }

  fn visit_bool<E: de::Error>(self, value: bool) -> Result<Tag, E> {
    if value {
      Err(E::invalid_value(de::Unexpected::Bool(true), &self))
    } else {
      Ok(Tag::Transparent)
    }
  }
}

impl<'de> Deserialize<'de> for Tag {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(TagVisitor)
  }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Node {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag: Option<Tag>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Attributes>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<Value>,
}

impl Node {
  pub fn new(tag: impl Into<Tag>) -> Self {
    Node {
      tag: Some(tag.into()),
      ..Node::default()
    }
  }

  pub fn transparent(content: impl Into<Value>) -> Self {
    Node {
      tag: Some(Tag::Transparent),
      content: Some(content.into()),
      ..Node::default()
    }
  }

  pub fn with_attrs(mut self, attrs: Attributes) -> Self {
    self.attrs = Some(attrs);
    self
  }

  pub fn with_content(mut self, content: impl Into<Value>) -> Self {
    self.content = Some(content.into());
    self
  }

  pub fn push(&mut self, child: impl Into<Value>) {
    let child = child.into();
    match &mut self.content {
      Some(Value::Array(children)) => children.push(child),
      Some(single) => {
        let first = std::mem::take(single);
        *single = Value::Array(vec![first, child]);
      }
      None => self.content = Some(Value::Array(vec![child])),
    }
  }

  pub fn attribute(&self, key: &str) -> Option<&Value> {
    self.attrs.as_ref().and_then(|attrs| attrs.get(key))
  }

  pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    self.attrs.get_or_insert_with(Attributes::new).insert(key, value)
  }

  pub fn is_transparent(&self) -> bool {
    matches!(self.tag, Some(Tag::Transparent))
  }

  /// The tag this node is written with. Missing and empty names fall back to
  /// [`DEFAULT_TAG`].
  pub fn name(&self) -> &str {
    match &self.tag {
      Some(Tag::Name(name)) if !name.is_empty() => name,
      _ => DEFAULT_TAG,
    }
  }

  pub fn has_content(&self) -> bool {
    self.content.as_ref().map_or(false, Value::is_truthy)
  }
}

impl From<Attributes> for Node {
  fn from(attrs: Attributes) -> Node {
    Node::default().with_attrs(attrs)
  }
}
