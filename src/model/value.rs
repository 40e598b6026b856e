use super::node::Node;
use crate::error::Error;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Any value that can appear in a tree: a child of a node, the tree root,
/// or an attribute value.
///
/// `Clone`, `PartialEq` and `Drop` recurse on the native stack, one frame
/// group per nesting level.
#[derive(PartialEq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
  Null,
  Boolean(bool),
  Number(f64),
  String(String),
  Array(Vec<Value>),
  Node(Box<Node>),
}

impl Default for Value {
  fn default() -> Self {
    Value::Null
  }
}

impl Value {
  /// Parses a JSON tree. Nesting depth is not limited; the stack grows on
  /// demand while parsing.
  pub fn from_json(input: &str) -> Result<Value, Error> {
    let mut json = serde_json::Deserializer::from_str(input);
    json.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
  }

  /// Values that render as nothing and are skipped by the walker.
  pub fn is_vacuous(&self) -> bool {
    match self {
      Value::Null | Value::Boolean(false) => true,
      Value::String(value) => value.is_empty(),
      Value::Array(values) => values.is_empty(),
      Value::Number(value) => value.is_nan(),
      Value::Boolean(true) | Value::Node(_) => false,
    }
  }

  /// Host-language truthiness, used to decide whether an element has content.
  pub fn is_truthy(&self) -> bool {
    match self {
      Value::Null => false,
      Value::Boolean(value) => *value,
      Value::Number(value) => *value != 0.0 && !value.is_nan(),
      Value::String(value) => !value.is_empty(),
      Value::Array(_) | Value::Node(_) => true,
    }
  }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
  type Value = Value;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a string, number, boolean, null, array or node")
  }

  fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_none<E: de::Error>(self) -> Result<Value, E> {
    Ok(Value::Null)
  }

  fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
  where
    D: Deserializer<'de>,
  {
    Value::deserialize(deserializer)
  }

  fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
    Ok(Value::Boolean(value))
  }

  fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
    Ok(Value::Number(value as f64))
  }

  fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
    Ok(Value::Number(value as f64))
  }

  fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
    Ok(Value::Number(value))
  }

  fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
    Ok(Value::String(value.into()))
  }

  fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
    Ok(Value::String(value))
  }

  fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
  where
    A: SeqAccess<'de>,
  {
    let mut values = Vec::with_capacity(access.size_hint().unwrap_or(0));
    while let Some(value) = access.next_element()? {
      values.push(value);
    }
    Ok(Value::Array(values))
  }

  fn visit_map<A>(self, access: A) -> Result<Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let node = Node::deserialize(de::value::MapAccessDeserializer::new(access))?;
    Ok(Value::Node(Box::new(node)))
  }
}

/// Dispatches on the input directly, without the buffering of an untagged
/// derive.
impl<'de> Deserialize<'de> for Value {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(ValueVisitor)
  }
}

/// Prints numbers the way the tree's host language does: exponent notation
/// below 1e-6 and from 1e21 up, plain digits otherwise.
pub(crate) fn format_number(value: f64) -> String {
  if value.is_nan() {
    "NaN".into()
  } else if value.is_infinite() {
    if value > 0.0 { "Infinity" } else { "-Infinity" }.into()
  } else if value == 0.0 {
    "0".into()
  } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
      Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
      _ => formatted,
    }
  } else {
    value.to_string()
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.into())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Value {
    Value::Number(value.into())
  }
}

impl From<u32> for Value {
  fn from(value: u32) -> Value {
    Value::Number(value.into())
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Value::Number(value)
  }
}

impl From<Vec<Value>> for Value {
  fn from(value: Vec<Value>) -> Value {
    Value::Array(value)
  }
}

impl From<Node> for Value {
  fn from(value: Node) -> Value {
    Value::Node(Box::new(value))
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => write!(f, "{}", value),
      Value::Number(value) => write!(f, "{}", format_number(*value)),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Null => Ok(()),
      _ => write!(f, "[OBJECT]"),
    }
  }
}
