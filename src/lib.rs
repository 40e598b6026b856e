//! Renders PostHTML-style markup trees to WXML/HTML text.
//!
//! A tree is a [`Value`]: text, numbers, nodes, or nested arrays of them.
//! Nodes carry an optional tag, an ordered attribute map and content.
//!
//! ```
//! use wxml_render::{attrs, render, Node};
//!
//! let tree = Node::new("input").with_attrs(attrs! { "type" => "number", "disabled" => true });
//! assert_eq!(render(&tree.into()), r#"<input type="number" disabled>"#);
//! ```

#[macro_use]
pub mod macros;
pub mod error;
pub mod model;
pub mod render;

pub use error::Error;
pub use model::{Attributes, ClosingSingleTag, Node, Options, QuoteStyle, SingleTag, Tag, Value};
pub use render::format_attributes;

/// Render a tree with default options.
pub fn render(tree: &Value) -> String {
  render::html::render(tree, &Options::default())
}

/// Render a tree with the given options. Never fails: attribute values of
/// unsupported kinds are dropped and vacuous values render as nothing.
///
/// ```
/// use wxml_render::{render_with_options, ClosingSingleTag, Node, Options, Value};
///
/// let options = Options::new().with_closing_single_tag(ClosingSingleTag::Slash);
/// let tree: Value = Node::new("input").with_content("t").into();
/// assert_eq!(render_with_options(&tree, &options), "<input />t");
/// ```
pub fn render_with_options(tree: &Value, options: &Options) -> String {
  render::html::render(tree, options)
}

/// Parse a JSON tree, and optionally JSON options, then render.
pub fn render_json(tree: &str, options: Option<&str>) -> Result<String, Error> {
  let tree = Value::from_json(tree)?;
  let options = match options {
    Some(options) => Options::from_json(options)?,
    None => Options::default(),
  };

  Ok(render_with_options(&tree, &options))
}
