use wasm_bindgen::prelude::*;
use wxml_render::{render_with_options, Options, Value};

/// Render a tree passed from JavaScript. `undefined` options select the
/// defaults; `undefined` trees render as an empty string.
///
/// `RegExp` objects cannot cross into Rust, so pattern entries in
/// `singleTags` are written as `{ pattern: "^%.*%$" }` (the regex source)
/// next to plain tag-name strings.
#[wasm_bindgen]
pub fn render(tree: JsValue, options: JsValue) -> Result<String, JsValue> {
  let tree: Value = if tree.is_undefined() {
    Value::Null
  } else {
    serde_wasm_bindgen::from_value(tree)?
  };

  let options: Options = if options.is_undefined() || options.is_null() {
    Options::default()
  } else {
    serde_wasm_bindgen::from_value(options)?
  };

  Ok(render_with_options(&tree, &options))
}

/// Exposes the built-in void element list.
#[wasm_bindgen(js_name = singleTags)]
pub fn single_tags() -> js_sys::Array {
  wxml_render::render::SINGLE_TAGS
    .iter()
    .map(|tag| JsValue::from_str(tag))
    .collect()
}
