use crate::model::value::format_number;
use crate::model::{Attributes, Options, Value};
use std::borrow::Cow;
use tracing::trace;

/// Characters that force a value to be quoted even when
/// `quote_all_attributes` is off.
const QUOTES_REQUIRED: &[char] = &['\t', '\n', '\x0c', '\r', ' ', '"', '\'', '`', '=', '<', '>'];

#[derive(Clone, Copy, PartialEq)]
enum Emitted {
  Bare,
  Quoted,
}

pub fn requires_quotes(value: &str) -> bool {
  value.contains(QUOTES_REQUIRED)
}

/// Formats `attrs` as the text that follows a tag name, leading space included.
pub fn format_attributes(attrs: &Attributes, options: &Options) -> String {
  let mut output = String::new();
  write_attributes(attrs, options, &mut output);
  output
}

pub(crate) fn write_attributes(attrs: &Attributes, options: &Options, output: &mut String) {
  let mut previous = None;

  for (key, value) in attrs.iter() {
    let emitted = match value {
      Value::Boolean(true) => write_bare(key, None, output),

      Value::Number(number) => write_quoted(key, &format_number(*number), previous, options, output),

      Value::String(text) if options.quote_all_attributes || requires_quotes(text) => {
        let text = if options.replace_quote {
          Cow::Owned(text.replace('"', "&quot;"))
        } else {
          Cow::Borrowed(text.as_str())
        };

        if text.is_empty() {
          write_bare(key, None, output)
        } else {
          write_quoted(key, &text, previous, options, output)
        }
      }

      Value::String(text) if text.is_empty() => write_bare(key, None, output),
      Value::String(text) => write_bare(key, Some(text), output),

      _ => {
        trace!(attribute = key, ?value, "dropping attribute");
        continue;
      }
    };

    previous = Some(emitted);
  }
}

fn write_bare(key: &str, value: Option<&str>, output: &mut String) -> Emitted {
  output.push(' ');
  output.push_str(key);

  if let Some(value) = value {
    output.push('=');
    output.push_str(value);
  }

  Emitted::Bare
}

fn write_quoted(
  key: &str,
  value: &str,
  previous: Option<Emitted>,
  options: &Options,
  output: &mut String,
) -> Emitted {
  let quote = options.quote_style.quote_for(value);

  if !(options.remove_space_between_attributes && previous == Some(Emitted::Quoted)) {
    output.push(' ');
  }

  output.push_str(key);
  output.push('=');
  output.push(quote);
  output.push_str(value);
  output.push(quote);

  Emitted::Quoted
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Node, QuoteStyle};
  use pretty_assertions::assert_eq;

  fn compact() -> Options {
    Options::new().with_remove_space_between_attributes(true)
  }

  #[test]
  fn quoting_triggers() {
    for value in ["a b", "a\tb", "a\nb", "a\x0cb", "a\rb", "a\"b", "a'b", "a`b", "a=b", "a<b", "a>b"] {
      assert!(requires_quotes(value), "{:?} needs quotes", value);
    }
    assert!(!requires_quotes("/about/me/"));
    assert!(!requires_quotes(""));
  }

  #[test]
  fn empty_attributes() {
    assert_eq!(format_attributes(&Attributes::new(), &Options::default()), "");
  }

  #[test]
  fn kinds() {
    let attrs = attrs! {
      "id" => "header",
      "disabled" => true,
      "hidden" => false,
      "val" => 5,
      "ratio" => 1.5,
      "alt" => "",
      "missing" => Value::Null,
      "list" => vec![Value::from("a")],
      "node" => Node::default(),
    };

    assert_eq!(
      format_attributes(&attrs, &Options::default()),
      r#" id="header" disabled val="5" ratio="1.5" alt"#
    );
  }

  #[test]
  fn numbers_are_quoted_without_quote_all() {
    let attrs = attrs! { "val" => 5 };
    let options = Options::new().with_quote_all_attributes(false);
    assert_eq!(format_attributes(&attrs, &options), r#" val="5""#);
  }

  #[test]
  fn nan_attribute_is_written() {
    let attrs = attrs! { "val" => f64::NAN };
    assert_eq!(format_attributes(&attrs, &Options::default()), r#" val="NaN""#);
  }

  #[test]
  fn unquoted_when_allowed() {
    let attrs = attrs! { "href" => "/about/me/", "id" => "asd adsasd", "async" => "" };
    let options = Options::new().with_quote_all_attributes(false);
    assert_eq!(
      format_attributes(&attrs, &options),
      r#" href=/about/me/ id="asd adsasd" async"#
    );
  }

  #[test]
  fn replace_quote() {
    let attrs = attrs! { "onclick" => r#"alert("x")"# };

    assert_eq!(
      format_attributes(&attrs, &Options::default()),
      r#" onclick="alert(&quot;x&quot;)""#
    );
    assert_eq!(
      format_attributes(&attrs, &Options::new().with_replace_quote(false)),
      r#" onclick="alert("x")""#
    );
  }

  #[test]
  fn smart_quote_sees_replaced_value() {
    let attrs = attrs! { "onclick" => r#"alert("x")"# };
    let options = Options::new().with_quote_style(QuoteStyle::Smart);
    assert_eq!(
      format_attributes(&attrs, &options),
      r#" onclick="alert(&quot;x&quot;)""#
    );

    let options = options.with_replace_quote(false);
    assert_eq!(format_attributes(&attrs, &options), r#" onclick='alert("x")'"#);
  }

  #[test]
  fn remove_space_between_quoted() {
    let attrs = attrs! { "class" => "phone", "type" => "number" };
    assert_eq!(format_attributes(&attrs, &compact()), r#" class="phone"type="number""#);
  }

  #[test]
  fn remove_space_keeps_space_around_bare() {
    let middle = attrs! { "class" => "phone", "disabled" => "", "type" => "number" };
    assert_eq!(
      format_attributes(&middle, &compact()),
      r#" class="phone" disabled type="number""#
    );

    let start = attrs! { "disabled" => "", "class" => "phone", "type" => "number" };
    assert_eq!(
      format_attributes(&start, &compact()),
      r#" disabled class="phone"type="number""#
    );

    let end = attrs! { "class" => "phone", "type" => "number", "disabled" => true };
    assert_eq!(
      format_attributes(&end, &compact()),
      r#" class="phone"type="number" disabled"#
    );

    let flag = attrs! { "disabled" => true, "type" => "number" };
    assert_eq!(format_attributes(&flag, &compact()), r#" disabled type="number""#);
  }

  #[test]
  fn remove_space_ignores_dropped_attributes() {
    let attrs = attrs! { "hidden" => false, "class" => "phone", "type" => "number" };
    assert_eq!(format_attributes(&attrs, &compact()), r#" class="phone"type="number""#);
  }

  #[test]
  fn remove_space_with_unquoted_values() {
    let attrs = attrs! { "class" => "phone", "type" => "number" };
    let options = compact().with_quote_all_attributes(false);
    assert_eq!(format_attributes(&attrs, &options), " class=phone type=number");
  }
}
