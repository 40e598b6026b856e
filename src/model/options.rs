use crate::error::Error;
use regex::Regex;
use serde::{Deserialize, Deserializer};

/// An extra void element: either an exact tag name or a pattern tested
/// against the tag name.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawSingleTag")]
pub enum SingleTag {
  Name(String),
  Pattern(Regex),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSingleTag {
  Name(String),
  Pattern { pattern: String },
}

impl TryFrom<RawSingleTag> for SingleTag {
  type Error = Error;

  fn try_from(raw: RawSingleTag) -> Result<Self, Self::Error> {
    match raw {
      RawSingleTag::Name(name) => Ok(SingleTag::Name(name)),
      RawSingleTag::Pattern { pattern } => SingleTag::pattern(&pattern),
    }
  }
}

impl SingleTag {
  pub fn pattern(pattern: &str) -> Result<SingleTag, Error> {
    Regex::new(pattern)
      .map(SingleTag::Pattern)
      .map_err(|source| Error::Pattern {
        pattern: pattern.into(),
        source,
      })
  }
}

impl From<&str> for SingleTag {
  fn from(name: &str) -> SingleTag {
    SingleTag::Name(name.into())
  }
}

impl From<Regex> for SingleTag {
  fn from(pattern: Regex) -> SingleTag {
    SingleTag::Pattern(pattern)
  }
}

impl PartialEq for SingleTag {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (SingleTag::Name(a), SingleTag::Name(b)) => a == b,
      (SingleTag::Pattern(a), SingleTag::Pattern(b)) => a.as_str() == b.as_str(),
      _ => false,
    }
  }
}

/// How void elements are closed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClosingSingleTag {
  /// `<input></input>`
  Tag,
  /// `<input />`
  Slash,
  /// `<input>`
  Default,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClosingSingleTag {
  Flag(bool),
  Name(String),
}

/// Falsy values (`false`, `""`, `null`) leave the option unset; any other
/// value that is not `tag` or `slash` selects [`ClosingSingleTag::Default`].
fn closing_single_tag<'de, D>(deserializer: D) -> Result<Option<ClosingSingleTag>, D::Error>
where
  D: Deserializer<'de>,
{
  let closing = match Option::<RawClosingSingleTag>::deserialize(deserializer)? {
    None | Some(RawClosingSingleTag::Flag(false)) => None,
    Some(RawClosingSingleTag::Name(name)) => match name.as_str() {
      "" => None,
      "tag" => Some(ClosingSingleTag::Tag),
      "slash" => Some(ClosingSingleTag::Slash),
      _ => Some(ClosingSingleTag::Default),
    },
    Some(RawClosingSingleTag::Flag(true)) => Some(ClosingSingleTag::Default),
  };

  Ok(closing)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(from = "f64")]
pub enum QuoteStyle {
  /// Double quotes, unless the value contains one.
  Smart,
  Single,
  #[default]
  Double,
}

impl From<u8> for QuoteStyle {
  fn from(style: u8) -> Self {
    match style {
      1 => QuoteStyle::Single,
      2 => QuoteStyle::Double,
      _ => QuoteStyle::Smart,
    }
  }
}

impl From<f64> for QuoteStyle {
  fn from(style: f64) -> Self {
    if style == 1.0 {
      QuoteStyle::Single
    } else if style == 2.0 {
      QuoteStyle::Double
    } else {
      QuoteStyle::Smart
    }
  }
}

impl QuoteStyle {
  pub fn quote_for(&self, value: &str) -> char {
    match self {
      QuoteStyle::Single => '\'',
      QuoteStyle::Double => '"',
      QuoteStyle::Smart if value.contains('"') => '\'',
      QuoteStyle::Smart => '"',
    }
  }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
  /// Void elements in addition to the built-in list.
  pub single_tags: Vec<SingleTag>,
  #[serde(deserialize_with = "closing_single_tag")]
  pub closing_single_tag: Option<ClosingSingleTag>,
  pub quote_all_attributes: bool,
  /// Write `"` inside quoted attribute values as `&quot;`.
  pub replace_quote: bool,
  pub quote_style: QuoteStyle,
  pub remove_space_between_attributes: bool,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      single_tags: vec![],
      closing_single_tag: None,
      quote_all_attributes: true,
      replace_quote: true,
      quote_style: QuoteStyle::Double,
      remove_space_between_attributes: false,
    }
  }
}

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_json(input: &str) -> Result<Options, Error> {
    Ok(serde_json::from_str(input)?)
  }

  pub fn with_single_tags<I, T>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<SingleTag>,
  {
    self.single_tags = tags.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_closing_single_tag(mut self, closing: ClosingSingleTag) -> Self {
    self.closing_single_tag = Some(closing);
    self
  }

  pub fn with_quote_all_attributes(mut self, quote: bool) -> Self {
    self.quote_all_attributes = quote;
    self
  }

  pub fn with_replace_quote(mut self, replace: bool) -> Self {
    self.replace_quote = replace;
    self
  }

  pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
    self.quote_style = style;
    self
  }

  pub fn with_remove_space_between_attributes(mut self, remove: bool) -> Self {
    self.remove_space_between_attributes = remove;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn defaults() {
    let options = Options::default();
    assert!(options.single_tags.is_empty());
    assert_eq!(options.closing_single_tag, None);
    assert!(options.quote_all_attributes);
    assert!(options.replace_quote);
    assert_eq!(options.quote_style, QuoteStyle::Double);
    assert!(!options.remove_space_between_attributes);
  }

  #[test]
  fn builder() {
    let options = Options::new()
      .with_single_tags(["rect"])
      .with_closing_single_tag(ClosingSingleTag::Slash)
      .with_quote_all_attributes(false)
      .with_replace_quote(false)
      .with_quote_style(QuoteStyle::Single)
      .with_remove_space_between_attributes(true);

    assert_eq!(options.single_tags, vec![SingleTag::from("rect")]);
    assert_eq!(options.closing_single_tag, Some(ClosingSingleTag::Slash));
    assert!(!options.quote_all_attributes);
    assert!(!options.replace_quote);
    assert_eq!(options.quote_style, QuoteStyle::Single);
    assert!(options.remove_space_between_attributes);
  }

  #[test]
  fn from_json() {
    let options = Options::from_json(
      r#"{
        "singleTags": ["rect", {"pattern": "^%.*%$"}],
        "closingSingleTag": "slash",
        "quoteAllAttributes": false,
        "quoteStyle": 0
      }"#,
    )
    .expect("valid options");

    assert_eq!(
      options,
      Options {
        single_tags: vec![
          SingleTag::from("rect"),
          SingleTag::pattern("^%.*%$").expect("valid pattern"),
        ],
        closing_single_tag: Some(ClosingSingleTag::Slash),
        quote_all_attributes: false,
        quote_style: QuoteStyle::Smart,
        ..Options::default()
      }
    );
  }

  #[test]
  fn unknown_closing_is_default() {
    let options = Options::from_json(r#"{"closingSingleTag": "whatever"}"#).expect("valid options");
    assert_eq!(options.closing_single_tag, Some(ClosingSingleTag::Default));
  }

  #[test]
  fn falsy_closing_is_unset() {
    for closing in [r#""""#, "false", "null"] {
      let options = Options::from_json(&format!(r#"{{"closingSingleTag": {}}}"#, closing))
        .expect("valid options");
      assert_eq!(options.closing_single_tag, None, "closingSingleTag: {}", closing);
    }

    let options = Options::from_json(r#"{"closingSingleTag": "tag"}"#).expect("valid options");
    assert_eq!(options.closing_single_tag, Some(ClosingSingleTag::Tag));

    let options = Options::from_json(r#"{"closingSingleTag": true}"#).expect("valid options");
    assert_eq!(options.closing_single_tag, Some(ClosingSingleTag::Default));
  }

  #[test]
  fn quote_style_numbers() {
    for (input, style) in [
      ("0", QuoteStyle::Smart),
      ("1", QuoteStyle::Single),
      ("2", QuoteStyle::Double),
      ("2.0", QuoteStyle::Double),
      ("-1", QuoteStyle::Smart),
      ("3", QuoteStyle::Smart),
      ("256", QuoteStyle::Smart),
      ("1.5", QuoteStyle::Smart),
    ] {
      let options = Options::from_json(&format!(r#"{{"quoteStyle": {}}}"#, input))
        .expect("valid options");
      assert_eq!(options.quote_style, style, "quoteStyle: {}", input);
    }
  }

  #[test]
  fn invalid_pattern() {
    let err = SingleTag::pattern("(").expect_err("unbalanced group");
    assert!(matches!(err, Error::Pattern { ref pattern, .. } if pattern == "("));

    let result = Options::from_json(r#"{"singleTags": [{"pattern": "("}]}"#);
    assert!(matches!(result, Err(Error::Json(_))));
  }

  #[test]
  fn smart_quote() {
    assert_eq!(QuoteStyle::Smart.quote_for("a\"b"), '\'');
    assert_eq!(QuoteStyle::Smart.quote_for("ab"), '"');
    assert_eq!(QuoteStyle::Double.quote_for("a\"b"), '"');
    assert_eq!(QuoteStyle::Single.quote_for("ab"), '\'');
  }
}
