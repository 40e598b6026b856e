use crate::model::{Options, SingleTag};
use regex::Regex;

/// Built-in void elements.
pub static SINGLE_TAGS: &[&str] = &[
  "wxs",
  "input",
  "textarea",
  "image",
  "audio",
  "video",
  "icon",
  "progress",
  "rich-text",
  "checkbox",
  "radio",
  "slider",
  "switch",
  "live-player",
  "live-pusher",
  "voip-room",
  "canvas",
  "ad",
  "ad-custom",
  "official-account",
  "open-data",
  "web-view",
];

/// Decides which elements are void, resolved once per render call.
///
/// When any pattern is configured, patterns alone decide: the built-in list and
/// configured names are no longer consulted. Existing trees depend on this
/// precedence, so patterns replace names rather than adding to them.
#[derive(Debug)]
pub struct SingleTagPolicy<'a> {
  names: Vec<&'a str>,
  patterns: Vec<&'a Regex>,
}

impl<'a> SingleTagPolicy<'a> {
  pub fn new(options: &'a Options) -> Self {
    let mut names = Vec::new();
    let mut patterns = Vec::new();

    for tag in &options.single_tags {
      match tag {
        SingleTag::Name(name) => names.push(name.as_str()),
        SingleTag::Pattern(pattern) => patterns.push(pattern),
      }
    }

    SingleTagPolicy { names, patterns }
  }

  pub fn has_patterns(&self) -> bool {
    !self.patterns.is_empty()
  }

  pub fn configured_names(&self) -> usize {
    self.names.len()
  }

  pub fn is_single(&self, name: &str) -> bool {
    if self.has_patterns() {
      return self.patterns.iter().any(|pattern| pattern.is_match(name));
    }

    SINGLE_TAGS.contains(&name) || self.names.contains(&name)
  }
}
