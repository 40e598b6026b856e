use super::attributes::write_attributes;
use super::policy::SingleTagPolicy;
use crate::model::{ClosingSingleTag, Node, Options, Value};
use tracing::{debug, trace};

static EMPTY_NODE: Node = Node {
  tag: None,
  attrs: None,
  content: None,
};

enum Step<'a> {
  Visit(&'a Value),
  Close(&'a str),
}

/// Renders a tree with the given options.
///
/// The walk is depth-first and pre-order, driven by an explicit stack so that
/// deep trees do not grow the native call stack.
pub fn render(tree: &Value, options: &Options) -> String {
  let policy = SingleTagPolicy::new(options);
  debug!(
    patterns = policy.has_patterns(),
    names = policy.configured_names(),
    "rendering tree"
  );

  let mut output = String::new();
  let mut stack = vec![Step::Visit(tree)];

  while let Some(step) = stack.pop() {
    match step {
      Step::Close(name) => {
        output.push_str("</");
        output.push_str(name);
        output.push('>');
      }

      Step::Visit(value) if value.is_vacuous() => (),

      Step::Visit(Value::Array(values)) => {
        stack.extend(values.iter().rev().map(Step::Visit));
      }

      Step::Visit(Value::String(text)) => output.push_str(text),

      Step::Visit(value @ Value::Number(_)) => output.push_str(&value.to_string()),

      Step::Visit(Value::Node(node)) if node.is_transparent() => {
        if let Some(content) = &node.content {
          stack.push(Step::Visit(content));
        }
      }

      Step::Visit(Value::Node(node)) => open_element(node, options, &policy, &mut output, &mut stack),

      // `true` in child position renders as an empty default element.
      Step::Visit(Value::Boolean(_) | Value::Null) => {
        open_element(&EMPTY_NODE, options, &policy, &mut output, &mut stack)
      }
    }
  }

  output
}

fn open_element<'a>(
  node: &'a Node,
  options: &Options,
  policy: &SingleTagPolicy,
  output: &mut String,
  stack: &mut Vec<Step<'a>>,
) {
  let name = node.name();

  output.push('<');
  output.push_str(name);

  if let Some(attrs) = &node.attrs {
    write_attributes(attrs, options, output);
  }

  if policy.is_single(name) {
    match options.closing_single_tag {
      Some(ClosingSingleTag::Tag) => close_with_tag(name, output),
      Some(ClosingSingleTag::Slash) => close_with_slash(options, output),
      Some(ClosingSingleTag::Default) | None => output.push('>'),
    }

    // Content of a void element follows it as a sibling.
    if let Some(content) = &node.content {
      trace!(tag = name, "void element with trailing content");
      stack.push(Step::Visit(content));
    }
  } else if !node.has_content() && options.closing_single_tag.is_some() {
    match options.closing_single_tag {
      Some(ClosingSingleTag::Tag) => close_with_tag(name, output),
      _ => close_with_slash(options, output),
    }
  } else {
    output.push('>');
    stack.push(Step::Close(name));

    if let Some(content) = &node.content {
      stack.push(Step::Visit(content));
    }
  }
}

fn close_with_tag(name: &str, output: &mut String) {
  output.push_str("></");
  output.push_str(name);
  output.push('>');
}

fn close_with_slash(options: &Options, output: &mut String) {
  if !options.remove_space_between_attributes {
    output.push(' ');
  }
  output.push_str("/>");
}
