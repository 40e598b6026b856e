/// Builds an ordered [`Attributes`](crate::model::Attributes) map.
///
/// ```
/// use wxml_render::attrs;
///
/// let attrs = attrs! { "id" => "header", "disabled" => true, "tabindex" => 1 };
/// assert_eq!(attrs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
  () => {
    $crate::model::Attributes::new()
  };

  ($($key:expr => $value:expr),+ $(,)?) => {
    <$crate::model::Attributes as ::std::iter::FromIterator<(String, $crate::model::Value)>>::from_iter([
      $((String::from($key), $crate::model::Value::from($value)),)+
    ])
  };
}
