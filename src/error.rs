use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid single tag pattern `{pattern}`: {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },

  #[error("invalid json: {0}")]
  Json(#[from] serde_json::Error),
}
