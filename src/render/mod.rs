//! Serialization of trees to markup text.

pub mod attributes;
pub mod html;
pub mod policy;

pub use attributes::format_attributes;
pub use policy::{SingleTagPolicy, SINGLE_TAGS};
