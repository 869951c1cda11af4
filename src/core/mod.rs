//! Data model shared by the converter and renderer.

pub mod html;
pub mod text;

pub use html::{props_to_html, Attributes, HtmlNode, LeafNode, ParentNode};
pub use text::{TextFragment, TextType};
