//! HTML node tree produced by the converter.

use crate::{error::Error, Result};

/// Ordered attribute list. Rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// Tag rendered even when the leaf carries no value.
const VOID_TAG: &str = "img";

/// A node of the generated HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes the node and its descendants.
    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Renders attributes as ` name="value"` pairs. Values are not escaped.
pub fn props_to_html(props: Option<&Attributes>) -> String {
    let Some(props) = props else {
        return String::new();
    };
    let mut out = String::new();
    for (name, value) in props {
        out.push_str(&format!(" {}=\"{}\"", name, value));
    }
    out
}

/// A node holding text (or nothing, for void tags) and no children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// Tag name; `None` renders the bare value.
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: None,
        }
    }

    /// Untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            props: None,
        }
    }

    pub fn with_props(mut self, props: Attributes) -> Self {
        self.props = Some(props);
        self
    }

    pub fn to_html(&self) -> Result<String> {
        if self.value.is_none() && self.tag.as_deref() != Some(VOID_TAG) {
            return Err(Error::Content(format!(
                "leaf node <{}> has no value",
                self.tag.as_deref().unwrap_or("")
            )));
        }
        let value = self.value.as_deref().unwrap_or("");
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                props_to_html(self.props.as_ref())
            )),
        }
    }
}

/// A node wrapping child nodes.
///
/// Props are carried but never rendered on parents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub props: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            props: None,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        let Some(tag) = &self.tag else {
            return Err(Error::Content("parent node has no tag".to_string()));
        };
        let Some(children) = &self.children else {
            return Err(Error::Content(format!("parent node <{tag}> has no children")));
        };

        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.to_html()?);
        }
        Ok(format!("<{tag}>{inner}</{tag}>"))
    }
}
