use super::html::LeafNode;

/// Inline span types recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed span of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    pub text_type: TextType,
    /// Target for links and source for images.
    pub url: Option<String>,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type: TextType::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            text_type: TextType::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Plain
    }

    /// Converts the fragment to the leaf node that renders it.
    pub fn to_leaf_node(&self) -> LeafNode {
        let url = self.url.clone().unwrap_or_default();
        match self.text_type {
            TextType::Plain => LeafNode::text(self.text.as_str()),
            TextType::Bold => LeafNode::new("b", self.text.as_str()),
            TextType::Italic => LeafNode::new("i", self.text.as_str()),
            TextType::Code => LeafNode::new("code", self.text.as_str()),
            TextType::Link => LeafNode::new("a", self.text.as_str())
                .with_props(vec![("href".to_string(), url)]),
            TextType::Image => LeafNode {
                tag: Some("img".to_string()),
                value: None,
                props: Some(vec![
                    ("src".to_string(), url),
                    ("alt".to_string(), self.text.clone()),
                ]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq() {
        let a = TextFragment::new("This is a text node", TextType::Bold);
        let b = TextFragment::new("This is a text node", TextType::Bold);
        assert_eq!(a, b);
    }

    #[test]
    fn test_eq_with_url() {
        let a = TextFragment::link("text", "abc");
        let b = TextFragment::link("text", "abc");
        assert_eq!(a, b);
        assert_ne!(a, TextFragment::link("text", "abd"));
    }

    #[test]
    fn test_neq_type() {
        let a = TextFragment::new("This is a text node", TextType::Bold);
        let b = TextFragment::new("This is a text node", TextType::Italic);
        assert_ne!(a, b);
    }

    #[test]
    fn test_plain_to_leaf() {
        let leaf = TextFragment::plain("This is a text node").to_leaf_node();
        assert_eq!(leaf.tag, None);
        assert_eq!(leaf.value.as_deref(), Some("This is a text node"));
    }

    #[test]
    fn test_bold_to_leaf() {
        let leaf = TextFragment::new("x", TextType::Bold).to_leaf_node();
        assert_eq!(leaf.tag.as_deref(), Some("b"));
        assert_eq!(leaf.value.as_deref(), Some("x"));
    }

    #[test]
    fn test_image_to_leaf() {
        let leaf = TextFragment::image("This is a text node", "http://a.b").to_leaf_node();
        assert_eq!(leaf.tag.as_deref(), Some("img"));
        assert_eq!(leaf.value, None);
        assert_eq!(
            leaf.props,
            Some(vec![
                ("src".to_string(), "http://a.b".to_string()),
                ("alt".to_string(), "This is a text node".to_string()),
            ])
        );
    }

    #[test]
    fn test_link_to_leaf() {
        let leaf = TextFragment::link("boot", "http://a.b").to_leaf_node();
        assert_eq!(leaf.to_html().unwrap(), "<a href=\"http://a.b\">boot</a>");
    }
}
