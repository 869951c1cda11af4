//! Converter modules for Markdown to HTML transformation.

pub mod block;
pub mod inline;

use crate::core::{HtmlNode, LeafNode, ParentNode};
use crate::Result;

pub use self::block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use self::inline::{text_to_fragments, tokenize_with, InlinePass, DEFAULT_PASSES};

/// Converts Markdown documents into an HTML node tree.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    passes: Vec<InlinePass>,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(DEFAULT_PASSES.to_vec())
    }
}

impl MarkdownConverter {
    /// Creates a converter that tokenizes inline text with `passes`, in order.
    pub fn new(passes: Vec<InlinePass>) -> Self {
        Self { passes }
    }

    /// Creates a converter with the default inline passes.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Converts a Markdown document to a `div` holding one node per block.
    pub fn convert(&self, markdown: &str) -> HtmlNode {
        let children = markdown_to_blocks(markdown)
            .into_iter()
            .map(|block| self.convert_block(block, block_to_block_type(block)))
            .collect();
        ParentNode::new("div", children).into()
    }

    /// Converts a Markdown document straight to an HTML string.
    pub fn convert_to_html(&self, markdown: &str) -> Result<String> {
        self.convert(markdown).to_html()
    }

    fn convert_block(&self, block: &str, block_type: BlockType) -> HtmlNode {
        match block_type {
            BlockType::Heading => {
                let tag = format!("h{}", block::heading_level(block));
                ParentNode::new(tag, self.inline_children(block::heading_text(block))).into()
            }
            BlockType::Paragraph => {
                ParentNode::new("p", self.inline_children(&block::paragraph_text(block))).into()
            }
            BlockType::Code => {
                let code = LeafNode::new("code", block::code_text(block));
                ParentNode::new("pre", vec![code.into()]).into()
            }
            BlockType::Quote => {
                ParentNode::new("blockquote", self.inline_children(&block::quote_text(block)))
                    .into()
            }
            BlockType::UnorderedList => self.list("ul", block::unordered_items(block)),
            BlockType::OrderedList => self.list("ol", block::ordered_items(block)),
        }
    }

    fn list(&self, tag: &str, items: Vec<&str>) -> HtmlNode {
        let children = items
            .into_iter()
            .map(|item| ParentNode::new("li", self.inline_children(item)).into())
            .collect();
        ParentNode::new(tag, children).into()
    }

    fn inline_children(&self, text: &str) -> Vec<HtmlNode> {
        tokenize_with(text, &self.passes)
            .iter()
            .map(|fragment| fragment.to_leaf_node().into())
            .collect()
    }
}

/// Converts a Markdown document with the default converter.
pub fn markdown_to_html_node(markdown: &str) -> HtmlNode {
    MarkdownConverter::default().convert(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        markdown_to_html_node(md).to_html().expect("render should work")
    }

    #[test]
    fn test_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_codeblock() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            html("\n- item1\n- item2\n"),
            "<div><ul><li>item1</li><li>item2</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            html("\n1. item1 **bold**\n2. item2\n"),
            "<div><ol><li>item1 <b>bold</b></li><li>item2</li></ol></div>"
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            html("\n> line1\n> line2\n"),
            "<div><blockquote> line1 line2</blockquote></div>"
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(html("\n### heading\n"), "<div><h3>heading</h3></div>");
    }

    #[test]
    fn test_heading_with_link_and_image() {
        assert_eq!(
            html("## See [docs](/docs) ![logo](/logo.png)"),
            "<div><h2>See <a href=\"/docs\">docs</a> <img src=\"/logo.png\" alt=\"logo\"></img></h2></div>"
        );
    }

    #[test]
    fn test_empty_document_is_empty_div() {
        assert_eq!(html(""), "<div></div>");
        assert_eq!(html("\n\n\n"), "<div></div>");
    }

    #[test]
    fn test_custom_passes_skip_inline_markup() {
        let converter = MarkdownConverter::new(Vec::new());
        assert_eq!(
            converter.convert_to_html("plain **not bold**").unwrap(),
            "<div><p>plain **not bold**</p></div>"
        );
    }

    #[test]
    fn test_block_tags_in_order() {
        let node = markdown_to_html_node("# t\n\npara\n\n- a\n\n1. b\n\n> q\n\n```\nc\n```");
        let HtmlNode::Parent(root) = node else {
            panic!("root should be a parent node");
        };
        let tags: Vec<_> = root
            .children
            .unwrap_or_default()
            .iter()
            .map(|child| child.tag().unwrap_or("").to_string())
            .collect();
        assert_eq!(tags, vec!["h1", "p", "ul", "ol", "blockquote", "pre"]);
    }
}
