//! Block parser - splits a document into blocks and classifies them.

use crate::{error::Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Block-level structure of a Markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paragraph" => Ok(BlockType::Paragraph),
            "heading" => Ok(BlockType::Heading),
            "code" => Ok(BlockType::Code),
            "quote" => Ok(BlockType::Quote),
            "unordered_list" => Ok(BlockType::UnorderedList),
            "ordered_list" => Ok(BlockType::OrderedList),
            other => Err(Error::UnknownBlockType(other.to_string())),
        }
    }
}

const CODE_FENCE: &str = "```";

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^#{1,6} .*$").expect("Invalid heading regex"))
}

fn ordered_marker_regex() -> &'static Regex {
    static ORDERED_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER_REGEX
        .get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid ordered list regex"))
}

/// Splits a document on blank lines into trimmed, non-empty blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies a trimmed block. The first matching rule wins.
pub fn block_to_block_type(block: &str) -> BlockType {
    if heading_regex().is_match(block) {
        return BlockType::Heading;
    }
    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Number of leading `#` characters of a heading block.
pub fn heading_level(block: &str) -> usize {
    block.chars().take_while(|c| *c == '#').count()
}

/// Heading text with the `#+ ` marker removed.
pub fn heading_text(block: &str) -> &str {
    let rest = block.trim_start_matches('#');
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Paragraph lines joined with single spaces.
pub fn paragraph_text(block: &str) -> String {
    block.split('\n').collect::<Vec<_>>().join(" ")
}

/// Verbatim body of a fenced code block: trailing fence and opening line removed.
pub fn code_text(block: &str) -> String {
    let without_fence = block.strip_suffix(CODE_FENCE).unwrap_or(block);
    without_fence
        .split('\n')
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote lines with their leading `>` removed, run together.
pub fn quote_text(block: &str) -> String {
    block
        .split('\n')
        .map(|line| line.strip_prefix('>').unwrap_or(line))
        .collect()
}

/// Item texts of an unordered list.
pub fn unordered_items(block: &str) -> Vec<&str> {
    block
        .split('\n')
        .map(|line| line.strip_prefix("- ").unwrap_or(line))
        .collect()
}

/// Item texts of an ordered list.
pub fn ordered_items(block: &str) -> Vec<&str> {
    let marker = ordered_marker_regex();
    block
        .split('\n')
        .map(|line| match marker.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_to_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_markdown_to_blocks_multiple_newlines() {
        let md = "
This is **bolded** paragraph





- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec!["This is **bolded** paragraph", "- This is a list\n- with items"]
        );
    }

    #[test]
    fn test_block_type_heading() {
        assert_eq!(block_to_block_type("## test"), BlockType::Heading);
        assert_eq!(block_to_block_type("###### six"), BlockType::Heading);
        assert_eq!(block_to_block_type("####### seven"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("#nospace"), BlockType::Paragraph);
    }

    #[test]
    fn test_multiline_heading_is_paragraph() {
        assert_eq!(block_to_block_type("# a\nb"), BlockType::Paragraph);
    }

    #[test]
    fn test_block_type_code() {
        assert_eq!(block_to_block_type("```test```"), BlockType::Code);
        assert_eq!(block_to_block_type("```\nfn main() {}\n```"), BlockType::Code);
    }

    #[test]
    fn test_block_type_quote() {
        assert_eq!(block_to_block_type("> test\n> bla"), BlockType::Quote);
        assert_eq!(block_to_block_type("> test\nbla"), BlockType::Paragraph);
    }

    #[test]
    fn test_block_type_unordered_list() {
        assert_eq!(block_to_block_type("- test\n- bla"), BlockType::UnorderedList);
    }

    #[test]
    fn test_block_type_ordered_list() {
        assert_eq!(block_to_block_type("1. test\n2. bla"), BlockType::OrderedList);
        assert_eq!(block_to_block_type("1. test\n3. bla"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("2. test"), BlockType::Paragraph);
    }

    #[test]
    fn test_block_type_round_trips_through_str() {
        for block_type in [
            BlockType::Paragraph,
            BlockType::Heading,
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
        ] {
            assert_eq!(block_type.to_string().parse::<BlockType>().unwrap(), block_type);
        }
    }

    #[test]
    fn test_unknown_block_type_name() {
        let err = "table".parse::<BlockType>().unwrap_err();
        assert!(matches!(err, Error::UnknownBlockType(name) if name == "table"));
    }

    #[test]
    fn test_heading_parts() {
        assert_eq!(heading_level("### heading"), 3);
        assert_eq!(heading_text("### heading"), "heading");
        assert_eq!(heading_text("# C# notes"), "C# notes");
    }

    #[test]
    fn test_code_text() {
        assert_eq!(code_text("```\nline1\nline2\n```"), "line1\nline2\n");
        assert_eq!(code_text("```rust\nlet x = 1;\n```"), "let x = 1;\n");
        assert_eq!(code_text("```test```"), "");
    }

    #[test]
    fn test_quote_text_runs_lines_together() {
        assert_eq!(quote_text("> line1\n> line2"), " line1 line2");
        assert_eq!(quote_text(">a\n>b"), "ab");
    }

    #[test]
    fn test_list_items() {
        assert_eq!(unordered_items("- a\n- b"), vec!["a", "b"]);
        assert_eq!(ordered_items("1. a\n2. b"), vec!["a", "b"]);
        assert_eq!(ordered_items("9. x\n10. y"), vec!["x", "y"]);
    }
}
