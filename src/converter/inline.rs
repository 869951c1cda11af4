//! Inline tokenizer - splits raw text into typed fragments.
//!
//! Tokenizing runs an ordered list of passes over the fragment sequence.
//! Each pass rewrites only fragments that are still [`TextType::Plain`], so
//! markup nested inside an earlier span (a link inside bold text, say) is
//! left as literal text.

use crate::core::{TextFragment, TextType};
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::OnceLock;

/// A single tokenizer pass over the whole fragment sequence.
pub type InlinePass = fn(Vec<TextFragment>) -> Vec<TextFragment>;

/// Pass order used by [`text_to_fragments`].
pub const DEFAULT_PASSES: [InlinePass; 5] =
    [split_bold, split_italic, split_code, split_images, split_links];

/// `![alt](url)` or `[text](url)` located in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRef {
    pub text: String,
    pub url: String,
    /// Byte range of the whole match, brackets included.
    pub span: Range<usize>,
}

/// Tokenizes `text` with [`DEFAULT_PASSES`].
pub fn text_to_fragments(text: &str) -> Vec<TextFragment> {
    tokenize_with(text, &DEFAULT_PASSES)
}

/// Tokenizes `text` by folding `passes` over a single plain fragment.
pub fn tokenize_with(text: &str, passes: &[InlinePass]) -> Vec<TextFragment> {
    passes
        .iter()
        .fold(vec![TextFragment::plain(text)], |fragments, pass| {
            pass(fragments)
        })
}

/// Splits plain fragments on `delimiter`, alternating between the original
/// type and `text_type`.
///
/// Delimiters are not checked for balance: an odd count leaves the tail
/// typed as `text_type`.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    text_type: TextType,
) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            result.push(fragment);
            continue;
        }
        for (i, piece) in fragment.text.split(delimiter).enumerate() {
            let piece_type = if i % 2 == 1 {
                text_type
            } else {
                fragment.text_type
            };
            result.push(TextFragment::new(piece, piece_type));
        }
    }
    result
}

pub fn split_bold(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_delimiter(fragments, "**", TextType::Bold)
}

pub fn split_italic(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_delimiter(fragments, "_", TextType::Italic)
}

pub fn split_code(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_delimiter(fragments, "`", TextType::Code)
}

pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_refs(fragments, extract_markdown_images, TextType::Image)
}

pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_refs(fragments, extract_markdown_links, TextType::Link)
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid image regex")
    })
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex"))
}

fn to_inline_ref(caps: &Captures<'_>) -> InlineRef {
    InlineRef {
        text: caps[1].to_string(),
        url: caps[2].to_string(),
        span: caps.get_match().range(),
    }
}

/// Finds every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<InlineRef> {
    image_regex()
        .captures_iter(text)
        .map(|caps| to_inline_ref(&caps))
        .collect()
}

/// Finds every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<InlineRef> {
    let regex = link_regex();
    let mut refs = Vec::new();
    let mut start = 0;

    while let Some(caps) = regex.captures_at(text, start) {
        let whole = caps.get_match();
        // `[` preceded by `!` belongs to an image; retry from the next byte.
        if text[..whole.start()].ends_with('!') {
            start = whole.start() + 1;
            continue;
        }
        refs.push(to_inline_ref(&caps));
        start = whole.end();
    }

    refs
}

fn split_refs(
    fragments: Vec<TextFragment>,
    extract: fn(&str) -> Vec<InlineRef>,
    text_type: TextType,
) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            result.push(fragment);
            continue;
        }

        let text = fragment.text.as_str();
        let mut cursor = 0;
        for found in extract(text) {
            // The prefix is kept even when empty; only the tail is dropped.
            result.push(TextFragment::new(
                &text[cursor..found.span.start],
                fragment.text_type,
            ));
            result.push(TextFragment {
                text: found.text,
                text_type,
                url: Some(found.url),
            });
            cursor = found.span.end;
        }
        if cursor < text.len() {
            result.push(TextFragment::new(&text[cursor..], fragment.text_type));
        }
    }
    result
}
