//! Page template - placeholder substitution and base path rewriting.

use super::Page;
use crate::Result;
use std::fs;
use std::path::Path;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads a template from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading template {}", path.display());
        Ok(Self::new(fs::read_to_string(path)?))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes the page into the template, then rewrites root-relative links.
    pub fn render(&self, page: &Page, base_path: &BasePath) -> String {
        let filled = self
            .source
            .replace(TITLE_PLACEHOLDER, &page.title)
            .replace(CONTENT_PLACEHOLDER, &page.content);
        base_path.rewrite(&filled)
    }
}

/// URL prefix substituted for root-relative `href` and `src` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath {
    pub prefix: String,
    /// Rewrite `src="/` attributes.
    ///
    /// Off by default: the legacy rule looks for `src"/` (no `=`), which
    /// never occurs in well-formed HTML, so image sources are left as-is.
    pub rewrite_src: bool,
}

impl Default for BasePath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl BasePath {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            rewrite_src: false,
        }
    }

    pub fn with_src_rewrite(mut self, rewrite_src: bool) -> Self {
        self.rewrite_src = rewrite_src;
        self
    }

    /// Literal substring replacement; no URL parsing.
    pub fn rewrite(&self, html: &str) -> String {
        let href = format!("href=\"{}", self.prefix);
        let src = format!("src=\"{}", self.prefix);
        let result = html.replace("href=\"/", &href);
        if self.rewrite_src {
            result.replace("src=\"/", &src)
        } else {
            result.replace("src\"/", &src)
        }
    }
}
