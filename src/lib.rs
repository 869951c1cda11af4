//! # md2site
//!
//! Markdown to static HTML site generator.
//!
//! ## Example
//!
//! ```no_run
//! use md2site::{SiteGenerator, SiteOptions};
//!
//! let options = SiteOptions {
//!     base_path: "/my-site/".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = SiteGenerator::new(options).build().unwrap();
//! println!("{} pages written", report.pages);
//! ```
//!
//! Converting a single document:
//!
//! ```
//! let html = md2site::markdown_to_html_node("### heading").to_html().unwrap();
//! assert_eq!(html, "<div><h3>heading</h3></div>");
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod generator;
pub mod render;

pub use converter::{markdown_to_html_node, MarkdownConverter};
pub use error::{Error, Result};
pub use generator::{extract_title, generate_page, SiteGenerator, SiteReport};
pub use render::{BasePath, Page, Template};

use std::path::PathBuf;

/// Options for a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory holding the Markdown sources.
    pub content_dir: PathBuf,
    /// Directory of static assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Output directory. Cleared at the start of every build.
    pub output_dir: PathBuf,
    /// Prefix substituted for root-relative links.
    pub base_path: String,
    /// Also rewrite `src="/` attributes. See [`BasePath::rewrite_src`].
    pub rewrite_src: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./docs"),
            base_path: "/".to_string(),
            rewrite_src: false,
        }
    }
}
