//! Site generator - walks the content tree and writes one page per `.md` file.

use super::copy::copy_directory;
use super::page::PageGenerator;
use crate::converter::MarkdownConverter;
use crate::render::{BasePath, Template};
use crate::{Result, SiteOptions};
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Summary of a site build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteReport {
    /// Number of pages written.
    pub pages: usize,
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// directory layout into `dest_dir`. Other files are ignored.
///
/// Entries are visited in file name order. Returns the number of pages written.
pub fn generate_pages_recursive(
    generator: &PageGenerator<'_>,
    content_dir: &Path,
    dest_dir: &Path,
) -> Result<usize> {
    let mut entries = fs::read_dir(content_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?;
    entries.sort();

    let mut pages = 0;
    for path in entries {
        let Some(name) = path.file_name() else {
            continue;
        };

        if path.is_dir() {
            pages += generate_pages_recursive(generator, &path, &dest_dir.join(name))?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION) {
            let dest_path = dest_dir.join(name).with_extension(HTML_EXTENSION);
            generator.generate(&path, &dest_path)?;
            pages += 1;
        }
    }
    Ok(pages)
}

/// Builds a whole site: copies static assets, then renders every page.
pub struct SiteGenerator {
    options: SiteOptions,
    converter: MarkdownConverter,
}

impl SiteGenerator {
    /// Creates a new generator with the given options.
    pub fn new(options: SiteOptions) -> Self {
        Self {
            options,
            converter: MarkdownConverter::default(),
        }
    }

    /// Creates a new generator with default options.
    pub fn with_defaults() -> Self {
        Self::new(SiteOptions::default())
    }

    /// Replaces the Markdown converter used for every page.
    pub fn with_converter(mut self, converter: MarkdownConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Runs the build.
    ///
    /// The output directory is cleared and refilled with the static assets
    /// before any page is written, so pages win over same-named assets.
    pub fn build(&self) -> Result<SiteReport> {
        let options = &self.options;

        copy_directory(&options.static_dir, &options.output_dir)?;

        let template = Template::from_file(&options.template_path)?;
        let base_path = BasePath::new(options.base_path.as_str())
            .with_src_rewrite(options.rewrite_src);
        let generator = PageGenerator::new(&self.converter, &template, &base_path);

        let pages =
            generate_pages_recursive(&generator, &options.content_dir, &options.output_dir)?;
        log::info!(
            "Generated {} page(s) into {}",
            pages,
            options.output_dir.display()
        );

        Ok(SiteReport { pages })
    }
}
