//! Page generator - renders one Markdown file into the template.

use crate::converter::MarkdownConverter;
use crate::render::{BasePath, Page, Template};
use crate::{error::Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn title_regex() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| Regex::new(r"^#[^#]+$").expect("Invalid title regex"))
}

/// Returns the text of the first `# Title` line.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find(|line| title_regex().is_match(line))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Renders pages with a shared converter, template and base path.
#[derive(Debug, Clone, Copy)]
pub struct PageGenerator<'a> {
    converter: &'a MarkdownConverter,
    template: &'a Template,
    base_path: &'a BasePath,
}

impl<'a> PageGenerator<'a> {
    pub fn new(
        converter: &'a MarkdownConverter,
        template: &'a Template,
        base_path: &'a BasePath,
    ) -> Self {
        Self {
            converter,
            template,
            base_path,
        }
    }

    /// Renders a Markdown document into the full page HTML.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let page = Page {
            content: self.converter.convert_to_html(markdown)?,
            title: extract_title(markdown)?,
        };
        Ok(self.template.render(&page, self.base_path))
    }

    /// Renders `from_path` and writes the page to `dest_path`, creating parent
    /// directories as needed.
    pub fn generate(&self, from_path: &Path, dest_path: &Path) -> Result<()> {
        log::info!(
            "Generating page from {} to {}",
            from_path.display(),
            dest_path.display()
        );

        log::debug!("Reading from file {}", from_path.display());
        let markdown = fs::read_to_string(from_path)?;
        let html = self.render(&markdown)?;

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("Writing to file {}", dest_path.display());
        fs::write(dest_path, html)?;
        Ok(())
    }
}

/// Generates a single page, reading the template from `template_path`.
pub fn generate_page<P, T, D>(
    from_path: P,
    template_path: T,
    dest_path: D,
    base_path: &BasePath,
) -> Result<()>
where
    P: AsRef<Path>,
    T: AsRef<Path>,
    D: AsRef<Path>,
{
    let template = Template::from_file(template_path)?;
    let converter = MarkdownConverter::default();
    PageGenerator::new(&converter, &template, base_path)
        .generate(from_path.as_ref(), dest_path.as_ref())
}
