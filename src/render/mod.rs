mod template;

pub use template::{BasePath, Template};

/// Title and rendered body of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub title: String,
    pub content: String,
}
