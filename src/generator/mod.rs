//! File-system side of the site build: asset copying and page generation.

mod copy;
mod page;
mod site;

pub use self::copy::copy_directory;
pub use self::page::{extract_title, generate_page, PageGenerator};
pub use self::site::{generate_pages_recursive, SiteGenerator, SiteReport};
