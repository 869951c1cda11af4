//! CLI for md2site - Markdown to static HTML site generator

use clap::Parser;
use md2site::{SiteGenerator, SiteOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base path prefixed to root-relative links (e.g. /my-repo/)
    #[arg(default_value = "/")]
    base_path: String,

    /// Directory containing Markdown sources
    #[arg(long, default_value = "./content")]
    content: PathBuf,

    /// Directory of static assets copied into the output
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,

    /// HTML template file
    #[arg(long, default_value = "./template.html")]
    template: PathBuf,

    /// Output directory (cleared before each build)
    #[arg(long, default_value = "./docs")]
    output: PathBuf,

    /// Also rewrite src="/..." attributes with the base path
    #[arg(long)]
    rewrite_src: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let options = SiteOptions {
        content_dir: args.content,
        static_dir: args.static_dir,
        template_path: args.template,
        output_dir: args.output,
        base_path: args.base_path,
        rewrite_src: args.rewrite_src,
    };

    let generator = SiteGenerator::new(options);

    match generator.build() {
        Ok(report) => {
            println!(
                "Successfully generated {} page(s) into {:?}",
                report.pages,
                generator.options().output_dir
            );
        }
        Err(e) => {
            eprintln!("Error generating site: {}", e);
            std::process::exit(1);
        }
    }
}
