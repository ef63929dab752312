//! protodoc — generate Markdown and HTML reference pages from source files
//! that document classes, prototype methods, and static methods with
//! `/** ... */` comment blocks.

mod anchor;
mod model;
mod render;
mod scanner;
mod tags;
mod template;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled page template, used when --template is not given.
const DEFAULT_TEMPLATE: &str = include_str!("../assets/template.html");

#[derive(Parser)]
#[command(
    name = "protodoc",
    about = "Generate documentation from /** ... */ annotated source files"
)]
struct Cli {
    /// Input source file
    file: PathBuf,

    /// Output directory for generated files
    #[arg(short, long)]
    out: PathBuf,

    /// Also persist the intermediate Markdown as <name>.md
    #[arg(long)]
    md: bool,

    /// HTML page template with {title} and {body} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let page_template = load_template(cli.template.as_deref())?;

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output directory: {}", cli.out.display()))?;

    let display_name = display_name(&cli.file);
    let stem = output_stem(&cli.file);

    let declarations = scanner::scan(&source);
    let markdown = render::markdown::render(&display_name, &declarations);

    if cli.md {
        let md_path = cli.out.join(format!("{}.md", stem));
        fs::write(&md_path, &markdown)
            .with_context(|| format!("failed to write {}", md_path.display()))?;
    }

    let body = render::html::convert(&markdown);
    let page = template::substitute(&page_template, &[("title", &display_name), ("body", &body)]);

    let html_path = cli.out.join(format!("{}.html", stem));
    fs::write(&html_path, page)
        .with_context(|| format!("failed to write {}", html_path.display()))?;

    Ok(())
}

/// Read the page template once at startup.
fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("failed to read template: {}", p.display())),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Display name used for the document heading and page title.
/// "src/widget.js" → "widget.js"
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Output file name without extension. "src/widget.js" → "widget"
fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_from_nested_path() {
        assert_eq!(display_name(Path::new("src/widget.js")), "widget.js");
    }

    #[test]
    fn output_stem_drops_extension() {
        assert_eq!(output_stem(Path::new("src/widget.js")), "widget");
        assert_eq!(output_stem(Path::new("widget.js")), "widget");
    }

    #[test]
    fn output_stem_no_extension() {
        assert_eq!(output_stem(Path::new("Makefile")), "Makefile");
    }

    #[test]
    fn default_template_has_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains("{title}"));
        assert!(DEFAULT_TEMPLATE.contains("{body}"));
    }
}
