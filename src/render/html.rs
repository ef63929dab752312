//! Markdown→HTML conversion via pulldown-cmark, plus page-level fixups.

use pulldown_cmark::{html, Options, Parser};

/// Convert a Markdown document to an HTML fragment.
///
/// Inline HTML in the Markdown (anchors, style spans) passes through
/// unchanged. The converter's output is normalized so horizontal rules use
/// the void-element spelling before templating.
pub fn convert(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    normalize_hr(&out)
}

/// Normalize self-closed horizontal-rule markup to `<hr />`.
fn normalize_hr(html: &str) -> String {
    html.replace("<hr></hr>", "<hr />")
}
