//! Markdown document assembly — table of contents plus entity sections.

use crate::anchor;
use crate::model::{Declaration, EntityKind, ParsedComment};
use crate::tags;
use crate::template;
use regex::Regex;
use std::sync::LazyLock;

const CLASS_TEMPLATE: &str = r#"## <span class="class">{name}({parameters})</span>"#;
const METHOD_TEMPLATE: &str =
    r#"### <a name="{anchor}"></a>{name}({parameters}) <span class="method">method</span>"#;
const STATIC_METHOD_TEMPLATE: &str =
    r#"### <a name="{anchor}"></a>{class}.{name}({parameters}) <span class="static">static</span>"#;
const STATIC_METHOD_ORPHAN_TEMPLATE: &str =
    r#"### <a name="{anchor}"></a>{name}({parameters}) <span class="static">static</span>"#;

static RE_PARAMETER_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

/// Render the ordered declaration sequence into one Markdown document.
///
/// Private entities (an `@private` tag or a `_`-prefixed name) are parsed but
/// never rendered; they appear in neither the table of contents nor the body.
pub fn render(display_name: &str, declarations: &[Declaration]) -> String {
    let parsed: Vec<ParsedComment> = declarations
        .iter()
        .map(|d| tags::parse(&d.comment_lines))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", display_name));

    // Table of contents: one bullet per public entity.
    let toc: Vec<String> = declarations
        .iter()
        .zip(&parsed)
        .filter(|(d, p)| is_public(d, p))
        .map(|(d, _)| {
            let text = anchor::strip_tags(&format!("{}({})", d.name, d.raw_parameters));
            format!("* [{}](#{})", text, d.anchor)
        })
        .collect();
    if !toc.is_empty() {
        for item in &toc {
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
    }

    // Body, in document order. Every class declaration updates the class-name
    // context, including private ones that are themselves omitted.
    let mut last_class_name: Option<&str> = None;
    for (decl, comment) in declarations.iter().zip(&parsed) {
        if decl.kind == EntityKind::Class {
            last_class_name = Some(&decl.name);
        }
        if !is_public(decl, comment) {
            continue;
        }

        out.push_str(&render_heading(decl, last_class_name));
        out.push_str("\n\n");

        if !comment.rendered_text.is_empty() {
            out.push_str(&comment.rendered_text);
            out.push_str("\n\n");
        }
    }

    out
}

fn is_public(decl: &Declaration, comment: &ParsedComment) -> bool {
    !comment.is_private && !decl.name.starts_with('_')
}

fn render_heading(decl: &Declaration, last_class_name: Option<&str>) -> String {
    let parameters = format_parameters(&decl.raw_parameters);

    match decl.kind {
        EntityKind::Class => template::substitute(
            CLASS_TEMPLATE,
            &[("name", &decl.name), ("parameters", &parameters)],
        ),
        EntityKind::Method => template::substitute(
            METHOD_TEMPLATE,
            &[
                ("anchor", &decl.anchor),
                ("name", &decl.name),
                ("parameters", &parameters),
            ],
        ),
        EntityKind::StaticMethod => match last_class_name {
            Some(class) => template::substitute(
                STATIC_METHOD_TEMPLATE,
                &[
                    ("anchor", &decl.anchor),
                    ("class", class),
                    ("name", &decl.name),
                    ("parameters", &parameters),
                ],
            ),
            None => template::substitute(
                STATIC_METHOD_ORPHAN_TEMPLATE,
                &[
                    ("anchor", &decl.anchor),
                    ("name", &decl.name),
                    ("parameters", &parameters),
                ],
            ),
        },
    }
}

/// Wrap each comma-separated parameter in a styled span. Empty entries after
/// the split are dropped before joining.
fn format_parameters(raw: &str) -> String {
    RE_PARAMETER_SPLIT
        .split(raw)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<span class=\"parameter\">{}</span>", p))
        .collect::<Vec<_>>()
        .join(", ")
}
