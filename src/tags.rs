//! Doc-comment tag parser — interprets `@param`, `@return`, `@private`.
//!
//! Per-line dispatch, first matching rule wins. Tag lines are replaced by
//! Markdown rendering fragments; everything else passes through verbatim in
//! its original position.

use crate::model::ParsedComment;
use crate::template;
use regex::Regex;
use std::sync::LazyLock;

const PARAM_TEMPLATE: &str =
    r#"* <code><span class="type">{type}</span></code> <code>**{name}**</code> &#8212; {doc}"#;
const PARAM_UNKNOWN_TEMPLATE: &str = r#"* <code>**{name}**</code> &#8212; {doc}"#;
const RETURN_TEMPLATE: &str =
    "Returns:\n\n* <code><span class=\"type\">{type}</span></code> {doc}";
const RETURN_UNKNOWN_TEMPLATE: &str = "Returns:\n\n* {doc}";

static RE_PARAM_TYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@param\s+\{(.+)\}\s+(\S+)\s+(.+)$").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@param\s+(\S+)\s+(.+)$").unwrap());

static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*@return\s+(.+)$").unwrap());

static RE_RETURN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.+)\}\s*(.*)$").unwrap());

static RE_PRIVATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*@private").unwrap());

/// Interpret one declaration's comment lines.
pub fn parse(lines: &[String]) -> ParsedComment {
    let mut is_private = false;
    let mut rendered: Vec<String> = Vec::new();

    for line in lines {
        if let Some(caps) = RE_PARAM_TYPED.captures(line) {
            rendered.push(template::substitute(
                PARAM_TEMPLATE,
                &[("type", &caps[1]), ("name", &caps[2]), ("doc", &caps[3])],
            ));
        } else if let Some(caps) = RE_PARAM.captures(line) {
            rendered.push(template::substitute(
                PARAM_UNKNOWN_TEMPLATE,
                &[("name", &caps[1]), ("doc", &caps[2])],
            ));
        } else if let Some(caps) = RE_RETURN.captures(line) {
            rendered.push(render_return(&caps[1]));
        } else if RE_PRIVATE.is_match(line) {
            is_private = true;
        } else {
            rendered.push(line.clone());
        }
    }

    ParsedComment {
        rendered_text: rendered.join("\n"),
        is_private,
    }
}

/// Render the text following `@return`. A braced type group selects the typed
/// rendering; otherwise the whole rest is kept as the description. A leading
/// blank line separates the block from preceding content.
fn render_return(rest: &str) -> String {
    let block = if let Some(caps) = RE_RETURN_TYPE.captures(rest) {
        template::substitute(
            RETURN_TEMPLATE,
            &[("type", &caps[1]), ("doc", caps[2].trim())],
        )
    } else {
        template::substitute(RETURN_UNKNOWN_TEMPLATE, &[("doc", rest)])
    };
    format!("\n{}", block)
}
