//! Anchor generation for in-page navigation links.

use crate::model::EntityKind;
use regex::Regex;
use std::sync::LazyLock;

/// Separator used between anchor segments. Chosen because it is URL-fragment
/// safe and does not occur in identifiers or typical parameter text.
const SEP: &str = "-";

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Derive a unique, URL-fragment-safe identifier for a documented entity.
///
/// Lowercases name and parameters, collapses whitespace runs and commas in the
/// parameter list to the separator, joins kind/name/parameters with the same
/// separator, then replaces underscores and strips HTML-tag-like substrings.
/// Deterministic: the same inputs always yield the same anchor, and entities
/// differing in name or parameter list never collide.
pub fn generate(kind: EntityKind, name: &str, raw_parameters: &str) -> String {
    let name = name.to_lowercase();
    let parameters = raw_parameters.to_lowercase();
    let parameters = RE_WHITESPACE.replace_all(&parameters, SEP);
    let parameters = parameters.replace(',', SEP);

    let joined = format!("{}{SEP}{}{SEP}{}", kind.marker(), name, parameters);
    let joined = joined.replace('_', SEP);
    strip_tags(&joined)
}

/// Remove HTML-tag-like substrings (anything between `<` and `>`).
/// Shared with the table-of-contents link text.
pub fn strip_tags(text: &str) -> String {
    RE_HTML_TAG.replace_all(text, "").into_owned()
}
