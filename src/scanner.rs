//! Line-oriented declaration scanner — comment-block state machine.
//!
//! Recognizes three declaration shapes (constructor function, prototype
//! method, static method assignment) and pairs each with the doc-comment
//! block that directly precedes it. Anything else is ignored; this is a
//! best-effort scanner that degrades to omission, never to failure.

use crate::anchor;
use crate::model::{Declaration, EntityKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*").unwrap());

static RE_COMMENT_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*/").unwrap());

static RE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*function\s+([^(]+)\s*\((.*)\)").unwrap());

static RE_PROTOTYPE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[^.]+\.prototype\.([^.]+)\s*=\s*function\s*\((.*)\)").unwrap()
});

// Looser shape than the prototype pattern; must be tried after it.
static RE_STATIC_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[^.]+\.([^.]+)\s*=\s*function\s*\((.*)\)").unwrap());

#[derive(Default)]
struct ScanState {
    in_comment: bool,
    /// Lines of the current comment block. Persists after the closing `*/`
    /// until consumed by a declaration match or overwritten by the next
    /// comment start.
    comment: Vec<String>,
    declarations: Vec<Declaration>,
}

impl ScanState {
    fn emit(&mut self, kind: EntityKind, name: &str, raw_parameters: &str) {
        let name = name.trim().to_string();
        let raw_parameters = raw_parameters.trim().to_string();
        let anchor = anchor::generate(kind, &name, &raw_parameters);
        self.declarations.push(Declaration {
            kind,
            name,
            raw_parameters,
            comment_lines: std::mem::take(&mut self.comment),
            anchor,
        });
    }
}

/// Scan full source text into an ordered sequence of declarations.
pub fn scan(source: &str) -> Vec<Declaration> {
    let mut state = ScanState::default();

    for line in source.lines() {
        process_line(&mut state, line);
    }

    state.declarations
}

fn process_line(s: &mut ScanState, line: &str) {
    if RE_COMMENT_START.is_match(line) {
        s.in_comment = true;
        s.comment.clear();
        return;
    }

    if RE_COMMENT_END.is_match(line) {
        s.in_comment = false;
        return;
    }

    if s.in_comment {
        s.comment.push(line.to_string());
        return;
    }

    if let Some(caps) = RE_CLASS.captures(line) {
        let name = caps[1].trim().to_string();
        // Only capitalized names declare a class; lowercase functions are
        // skipped, but the pending comment is still consumed.
        if name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            s.emit(EntityKind::Class, &name, &caps[2]);
        } else {
            s.comment.clear();
        }
        return;
    }

    if let Some(caps) = RE_PROTOTYPE_METHOD.captures(line) {
        let (name, parameters) = (caps[1].to_string(), caps[2].to_string());
        s.emit(EntityKind::Method, &name, &parameters);
        return;
    }

    if let Some(caps) = RE_STATIC_METHOD.captures(line) {
        let (name, parameters) = (caps[1].to_string(), caps[2].to_string());
        s.emit(EntityKind::StaticMethod, &name, &parameters);
    }

    // Anything else: not content, not a declaration.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_class_declaration() {
        let decls = scan("function Widget(name, size) {\n}\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, EntityKind::Class);
        assert_eq!(decls[0].name, "Widget");
        assert_eq!(decls[0].raw_parameters, "name, size");
        assert!(decls[0].comment_lines.is_empty());
    }

    #[test]
    fn scan_lowercase_function_skipped() {
        let decls = scan("function test(x) {\n}\n");
        assert!(decls.is_empty());
    }

    #[test]
    fn scan_prototype_method() {
        let decls = scan("Widget.prototype.resize = function(size) {\n}\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, EntityKind::Method);
        assert_eq!(decls[0].name, "resize");
        assert_eq!(decls[0].raw_parameters, "size");
    }

    #[test]
    fn scan_static_method() {
        let decls = scan("Widget.create = function(options) {\n}\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, EntityKind::StaticMethod);
        assert_eq!(decls[0].name, "create");
    }

    #[test]
    fn scan_attaches_preceding_comment() {
        let input = "/**\nBuilds widgets.\n@private\n*/\nfunction Widget() {\n}\n";
        let decls = scan(input);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].comment_lines, vec!["Builds widgets.", "@private"]);
    }

    #[test]
    fn scan_comment_survives_unmatched_lines() {
        // The pending comment persists across ignored lines until a
        // declaration consumes it.
        let input = "/**\nDocs here.\n*/\nvar x = 1;\n\nWidget.prototype.go = function() {\n}\n";
        let decls = scan(input);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].comment_lines, vec!["Docs here."]);
    }

    #[test]
    fn scan_next_comment_overwrites_pending() {
        let input = "/**\nOrphaned.\n*/\n/**\nKept.\n*/\nfunction Widget() {\n}\n";
        let decls = scan(input);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].comment_lines, vec!["Kept."]);
    }

    #[test]
    fn scan_lowercase_function_consumes_comment() {
        let input = "/**\nDocs.\n*/\nfunction helper() {\n}\nfunction Widget() {\n}\n";
        let decls = scan(input);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Widget");
        assert!(decls[0].comment_lines.is_empty());
    }

    #[test]
    fn scan_orphan_comment_dropped_silently() {
        let decls = scan("/**\nNothing follows.\n*/\nvar a = 1;\n");
        assert!(decls.is_empty());
    }

    #[test]
    fn scan_blank_lines_kept_inside_comment() {
        let input = "/**\n\nSpaced out.\n\n*/\nfunction Widget() {\n}\n";
        let decls = scan(input);
        assert_eq!(decls[0].comment_lines, vec!["", "Spaced out.", ""]);
    }

    #[test]
    fn scan_preserves_document_order() {
        let input = "\
function Widget(a) {}\n\
Widget.prototype.one = function() {}\n\
Widget.two = function() {}\n\
function Gadget() {}\n";
        let decls = scan(input);
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "one", "two", "Gadget"]);
    }

    #[test]
    fn scan_prototype_precedence_over_static() {
        // A prototype assignment must never be classified as a static method.
        let decls = scan("Widget.prototype.run = function(x) {}\n");
        assert_eq!(decls[0].kind, EntityKind::Method);
        assert_eq!(decls[0].name, "run");
    }
}
