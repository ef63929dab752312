//! Data model for scanned declarations — format-agnostic.

/// Kind of documented entity. Flat enumeration, no inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Capitalized top-level constructor function.
    Class,
    /// Instance method attached via a prototype assignment.
    Method,
    /// Method attached directly to a class-like name.
    StaticMethod,
}

impl EntityKind {
    /// Lowercase tag used in anchors and heading style markers.
    pub fn marker(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Method => "method",
            EntityKind::StaticMethod => "static_method",
        }
    }
}

/// One recognized declaration paired with its preceding doc comment.
///
/// Created by the scanner, read-only afterwards. The whole document is held
/// as an ordered sequence; insertion order is appearance order in source.
#[derive(Debug)]
pub struct Declaration {
    pub kind: EntityKind,
    /// Identifier, trimmed.
    pub name: String,
    /// Unparsed parameter-list substring, trimmed.
    pub raw_parameters: String,
    /// Verbatim lines of the immediately preceding `/** ... */` block.
    /// Empty when the declaration had no doc comment.
    pub comment_lines: Vec<String>,
    /// Unique URL-fragment identifier, computed once at record creation.
    pub anchor: String,
}

/// Result of interpreting one declaration's comment lines.
#[derive(Debug, Default)]
pub struct ParsedComment {
    /// Comment body with tag lines replaced by rendering fragments,
    /// non-tag lines passed through verbatim, order preserved.
    pub rendered_text: String,
    /// Set when any `@private` tag line was present.
    pub is_private: bool,
}
