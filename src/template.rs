//! Placeholder substitution — `{key}` tokens, case-insensitive.

use regex::{NoExpand, Regex};

/// Replace every `{key}` token in `template` with its paired value.
///
/// Key matching is case-insensitive and substitution is order-independent for
/// distinct keys. Values are inserted literally. This is plain token
/// replacement, not a templating language.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        let pattern = format!(r"(?i)\{{{}\}}", regex::escape(name));
        let re = Regex::new(&pattern).unwrap();
        out = re.replace_all(&out, NoExpand(value)).into_owned();
    }
    out
}
