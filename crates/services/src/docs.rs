// Path: crates/services/src/docs.rs

//! Normalizes runtime documentation lines into a single display string.

use crate::text::split_on;
use once_cell::sync::Lazy;
use regex::Regex;

/// A `#<weight>` / `# <weight>` block up to the last `</weight>` on the line.
#[allow(clippy::expect_used)]
static WEIGHT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(<weight>| <weight>).*</weight>").expect("static regex is valid"));

/// Collapses a call's documentation lines into one line of display text.
///
/// Only the first paragraph is kept: everything from the first blank line on
/// is dropped. The first weight annotation block is removed, as are all
/// backslashes and backticks. The text is then split on `[` and on `]` and the
/// pieces are joined with single spaces, so `"[x]"` becomes `" x "`.
pub fn format_documentation<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let combined = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let stripped = WEIGHT_BLOCK
        .replace(&combined, "")
        .replace(|c: char| c == '\\' || c == '`', "");

    ['[', ']']
        .iter()
        .fold(vec![stripped], |parts, sep| split_on(parts.as_slice(), *sep))
        .join(" ")
}
