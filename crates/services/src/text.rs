// Path: crates/services/src/text.rs

//! Small text utilities shared by the formatters.

/// Splits every fragment on `separator` and flattens the pieces, in order.
///
/// Empty pieces are kept, so `["a[b"]` split on `[` yields `["a", "b"]` and
/// `["[a"]` yields `["", "a"]`.
pub fn split_on<S: AsRef<str>>(fragments: &[S], separator: char) -> Vec<String> {
    fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().split(separator))
        .map(str::to_owned)
        .collect()
}
