use std::sync::LazyLock;

use regex::Regex;

use crate::preprocess::{escape_delimiter, join_lines};

static TERM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[;,]\s*").expect("term separator pattern"));

/// Split a headword cell into its terms.
///
/// Pipes are escaped and line breaks joined before splitting, which cannot
/// introduce or remove a separator. Spacing inside a term is kept as the
/// lookup key.
pub fn split(headword: &str) -> Vec<String> {
    let headword = escape_delimiter(&join_lines(headword));
    TERM_SEPARATOR
        .split(&headword)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
