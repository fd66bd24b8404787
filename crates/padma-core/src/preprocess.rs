use std::sync::LazyLock;

use regex::Regex;

/// Editorial-only notation removed from glossary text
pub const EDITORIAL_MARKER: &str = "*CC";

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"  +").expect("multi-space pattern"));

static EDITORIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s*", regex::escape(EDITORIAL_MARKER))).expect("marker pattern")
});

fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").trim().to_string()
}

/// Each line break becomes one space; other spacing is kept
pub fn join_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Single-line text: line breaks become spaces, space runs collapse
pub fn flatten(text: &str) -> String {
    collapse_spaces(&join_lines(text))
}

pub fn strip_editorial_markers(text: &str) -> String {
    collapse_spaces(&EDITORIAL.replace_all(text, ""))
}

/// `|` separates term from definition in the output
pub fn escape_delimiter(text: &str) -> String {
    text.replace('|', "/")
}

/// Short fields: Sanskrit, Chinese, primary glosses
pub fn clean_field(text: &str) -> String {
    flatten(&escape_delimiter(text))
}

/// Long-form glossary glosses
pub fn clean_glossary(text: &str) -> String {
    escape_delimiter(&flatten(&strip_editorial_markers(text)))
}
