use csv::StringRecord;
use padma_config::columns::ColumnMap;

use crate::extract::get_present;
use crate::preprocess::{clean_field, clean_glossary};

/// Two-character escape a renderer turns into a visual line break
pub const LINE_BREAK: &str = "\\n";

pub const SANSKRIT_LABEL: &str = "Skt";
pub const CHINESE_LABEL: &str = "ZH";

/// How the second value of a pair is attached to the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStyle {
    /// `L a — b`, `L a` or `L b`
    Gloss,
    /// `L a (b)` or `L a`; a lone second value renders nothing
    Reading,
}

/// Render one labelled line from an optional pair of cleaned values
pub fn render_pair(
    label: &str,
    first: Option<&str>,
    second: Option<&str>,
    style: PairStyle,
) -> Option<String> {
    match (first, second, style) {
        (Some(a), Some(b), PairStyle::Gloss) => Some(format!("{label} {a} — {b}")),
        (Some(a), Some(b), PairStyle::Reading) => Some(format!("{label} {a} ({b})")),
        (Some(a), None, _) => Some(format!("{label} {a}")),
        (None, Some(b), PairStyle::Gloss) => Some(format!("{label} {b}")),
        (None, Some(_), PairStyle::Reading) | (None, None, _) => None,
    }
}

/// Build the definition lines of a row.
///
/// Order is fixed: Sanskrit, Chinese, then each configured language.
pub fn definition_lines(row: &StringRecord, columns: &ColumnMap) -> Vec<String> {
    let mut lines = Vec::new();

    let sanskrit = get_present(row, columns.sanskrit).map(clean_field);
    lines.extend(sanskrit.map(|s| format!("{SANSKRIT_LABEL} {s}")));

    let script = get_present(row, columns.chinese_script).map(clean_field);
    let pinyin = get_present(row, columns.chinese_pinyin).map(clean_field);
    lines.extend(render_pair(
        CHINESE_LABEL,
        script.as_deref(),
        pinyin.as_deref(),
        PairStyle::Reading,
    ));

    for language in &columns.languages {
        let primary = get_present(row, language.primary).map(clean_field);
        let glossary = get_present(row, language.glossary).map(clean_glossary);
        lines.extend(render_pair(
            &language.code,
            primary.as_deref().filter(|s| !s.is_empty()),
            glossary.as_deref().filter(|s| !s.is_empty()),
            PairStyle::Gloss,
        ));
    }

    lines
}

/// Definition text of a row, "" when no field has content
pub fn assemble(row: &StringRecord, columns: &ColumnMap) -> String {
    definition_lines(row, columns).join(LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use padma_config::columns::LanguageColumns;

    use super::*;

    /// headword, skt, zh script, zh pinyin, EN pri/glo, FR pri/glo
    fn columns() -> ColumnMap {
        ColumnMap {
            headword: 0,
            sanskrit: 1,
            chinese_script: 2,
            chinese_pinyin: 3,
            languages: vec![
                LanguageColumns::new("EN", 4, 5),
                LanguageColumns::new("FR", 6, 7),
            ],
        }
    }

    fn row(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn test_render_pair_gloss() {
        let style = PairStyle::Gloss;
        assert_eq!(render_pair("EN", Some("a"), Some("b"), style).as_deref(), Some("EN a — b"));
        assert_eq!(render_pair("EN", Some("a"), None, style).as_deref(), Some("EN a"));
        assert_eq!(render_pair("EN", None, Some("b"), style).as_deref(), Some("EN b"));
        assert_eq!(render_pair("EN", None, None, style), None);
    }

    #[test]
    fn test_render_pair_reading() {
        let style = PairStyle::Reading;
        assert_eq!(render_pair("ZH", Some("空行母"), Some("kōngxíngmǔ"), style).as_deref(), Some("ZH 空行母 (kōngxíngmǔ)"));
        assert_eq!(render_pair("ZH", Some("空行母"), None, style).as_deref(), Some("ZH 空行母"));
        assert_eq!(render_pair("ZH", None, Some("kōngxíngmǔ"), style), None);
    }

    #[test]
    fn test_full_display_order() {
        let r = row(&["w", "ḍākinī", "空行母", "kōngxíngmǔ", "dakini", "sky-goer", "dakini", "-"]);
        assert_eq!(
            assemble(&r, &columns()),
            "Skt ḍākinī\\nZH 空行母 (kōngxíngmǔ)\\nEN dakini — sky-goer\\nFR dakini"
        );
    }

    #[test]
    fn test_glossary_only_language() {
        let r = row(&["w", "", "", "", "'-", "*CC consort of the guru"]);
        assert_eq!(assemble(&r, &columns()), "EN consort of the guru");
    }

    #[test]
    fn test_pinyin_without_script_is_dropped() {
        let r = row(&["w", "", "", "pinyin"]);
        assert_eq!(assemble(&r, &columns()), "");
    }

    #[test]
    fn test_all_placeholders_give_empty_definition() {
        let r = row(&["w", "-", "'", "' -", "'-", "-", "", "  "]);
        assert_eq!(assemble(&r, &columns()), "");
    }

    #[test]
    fn test_short_row_degrades() {
        let r = row(&["w", "ḍākinī"]);
        assert_eq!(assemble(&r, &columns()), "Skt ḍākinī");
    }

    #[test]
    fn test_fields_are_escaped_and_flattened() {
        let r = row(&["w", "a|b", "", "", "one\ntwo", "x |\r\n y"]);
        assert_eq!(assemble(&r, &columns()), "Skt a/b\\nEN one two — x / y");
    }

    #[test]
    fn test_marker_only_glossary_is_omitted() {
        let r = row(&["w", "", "", "", "dakini", "*CC"]);
        assert_eq!(assemble(&r, &columns()), "EN dakini");
    }
}
