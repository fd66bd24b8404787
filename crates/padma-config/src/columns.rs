use serde::{Deserialize, Serialize};

/// Primary and glossary column of one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageColumns {
    /// Label prefixed to the rendered line, e.g. "EN"
    pub code: String,
    pub primary: usize,
    pub glossary: usize,
}

impl LanguageColumns {
    pub fn new(code: &str, primary: usize, glossary: usize) -> Self {
        Self {
            code: code.to_string(),
            primary,
            glossary,
        }
    }
}

/// Positional schema of the glossary spreadsheet export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Wylie headword(s), `;` or `,` separated
    pub headword: usize,
    /// Sanskrit (IAST)
    pub sanskrit: usize,
    pub chinese_script: usize,
    pub chinese_pinyin: usize,
    /// Rendered in this order
    pub languages: Vec<LanguageColumns>,
}

impl ColumnMap {
    /// Widest index any field reads from
    pub fn max_index(&self) -> usize {
        self.languages
            .iter()
            .flat_map(|l| [l.primary, l.glossary])
            .chain([
                self.headword,
                self.sanskrit,
                self.chinese_script,
                self.chinese_pinyin,
            ])
            .max()
            .unwrap_or(0)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            headword: 2,
            sanskrit: 4,
            chinese_script: 86,
            chinese_pinyin: 87,
            languages: vec![
                LanguageColumns::new("EN", 6, 7),
                LanguageColumns::new("FR", 21, 22),
                LanguageColumns::new("PT", 8, 9),
                LanguageColumns::new("ES", 40, 41),
                LanguageColumns::new("IT", 32, 33),
                LanguageColumns::new("DE", 63, 67),
                LanguageColumns::new("PL", 50, 54),
            ],
        }
    }
}
