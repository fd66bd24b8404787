use std::env;

use serde::{Deserialize, Serialize};

use self::columns::ColumnMap;
use self::input::InputConfig;
use self::output::OutputConfig;

pub mod columns;
pub mod input;
pub mod output;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub columns: ColumnMap,
}

impl GlossaryConfig {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Parse a JSON config; missing sections fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Override locations from `PADMA_INPUT_DIR`, `PADMA_INPUT_PATTERN` and `PADMA_OUTPUT`
    pub fn apply_env(&mut self) {
        if let Ok(dir) = env::var("PADMA_INPUT_DIR") {
            self.input.dir = dir.into();
        }

        if let Ok(pattern) = env::var("PADMA_INPUT_PATTERN") {
            self.input.pattern = pattern;
        }

        if let Ok(path) = env::var("PADMA_OUTPUT") {
            self.output.path = path.into();
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GlossaryConfig::from_json(r#"{ "output": { "path": "out/dict" } }"#).unwrap();
        assert_eq!(config.output.path, std::path::PathBuf::from("out/dict"));
        assert_eq!(config.input.pattern, "Padmakara-glossary-*.csv");
        assert_eq!(config.columns.headword, 2);
        assert_eq!(config.columns.languages.len(), 7);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = GlossaryConfig::default().to_json_pretty().unwrap();
        let config = GlossaryConfig::from_json(&json).unwrap();
        assert_eq!(config.columns, ColumnMap::default());
    }

    #[test]
    fn test_custom_language_list() {
        let json = r#"{
            "columns": {
                "headword": 0,
                "languages": [{ "code": "EN", "primary": 1, "glossary": 2 }]
            }
        }"#;
        let config = GlossaryConfig::from_json(json).unwrap();
        assert_eq!(config.columns.headword, 0);
        assert_eq!(config.columns.languages.len(), 1);
        assert_eq!(config.columns.languages[0].code, "EN");
        // Unlisted fields keep the deployment defaults
        assert_eq!(config.columns.sanskrit, 4);
    }
}
