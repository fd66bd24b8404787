use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from("build/dictionaries")
}

fn default_pattern() -> String {
    "Padmakara-glossary-*.csv".to_string()
}

/// Where the spreadsheet export is looked up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// File name glob; the greatest match by name wins
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            pattern: default_pattern(),
        }
    }
}
