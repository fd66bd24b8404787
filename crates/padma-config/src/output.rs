use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("build/dictionaries/69-PadmakaraGlossary")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
