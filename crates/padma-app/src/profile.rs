use std::fs;
use std::path::Path;

use anyhow::Context;
use padma_config::GlossaryConfig;

/// Defaults, then the JSON file if given, then `PADMA_*` environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GlossaryConfig> {
    let Some(path) = path else {
        return Ok(GlossaryConfig::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut config = GlossaryConfig::from_json(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    config.apply_env();
    Ok(config)
}
