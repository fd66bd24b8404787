use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Greatest path by name among files in `dir` matching `pattern`.
///
/// Exports are date-stamped (`...-2024-05-01.csv`), so the greatest name is
/// the newest export. Modification times are not consulted.
pub fn locate_input(dir: &Path, pattern: &str) -> Result<PathBuf, ConvertError> {
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );

    let mut latest: Option<PathBuf> = None;
    for entry in glob::glob(&full_pattern)? {
        match entry {
            Ok(path) if path.is_file() => {
                if latest.as_ref().is_none_or(|l| path.as_os_str() > l.as_os_str()) {
                    latest = Some(path);
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Skipping unreadable path: {e}"),
        }
    }

    latest.ok_or(ConvertError::NoInputFound {
        pattern: full_pattern,
    })
}
