use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("No input file matching {pattern}")]
    NoInputFound { pattern: String },

    #[error("Invalid input pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Unreadable glossary table: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
