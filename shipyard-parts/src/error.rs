use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a part catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load parts from: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading {} at line {line}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// Path of the parts source that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
