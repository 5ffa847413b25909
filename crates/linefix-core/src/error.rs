use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinefixError>;

#[derive(Debug, Error)]
pub enum LinefixError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("io error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("{} file(s) failed: {}", paths.len(), join_paths(paths))]
    Failed { paths: Vec<PathBuf> },
}

impl LinefixError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
