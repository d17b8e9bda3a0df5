use nutri_core::error::NutriError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<PersistenceError> for NutriError {
    fn from(e: PersistenceError) -> Self {
        match e {
            PersistenceError::Io { source, .. } => NutriError::Io(source),
            other => NutriError::Persistence(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
