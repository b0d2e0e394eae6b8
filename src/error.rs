use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures of a single index run. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read
    #[error("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Rendering the index failed
    #[error("could not render index: {0}")]
    Generate(#[from] fmt::Error),

    /// The document could not be written back
    #[error("{}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The temporary file could not replace the document
    #[error("{}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
