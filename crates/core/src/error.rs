use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures. Everything recoverable is tallied in
/// [`crate::model::ScanStats`] instead of surfacing here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("repository path does not exist: {0}")]
    RepoNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a directory yielded no coordinate.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("no .pom file found in directory: {0}")]
    NotFound(PathBuf),
    #[error("malformed descriptor {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("descriptor {path} is missing {missing} after parent fallback")]
    IncompleteFields { path: PathBuf, missing: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a directory yielded no provenance record.
#[derive(Debug, Error)]
pub enum ProvenanceError {
    #[error("no .lastUpdated file found in directory: {0}")]
    NotFound(PathBuf),
    #[error("no fetch entries in {0}")]
    NoEntries(PathBuf),
    #[error("malformed fetch log {path}: {detail}")]
    Malformed { path: PathBuf, detail: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
