//! Local Maven repository inventory core.
//!
//! Walks a repository cache (`~/.m2/repository` by default), indexes the
//! binary artifacts it finds, and recovers structured metadata from the
//! sibling files: the coordinate triple from the `.pom` descriptor and the
//! most recent fetch URL/timestamp from the `.lastUpdated` log.

pub mod descriptor;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod provenance;
pub mod scanner;

pub use descriptor::parse_descriptor;
pub use error::{DescriptorError, ProvenanceError, ScanError};
pub use model::{
    ArtifactIndex, Coordinate, DependencyRecord, ProvenanceRecord, ScanReport, ScanStats,
};
pub use provenance::parse_provenance;
pub use scanner::Scanner;

use std::path::PathBuf;

/// Default repository location, `~/.m2/repository`.
pub fn default_repo_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".m2")
        .join("repository")
}
