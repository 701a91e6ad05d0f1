use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::path::PathBuf;

/// (group, artifact, version) triple identifying one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

/// Most recent successful fetch recorded in a directory's `.lastUpdated` log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceRecord {
    pub source_url: String,
    pub fetched_at: DateTime<Utc>,
}

impl ProvenanceRecord {
    /// UTC render at second precision, e.g. `2023-11-30 16:19:49`.
    pub fn fetch_date(&self) -> String {
        self.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Recoverable-failure tally for one scan pass. Created fresh per scan, so
/// repeated scans never leak counts into each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStats {
    pub errors: u64,
}

impl ScanStats {
    pub(crate) fn record_error(&mut self) {
        self.errors += 1;
    }
}

/// Filename -> owning directory for every qualifying binary under the root.
/// Insertion order follows the walk, so listings are stable for a given tree.
pub type ArtifactIndex = IndexMap<String, PathBuf>;

/// Output of one scan pass, handed to callers read-only.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub index: ArtifactIndex,
    pub stats: ScanStats,
}

/// Flat record assembled per artifact for the listing and deploy layers.
#[derive(Debug, Clone)]
pub struct DependencyRecord {
    pub coordinate: Coordinate,
    pub source_url: Option<String>,
    pub fetch_date: Option<String>,
    pub file_name: String,
    pub file_path: PathBuf,
}
