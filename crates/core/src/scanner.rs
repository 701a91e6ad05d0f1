//! Artifact locator: walks the repository tree and indexes binary artifacts.

use crate::error::ScanError;
use crate::model::{ArtifactIndex, ScanReport, ScanStats};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

fn is_qualifying(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("jar") | Some("zip")
    )
}

pub struct Scanner;

impl Scanner {
    /// Walks `root` and maps every qualifying binary filename to the
    /// directory that contains it.
    ///
    /// Only a missing root is fatal. Unreadable directories are tallied in
    /// the report's stats and the walk continues into their siblings. When
    /// the same filename appears in two directories the later one wins.
    pub fn scan(root: &Path) -> Result<ScanReport, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::RepoNotFound(root.to_path_buf()));
        }

        let mut index = ArtifactIndex::new();
        let mut stats = ScanStats::default();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("directory listing failed during walk: {err}");
                    stats.record_error();
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_qualifying(entry.path()) {
                continue;
            }
            let path = entry.path();
            let (Some(name), Some(dir)) = (
                path.file_name().and_then(|n| n.to_str()),
                path.parent(),
            ) else {
                continue;
            };
            index.insert(name.to_string(), dir.to_path_buf());
        }

        debug!(
            artifacts = index.len(),
            errors = stats.errors,
            "repository walk complete"
        );
        Ok(ScanReport { index, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_indexes_jars_and_zips() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("io.netty/netty-common/4.1.100.Final");
        fs::create_dir_all(&dir).unwrap();
        fs::File::create(dir.join("netty-common-4.1.100.Final.jar")).unwrap();
        fs::File::create(dir.join("netty-common-4.1.100.Final.pom")).unwrap();

        let other = temp.path().join("org.example/bundle/1.0");
        fs::create_dir_all(&other).unwrap();
        fs::File::create(other.join("bundle-1.0.zip")).unwrap();
        fs::File::create(other.join("notes.txt")).unwrap();

        let report = Scanner::scan(temp.path()).unwrap();

        assert_eq!(report.index.len(), 2);
        assert_eq!(
            report.index.get("netty-common-4.1.100.Final.jar"),
            Some(&dir)
        );
        assert_eq!(report.index.get("bundle-1.0.zip"), Some(&other));
        assert_eq!(report.stats.errors, 0);
    }

    #[test]
    fn scan_missing_root_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");

        let result = Scanner::scan(&missing);

        assert!(matches!(result, Err(ScanError::RepoNotFound(_))));
    }

    #[test]
    fn duplicate_filenames_keep_one_entry() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::File::create(a.join("dup-1.0.jar")).unwrap();
        fs::File::create(b.join("dup-1.0.jar")).unwrap();

        let report = Scanner::scan(temp.path()).unwrap();

        assert_eq!(report.index.len(), 1);
        let owner = report.index.get("dup-1.0.jar").unwrap();
        assert!(owner == &a || owner == &b);
    }

    #[test]
    fn rescan_starts_from_a_clean_counter() {
        let temp = tempfile::tempdir().unwrap();
        fs::File::create(temp.path().join("solo-1.0.jar")).unwrap();

        let first = Scanner::scan(temp.path()).unwrap();
        let second = Scanner::scan(temp.path()).unwrap();

        assert_eq!(first.stats.errors, second.stats.errors);
        assert_eq!(second.stats.errors, 0);
    }
}
