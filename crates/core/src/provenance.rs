//! Provenance parser: extracts the most recent fetch from a `.lastUpdated` log.

use crate::error::ProvenanceError;
use crate::model::ProvenanceRecord;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// One fetch entry: `<url>.lastUpdated=<epoch-millis>`. The URL capture is
/// non-greedy so URLs containing dots stop at the `.lastUpdated=` token
/// that precedes the digit run.
static FETCH_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<url>.+?)\.lastUpdated=(?P<ts>\d+)").expect("fetch entry pattern is valid")
});

fn locate_log(dir: &Path) -> Result<PathBuf, ProvenanceError> {
    let entries = fs::read_dir(dir).map_err(|source| ProvenanceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| ProvenanceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("lastUpdated") {
            return Ok(path);
        }
    }
    Err(ProvenanceError::NotFound(dir.to_path_buf()))
}

/// Extracts the fetch entry with the maximum timestamp from the
/// `.lastUpdated` file in `dir`.
///
/// When two entries share the maximum timestamp, the one appearing
/// earliest in the file wins.
pub fn parse_provenance(dir: &Path) -> Result<ProvenanceRecord, ProvenanceError> {
    let log = locate_log(dir)?;
    let content = fs::read_to_string(&log).map_err(|source| ProvenanceError::Io {
        path: log.clone(),
        source,
    })?;

    let mut best: Option<(i64, &str)> = None;
    for caps in FETCH_ENTRY.captures_iter(&content) {
        let raw = &caps["ts"];
        let millis: i64 = raw.parse().map_err(|_| ProvenanceError::Malformed {
            path: log.clone(),
            detail: format!("timestamp out of range: {raw}"),
        })?;
        // Strictly greater, so the earliest entry wins a tie.
        if best.is_none_or(|(max, _)| millis > max) {
            best = Some((millis, caps.name("url").map(|m| m.as_str()).unwrap_or("")));
        }
    }

    let (millis, url) = best.ok_or_else(|| ProvenanceError::NoEntries(log.clone()))?;
    let seconds = millis / 1000;
    let fetched_at =
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| ProvenanceError::Malformed {
            path: log,
            detail: format!("timestamp out of range: {millis}"),
        })?;

    Ok(ProvenanceRecord {
        source_url: url.to_string(),
        fetched_at,
    })
}
