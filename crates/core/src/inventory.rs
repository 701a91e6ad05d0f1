//! Assembles flat dependency records from the artifact index.

use crate::descriptor;
use crate::model::{DependencyRecord, ScanReport};
use crate::provenance;
use tracing::debug;

/// Enriches every index entry with descriptor and provenance data.
///
/// Every recoverable parse failure from either parser is tallied once in
/// the report's stats. An artifact whose descriptor cannot be parsed is
/// dropped from the listing; a missing provenance only blanks the URL and
/// date columns. Entries are re-parsed on every call, nothing is cached.
pub fn collect(report: &mut ScanReport) -> Vec<DependencyRecord> {
    let mut records = Vec::new();
    let ScanReport { index, stats } = report;

    for (file_name, dir) in index.iter() {
        let coordinate = match descriptor::parse_descriptor(dir) {
            Ok(coordinate) => coordinate,
            Err(err) => {
                debug!("{err}");
                stats.record_error();
                continue;
            }
        };
        let provenance = match provenance::parse_provenance(dir) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("{err}");
                stats.record_error();
                None
            }
        };
        records.push(DependencyRecord {
            coordinate,
            source_url: provenance.as_ref().map(|p| p.source_url.clone()),
            fetch_date: provenance.as_ref().map(|p| p.fetch_date()),
            file_name: file_name.clone(),
            file_path: dir.join(file_name),
        });
    }

    records
}
