use crate::OutputType;
use crate::view::DependencyRow;
use depscan_core::{DependencyRecord, Scanner, inventory};
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, settings::Style};
use tracing::info;

const CSV_HEADER: [&str; 7] = [
    "GroupID",
    "ArtifactID",
    "Version",
    "RepositoryURL",
    "LastUpdate",
    "FileName",
    "FilePath",
];

pub struct ListOptions {
    pub repo: PathBuf,
    pub output_type: OutputType,
    pub output_dir: PathBuf,
    pub filter_repo: String,
    pub filter_file: Option<String>,
}

pub fn run(opts: ListOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut report = Scanner::scan(&opts.repo)?;
    let records: Vec<_> = inventory::collect(&mut report)
        .into_iter()
        .filter(|record| keep(record, &opts.filter_repo, opts.filter_file.as_deref()))
        .collect();
    info!(
        records = records.len(),
        errors = report.stats.errors,
        "inventory assembled"
    );

    match opts.output_type {
        OutputType::Stdout => print_table(&records),
        OutputType::Csv => {
            let path = write_csv(&records, &opts.output_dir)?;
            println!("Dependencies list exported to {}", path.display());
        }
    }

    Ok(())
}

/// Plain case-sensitive substring filters. `"all"` disables the URL filter;
/// a record with no recorded URL never passes an active URL filter.
fn keep(record: &DependencyRecord, filter_repo: &str, filter_file: Option<&str>) -> bool {
    let url_ok = filter_repo == "all"
        || record
            .source_url
            .as_deref()
            .is_some_and(|url| url.contains(filter_repo));
    let file_ok = filter_file.is_none_or(|needle| record.file_name.contains(needle));
    url_ok && file_ok
}

fn print_table(records: &[DependencyRecord]) {
    if records.is_empty() {
        println!("No dependencies found.");
        return;
    }
    let rows: Vec<DependencyRow> = records.iter().map(DependencyRow::from_record).collect();
    println!("{}", Table::new(&rows).with(Style::psql()));
}

/// Writes `dependencies.csv` into `dir`: a literal `Sep=,` hint line, the
/// fixed header, then one row per record.
fn write_csv(records: &[DependencyRecord], dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("dependencies.csv");
    let mut out = String::from("Sep=,\n");
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');
    for record in records {
        let row = DependencyRow::from_record(record);
        let escaped: Vec<String> = row.fields().iter().map(|f| csv_field(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    fs::write(&path, out)?;
    Ok(path)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depscan_core::Coordinate;

    fn record(url: Option<&str>, file_name: &str) -> DependencyRecord {
        DependencyRecord {
            coordinate: Coordinate {
                group: "org.example".into(),
                artifact: "thing".into(),
                version: "1.0".into(),
            },
            source_url: url.map(str::to_string),
            fetch_date: url.map(|_| "2023-11-30 16:19:49".to_string()),
            file_name: file_name.into(),
            file_path: PathBuf::from("/repo").join(file_name),
        }
    }

    #[test]
    fn all_disables_the_url_filter() {
        assert!(keep(&record(None, "thing-1.0.jar"), "all", None));
    }

    #[test]
    fn url_filter_is_a_substring_match() {
        let r = record(Some("https://mirror.example.com/maven2/"), "thing-1.0.jar");
        assert!(keep(&r, "mirror.example", None));
        assert!(!keep(&r, "central", None));
        assert!(!keep(&record(None, "thing-1.0.jar"), "mirror", None));
    }

    #[test]
    fn file_filter_matches_the_filename() {
        let r = record(None, "thing-1.0.jar");
        assert!(keep(&r, "all", Some("thing")));
        assert!(!keep(&r, "all", Some("other")));
    }

    #[test]
    fn csv_starts_with_separator_hint_and_header() {
        let temp = tempfile::tempdir().unwrap();
        let records = vec![record(Some("https://repo/"), "thing-1.0.jar")];

        let path = write_csv(&records, temp.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Sep=,"));
        assert_eq!(
            lines.next(),
            Some("GroupID,ArtifactID,Version,RepositoryURL,LastUpdate,FileName,FilePath")
        );
        assert_eq!(
            lines.next(),
            Some("org.example,thing,1.0,https://repo/,2023-11-30 16:19:49,thing-1.0.jar,/repo/thing-1.0.jar")
        );
    }

    #[test]
    fn csv_blanks_missing_provenance_and_escapes_commas() {
        let temp = tempfile::tempdir().unwrap();
        let mut bare = record(None, "thing-1.0.jar");
        bare.coordinate.group = "org,example".into();

        let path = write_csv(&[bare], temp.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        let row = content.lines().nth(2).unwrap();
        assert_eq!(row, "\"org,example\",thing,1.0,,,thing-1.0.jar,/repo/thing-1.0.jar");
    }
}
