use depscan_core::DependencyRecord;
use tabled::Tabled;

/// A terminal/CSV row for one inventoried artifact. Missing provenance
/// renders as an empty cell.
#[derive(Tabled)]
pub struct DependencyRow {
    #[tabled(rename = "GroupID")]
    pub group: String,
    #[tabled(rename = "ArtifactID")]
    pub artifact: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "RepositoryURL")]
    pub repository_url: String,
    #[tabled(rename = "LastUpdate")]
    pub last_update: String,
    #[tabled(rename = "FileName")]
    pub file_name: String,
    #[tabled(rename = "FilePath")]
    pub file_path: String,
}

impl DependencyRow {
    pub fn from_record(record: &DependencyRecord) -> Self {
        Self {
            group: record.coordinate.group.clone(),
            artifact: record.coordinate.artifact.clone(),
            version: record.coordinate.version.clone(),
            repository_url: record.source_url.clone().unwrap_or_default(),
            last_update: record.fetch_date.clone().unwrap_or_default(),
            file_name: record.file_name.clone(),
            file_path: record.file_path.display().to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 7] {
        [
            &self.group,
            &self.artifact,
            &self.version,
            &self.repository_url,
            &self.last_update,
            &self.file_name,
            &self.file_path,
        ]
    }
}
