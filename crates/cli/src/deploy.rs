//! Deploys inventoried artifacts to a remote repository via `mvn`.

use depscan_core::{DependencyRecord, Scanner, inventory};
use dialoguer::Confirm;
use std::path::PathBuf;
use std::process::Command;
use tracing::{info, warn};

pub struct DeployOptions {
    pub repo: PathBuf,
    pub repo_url: String,
    pub repo_id: String,
    pub filter_repo: String,
    pub assume_yes: bool,
}

pub fn run(opts: DeployOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut report = Scanner::scan(&opts.repo)?;
    let records: Vec<_> = inventory::collect(&mut report)
        .into_iter()
        .filter(|record| {
            opts.filter_repo == "all"
                || record
                    .source_url
                    .as_deref()
                    .is_some_and(|url| url.contains(&opts.filter_repo))
        })
        .collect();

    if records.is_empty() {
        println!("No dependencies found.");
        return Ok(());
    }

    for record in &records {
        let coordinate = &record.coordinate;
        if !opts.assume_yes {
            let prompt = format!(
                "Deploy {}:{}:{} ({})?",
                coordinate.group, coordinate.artifact, coordinate.version, record.file_name
            );
            let confirmed = Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            if !confirmed {
                println!("Skipped {}", record.file_name);
                continue;
            }
        }

        let args = deploy_args(record, &opts.repo_url, &opts.repo_id);
        // A failed upload is reported and the remaining records still run.
        match Command::new("mvn").args(&args).status() {
            Ok(status) if status.success() => info!("deployed {}", record.file_name),
            Ok(status) => warn!("mvn exited with {status} for {}", record.file_name),
            Err(err) => warn!("failed to launch mvn for {}: {err}", record.file_name),
        }
    }

    Ok(())
}

fn deploy_args(record: &DependencyRecord, repo_url: &str, repo_id: &str) -> Vec<String> {
    let coordinate = &record.coordinate;
    vec![
        "deploy:deploy-file".to_string(),
        format!("-DgroupId={}", coordinate.group),
        format!("-DartifactId={}", coordinate.artifact),
        format!("-Dversion={}", coordinate.version),
        format!("-Dfile={}", record.file_path.display()),
        format!("-Durl={}", repo_url),
        format!("-DrepositoryId={}", repo_id),
        "-DgeneratePom=false".to_string(),
    ]
}
