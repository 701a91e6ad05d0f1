use depscan_core::Scanner;
use std::path::Path;

pub fn run(repo: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = Scanner::scan(repo)?;

    println!("Number of JAR and ZIP artifacts found: {}", report.index.len());
    println!("Number of errors encountered: {}", report.stats.errors);

    Ok(())
}
