mod deploy;
mod list;
mod scan;
mod view;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "depscan",
    version,
    about = "Inventories a local Maven repository cache",
    long_about = "Depscan walks a local Maven repository, indexes the JAR and ZIP artifacts it \
                  finds, and recovers each artifact's coordinates from its .pom descriptor and \
                  its fetch provenance from the .lastUpdated log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputType {
    /// Render a table on stdout
    Stdout,
    /// Write dependencies.csv into the output directory
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the repository and report artifact and error counts
    Scan {
        /// Path to the Maven repository, default: ~/.m2/repository
        #[arg(short = 'r', long = "repo-path", value_name = "REPO_PATH")]
        repo_path: Option<PathBuf>,
        /// Show per-directory parse diagnostics
        #[arg(short, long)]
        debug: bool,
    },
    /// List artifacts with their coordinates and fetch provenance
    List {
        /// Path to the Maven repository, default: ~/.m2/repository
        #[arg(short = 'r', long = "repo-path", value_name = "REPO_PATH")]
        repo_path: Option<PathBuf>,
        /// Where the listing goes
        #[arg(short = 't', long = "output-type", value_enum, default_value = "stdout")]
        output_type: OutputType,
        /// Directory the CSV file is written into
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: PathBuf,
        /// Keep only records whose source URL contains this substring ("all" disables)
        #[arg(short = 'f', long = "filter-repo", default_value = "all")]
        filter_repo: String,
        /// Keep only records whose filename contains this substring
        #[arg(long = "filter-file", value_name = "SUBSTRING")]
        filter_file: Option<String>,
        /// Show per-directory parse diagnostics
        #[arg(short, long)]
        debug: bool,
    },
    /// Deploy each listed artifact to a remote repository via mvn
    Deploy {
        /// Path to the Maven repository, default: ~/.m2/repository
        #[arg(short = 'r', long = "repo-path", value_name = "REPO_PATH")]
        repo_path: Option<PathBuf>,
        /// Target repository URL handed to mvn deploy:deploy-file
        #[arg(short = 'u', long = "repo-url")]
        repo_url: String,
        /// Repository id used for credentials lookup in settings.xml
        #[arg(long = "repo-id", default_value = "remote-repository")]
        repo_id: String,
        /// Keep only records whose source URL contains this substring ("all" disables)
        #[arg(short = 'f', long = "filter-repo", default_value = "all")]
        filter_repo: String,
        /// Skip the per-artifact confirmation prompt
        #[arg(short = 'y', long = "yes")]
        assume_yes: bool,
        /// Show per-directory parse diagnostics
        #[arg(short, long)]
        debug: bool,
    },
}

impl Commands {
    fn debug(&self) -> bool {
        match self {
            Commands::Scan { debug, .. }
            | Commands::List { debug, .. }
            | Commands::Deploy { debug, .. } => *debug,
        }
    }
}

fn resolve_repo(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(depscan_core::default_repo_path)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    depscan_core::logging::init_logging(cli.command.debug());

    match cli.command {
        Commands::Scan { repo_path, .. } => scan::run(&resolve_repo(repo_path)),
        Commands::List {
            repo_path,
            output_type,
            output_dir,
            filter_repo,
            filter_file,
            ..
        } => list::run(list::ListOptions {
            repo: resolve_repo(repo_path),
            output_type,
            output_dir,
            filter_repo,
            filter_file,
        }),
        Commands::Deploy {
            repo_path,
            repo_url,
            repo_id,
            filter_repo,
            assume_yes,
            ..
        } => deploy::run(deploy::DeployOptions {
            repo: resolve_repo(repo_path),
            repo_url,
            repo_id,
            filter_repo,
            assume_yes,
        }),
    }
}
