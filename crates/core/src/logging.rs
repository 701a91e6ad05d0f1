//! Logging bootstrap shared by the CLI entry points.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber, writing to stderr so table and CSV
/// output stay clean on stdout. `debug` widens the default filter so the
/// per-directory parse diagnostics become visible; `RUST_LOG` overrides
/// both defaults.
pub fn init_logging(debug: bool) {
    let default = if debug { "depscan=debug" } else { "depscan=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
