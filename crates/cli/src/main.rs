fn main() {
    if let Err(err) = depscan_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
