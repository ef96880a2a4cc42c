#![forbid(unsafe_code)]

use argspec::cli::{Cli, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ARGSPEC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("argspec={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(cli));
}
