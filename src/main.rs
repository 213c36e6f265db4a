//! CLI entry point for toolver.
//!
//! Argument parsing, color setup, and the usage banner live here; the
//! detection engine is in the library.

use clap::Parser;
use std::env;
use std::path::Path;
use std::process::ExitCode;
use toolver::{read_rc_file, render, Session, RC_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "toolver", version, about = "Check whether command line tools are installed and report their versions")]
struct Cli {
    /// Tool names to check; also read from .toolverrc, one per line
    names: Vec<String>,

    /// Probe commands absent from the strategy table with a best-effort
    /// `--version`
    #[arg(long, env = "TOOLVER_ALLOW_UNSAFE")]
    allow_unsafe: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Printed when no names were supplied and no list file is present.
fn print_usage() {
    println!("toolver {}", env!("CARGO_PKG_VERSION"));
    println!("Check whether command line tools are installed and report their versions.");
    println!();
    println!("Usage: toolver <name>...   (or list names in {RC_FILE}, one per line)");
    println!("Example: toolver git golang nodejs");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color || env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    // CLI-supplied names first, then the list file.
    let mut names = cli.names;
    match read_rc_file(Path::new(".")) {
        Ok(from_rc) => names.extend(from_rc),
        Err(e) => {
            eprintln!("toolver: {e}");
            return ExitCode::from(2);
        }
    }

    if names.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let mut session = Session::new(cli.allow_unsafe);
    for name in &names {
        let report = session.check(name).await;
        println!("{}", render(&report));
    }

    ExitCode::from(session.tally().exit_code())
}
