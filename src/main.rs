//! Keyward command-line product-key check.
//!
//! Reads one key from stdin and exits 0 only when the key is valid and the
//! integrity measurements match.
//!
//! Usage:
//!   keyward [--verbose] [--quiet]

use clap::Parser;
use keyward::driver::DEFAULT_LOG_LEVEL;
use keyward::{Driver, KeyValidationEngine, SystemProbe};
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "keyward", version)]
#[command(about = "Validate a product key read from stdin")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the input prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        DEFAULT_LOG_LEVEL
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let driver = Driver::new(SystemProbe, KeyValidationEngine::standard());
    let stdin = io::stdin();
    let outcome = if args.quiet {
        driver.run(stdin.lock(), io::sink())
    } else {
        driver.run(stdin.lock(), io::stdout())
    };

    if outcome.is_alert() {
        eprintln!("{}", outcome.message());
    } else {
        println!("{}", outcome.message());
    }
    ExitCode::from(outcome.exit_code())
}
