//! Run a single JOSM test.
//!
//! Compiles the given test source with the configured classpath, then starts
//! the JUnit runner on the class derived from its path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtest::exit_codes;
use runtest::invoke::invoke_test;
use runtest::io::config::{DEFAULT_CONFIG_FILE, load_config};
use runtest::io::process::ShShell;
use runtest::logging;

#[derive(Parser)]
#[command(name = "runtest", version, about = "Run single JOSM test")]
struct Cli {
    /// Relative path to test. Example: ./test/unit/org/openstreetmap/josm/tools/GeometryTest.java
    testpath: String,

    /// Config file overriding classpath and programs (defaults apply if missing).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Exit with the test runner's exit code instead of 0.
    #[arg(long)]
    propagate_exit: bool,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let outcome = invoke_test(&ShShell, &config, &cli.testpath)?;
    if cli.propagate_exit {
        return Ok(outcome.run_code.unwrap_or(exit_codes::FAILED));
    }
    Ok(exit_codes::OK)
}
