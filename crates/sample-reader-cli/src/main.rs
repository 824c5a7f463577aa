use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use sample_reader_core::report::{self, Format, Options, Outcome};
use tracing_subscriber::EnvFilter;

/// Sample Reader - print selected fields of a JSON sample document
///
/// Prints one `Item: <name> <age>` line per entry of `friends`, then
/// `owner`, then `count`. On any failure prints the error and `No`.
#[derive(Parser)]
#[command(name = "sample-reader", version, about, long_about = None)]
struct Cli {
    /// Path to the JSON document
    #[arg(default_value = sample_reader_core::DEFAULT_SAMPLE_PATH)]
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 1 when extraction fails (default: always exit 0)
    #[arg(long)]
    exit_code: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = Options {
        format: if cli.json { Format::Json } else { Format::Text },
        error_style: |msg| msg.red().to_string(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit_code = match report::run(&cli.file, &options, &mut out).and_then(|outcome| {
        out.flush()?;
        Ok(outcome)
    }) {
        Ok(Outcome::Printed) => 0,
        Ok(Outcome::Failed) if cli.exit_code => 1,
        Ok(Outcome::Failed) => 0,
        Err(e) => {
            eprintln!("sample-reader: failed to write output: {}", e);
            2
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
