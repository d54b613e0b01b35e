//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::adapters::ScaffoldCommandAdapter;
use crate::app::generate::{self, GenerateOptions};
use crate::domain::plugin::DEFAULT_BINARY_PATH;
use crate::domain::{AppError, SampleFlavor};

#[derive(Parser)]
#[command(name = "samplegen")]
#[command(version)]
#[command(
    about = "Regenerate the hybrid operator samples under testdata/",
    long_about = None
)]
struct Cli {
    /// Binary path that should be used
    #[arg(long = "binaryPath", visible_alias = "binary-path", default_value = DEFAULT_BINARY_PATH)]
    binary_path: String,
    /// Root of the fixture tree (defaults to ./testdata)
    #[arg(long, value_name = "DIR")]
    testdata: Option<PathBuf>,
    /// Only generate the given sample flavor (repeatable)
    #[arg(long = "sample", value_enum, value_name = "FLAVOR")]
    samples: Vec<SampleFlavor>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match run_generate(cli) {
        Ok(paths) => {
            for path in paths {
                println!("✅ Generated {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(cli: Cli) -> Result<Vec<PathBuf>, AppError> {
    let cwd = std::env::current_dir()?;
    let options =
        GenerateOptions::resolve(&cli.binary_path, cli.testdata.as_deref(), &cli.samples, &cwd)?;
    generate::execute(&options, ScaffoldCommandAdapter::new())
}
