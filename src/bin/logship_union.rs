//! Log Shipping Unifier - command line front end
//!
//! Runs the same unify action as the desktop window against a directory and
//! reports the outcome on the terminal. Exits non-zero on a warning or error.

use anyhow::{bail, Result};
use clap::Parser;
use logshipping_unifier::config::{BASE_NAME, DEFAULT_SKIP_ROWS, FILE_MARKER, FILE_PREFIX};
use logshipping_unifier::{unify, UnifyConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logship-union")]
#[command(about = "Combine Transaction Log Shipping Status exports into one dated workbook")]
struct Cli {
    /// Directory containing the exports; the combined workbook is written here
    directory: PathBuf,

    /// Required filename prefix of an export
    #[arg(long, default_value = FILE_PREFIX)]
    prefix: String,

    /// Substring an export's filename must contain
    #[arg(long, default_value = FILE_MARKER)]
    marker: String,

    /// Sheet rows to skip before the header row
    #[arg(long, default_value_t = DEFAULT_SKIP_ROWS)]
    skip_rows: usize,

    /// Extra cell text treated as missing (repeatable)
    #[arg(long = "na-value")]
    na_values: Vec<String>,

    /// Base name of the combined workbook
    #[arg(long, default_value = BASE_NAME)]
    base_name: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = UnifyConfig::new(cli.directory);
    config.file_prefix = cli.prefix;
    config.file_marker = cli.marker;
    config.base_name = cli.base_name;
    config.load.skip_rows = cli.skip_rows;
    config.load.na_values.extend(cli.na_values);

    let outcome = unify(&config);
    if outcome.is_success() {
        println!("{}: {}", outcome.title(), outcome.description());
        Ok(())
    } else {
        eprintln!("{}: {}", outcome.title(), outcome.description());
        bail!("{}", outcome.message())
    }
}
