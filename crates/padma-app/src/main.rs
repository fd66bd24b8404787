use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use padma_core::RunOptions;

pub mod logging;
pub mod profile;

/// Convert the Padmakara multilingual glossary export into a
/// pipe-delimited dictionary
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file; missing fields use built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory searched for exports
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Export file name glob; the greatest match by name is used
    #[arg(long)]
    pattern: Option<String>,

    /// Convert this file instead of searching for an export
    #[arg(short, long, conflicts_with_all = ["input_dir", "pattern"])]
    input: Option<PathBuf>,

    /// Dictionary file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report counts without writing the dictionary
    #[arg(long)]
    dry_run: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log each skipped row
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.input_dir {
        config.input.dir = dir;
    }
    if let Some(pattern) = cli.pattern {
        config.input.pattern = pattern;
    }
    if let Some(path) = cli.output {
        config.output.path = path;
    }

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let options = RunOptions {
        input: cli.input,
        dry_run: cli.dry_run,
    };

    let report = padma_core::run(&config, &options).context("Glossary conversion failed")?;
    println!("{report}");

    Ok(())
}
