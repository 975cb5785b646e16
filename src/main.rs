//! Command-line entry point.

mod cli;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tree2csv::listing::build_relation;
use tree2csv::output::{write_csv, write_json, Format};
use tree2csv::progress::Progress;
use tree2csv::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.debug);

    // Past the completions shortcut clap guarantees both positionals.
    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        unreachable!("clap enforces the positional arguments");
    };

    if !input.exists() {
        eprintln!("❌ Error: input file not found: {}", input.display());
        return ExitCode::from(2);
    }

    match run(&cli, input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, input: &Path, output: &Path) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.format);

    let bytes = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    // Invalid UTF-8 degrades to replacement characters instead of aborting.
    let text = String::from_utf8_lossy(&bytes);

    let progress = Progress::new(cli.show_progress, config.progress_every);
    let rows = build_relation(&text, &progress);

    match format {
        Format::Csv => write_csv(output, &rows, config.delimiter)?,
        Format::Json => write_json(output, &rows)?,
    }

    let shown = fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    println!("✅ Done! Output written to: {} ({} rows)", shown.display(), rows.len());
    Ok(())
}

/// Route diagnostics through tracing; `--debug` turns on the per-item echo.
fn init_tracing(debug: bool) {
    let default = if debug { "tree2csv=debug" } else { "tree2csv=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
