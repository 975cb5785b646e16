//! Command-line interface definition.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use tree2csv::output::Format;

/// Convert a `tree` command text output into a CSV file.
#[derive(Parser, Debug)]
#[command(
    name = "tree2csv",
    version = tree2csv::version(),
    about = "Convert a `tree` command text output into a CSV file",
    long_about = "Reads the indented text produced by the `tree` command and writes a flat \
                  directory/file relation, one row per entry. A row with an empty file field \
                  declares a directory."
)]
pub struct Cli {
    /// Input text file (from the `tree` command).
    #[arg(required_unless_present = "completions")]
    pub input: Option<PathBuf>,

    /// Output file path.
    #[arg(required_unless_present = "completions")]
    pub output: Option<PathBuf>,

    /// Enable per-item debug output for inspection.
    #[arg(long)]
    pub debug: bool,

    /// Show progress during processing.
    #[arg(long)]
    pub show_progress: bool,

    /// Output format (overrides the configured default).
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Print shell completions to stdout and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Emit completions for the given shell.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tree2csv", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positionals_parse_in_order() {
        let cli = Cli::parse_from(["tree2csv", "in.txt", "out.csv"]);
        assert_eq!(cli.input.unwrap(), PathBuf::from("in.txt"));
        assert_eq!(cli.output.unwrap(), PathBuf::from("out.csv"));
        assert!(!cli.debug);
        assert!(!cli.show_progress);
    }

    #[test]
    fn completions_do_not_require_positionals() {
        let cli = Cli::parse_from(["tree2csv", "--completions", "bash"]);
        assert!(cli.input.is_none());
        assert!(cli.completions.is_some());
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["tree2csv", "in.txt", "out.json", "--format", "json"]);
        assert_eq!(cli.format, Some(Format::Json));
    }
}
