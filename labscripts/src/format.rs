//! # labformat
//!
//! Align a zmax data file into columns.
//!
//! ## Usage
//!
//! ```bash
//! # Aligned table with zmax / bbb2 ... ttt3 headers
//! labformat results.dat
//!
//! # Same table as JSON (headers, widths, rows)
//! labformat results.dat --output json
//! ```
//!
//! Every line of the input must hold exactly 55 whitespace-separated
//! fields. Otherwise `Invalid line length` is printed to stderr and the
//! exit status is 1, with nothing written to stdout.

mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use labscriptslib::{read_table, FormattedTable, LabscriptsError, OutputMode};
use tracing::debug;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("labformat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Align a 55-column zmax data file into a headed table")
        .arg(
            Arg::new("file")
                .help("Whitespace-separated data file")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(OutputMode))
                .default_value("text")
                .help("Output format (text, json)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug diagnostics to stderr"),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow::anyhow!("missing data file argument"))?;
    let mode = matches
        .get_one::<OutputMode>("output")
        .copied()
        .unwrap_or_default();

    let table = FormattedTable::from_table(&read_table(path)?);
    debug!(path = %path, rows = table.rows.len(), mode = %mode, "formatting table");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Text => table.write_text(&mut out)?,
        OutputMode::Json => writeln!(out, "{}", table.to_json()?)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(LabscriptsError::InvalidLineLength { .. }) =
                e.downcast_ref::<LabscriptsError>()
            {
                eprintln!("{e}");
            } else {
                eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_parse_output_mode() {
        let matches = build_command()
            .try_get_matches_from(["labformat", "data.txt", "--output", "json"])
            .unwrap();
        assert_eq!(
            matches.get_one::<OutputMode>("output"),
            Some(&OutputMode::Json)
        );
        assert_eq!(
            matches.get_one::<String>("file").map(String::as_str),
            Some("data.txt")
        );
    }

    #[test]
    fn test_default_output_mode() {
        let matches = build_command()
            .try_get_matches_from(["labformat", "data.txt"])
            .unwrap();
        assert_eq!(
            matches.get_one::<OutputMode>("output"),
            Some(&OutputMode::Text)
        );
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_file_is_required() {
        assert!(build_command().try_get_matches_from(["labformat"]).is_err());
    }
}
