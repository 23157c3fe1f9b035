//! # labtrim
//!
//! Strip LaTeX markup from standard input.
//!
//! ## Usage
//!
//! ```bash
//! labtrim < paper.tex > paper.txt
//! ```
//!
//! Comments, `\begin`/`\end`/`\def`/`\let` lines and command names are
//! removed, `\ref{..}` becomes `1`, `\item` becomes `—`. Arguments of
//! unknown commands are kept as plain text.

mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use console::style;
use labscriptslib::strip_reader;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("labtrim")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Strip LaTeX markup from stdin, writing plain text to stdout")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug diagnostics to stderr"),
        )
}

fn run() -> anyhow::Result<()> {
    let text = strip_reader(io::stdin().lock())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init(matches.get_flag("verbose"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
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
    fn test_rejects_positional_arguments() {
        assert!(build_command()
            .try_get_matches_from(["labtrim", "paper.tex"])
            .is_err());
    }
}
