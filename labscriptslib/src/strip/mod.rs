//! Pattern-based LaTeX stripping.
//!
//! This is not a LaTeX parser. The input runs through a fixed list of
//! regex substitutions ([`RULES`]), each feeding the next:
//!
//! 1. `%` comments are removed up to and including the line break
//! 2. `~` becomes a space
//! 3. `\ref{label}` becomes `1`
//! 4. lines starting with `\begin`, `\end`, `\def` or `\let` are dropped
//!    together with the whitespace before them
//! 5. `\item` (and the whitespace before it) becomes `—`
//! 6. any other `\command` and its opening brace are removed, as is every `}`;
//!    command arguments stay in place
//! 7. runs of blank lines collapse into one
//!
//! Stripping never fails. Malformed markup just yields correspondingly
//! odd text.

pub mod rules;

use std::io::Read;

use tracing::{debug, trace};

use crate::text::read_all;
use crate::Result;

pub use rules::{Rule, RULES};

/// Run every rule over `text` in order.
pub fn strip(text: &str) -> String {
    let mut current = text.to_string();
    for rule in RULES.iter() {
        let next = rule.apply(&current).into_owned();
        trace!(rule = rule.name, before = current.len(), after = next.len(), "applied rule");
        current = next;
    }
    current
}

/// Read a whole stream and strip it.
pub fn strip_reader<R: Read>(reader: R) -> Result<String> {
    let input = read_all(reader)?;
    let output = strip(&input);
    debug!(input = input.len(), output = output.len(), "stripped markup");
    Ok(output)
}
