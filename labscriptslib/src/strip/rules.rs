//! The ordered substitution rules of the markup stripper.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// A single pattern replacement.
#[derive(Debug)]
pub struct Rule {
    /// Short identifier used in trace output
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Rule {
            name,
            // patterns are literals below and covered by tests
            pattern: Regex::new(pattern).expect("invalid strip rule pattern"),
            replacement,
        }
    }

    /// Replace every non-overlapping match, leftmost first.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // replacements contain no `$`, so no capture expansion happens
        self.pattern.replace_all(text, self.replacement)
    }
}

/// Rules in application order. Later rules rely on earlier ones having run:
/// comments go first so commented-out commands never reach the command rules.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("comment", r"%.*\n?", ""),
        Rule::new("nbsp", r"~", " "),
        Rule::new("ref", r"\\ref\{[\w:-]+\}", "1"),
        Rule::new("environment", r"\s*\\(begin|end|def|let).*", ""),
        Rule::new("item", r"\s*\\item", "\u{2014}"),
        Rule::new("command", r"\\\w+\{?|\}", ""),
        Rule::new("blank_lines", r"\n\n+", "\n\n"),
    ]
});
