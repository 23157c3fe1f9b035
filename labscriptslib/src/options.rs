//! Output options for the table formatter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a formatted table is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Space-aligned plain text (default)
    #[default]
    Text,
    /// Headers, widths and rows as pretty-printed JSON
    Json,
}

impl OutputMode {
    /// Whether this mode emits structured data instead of aligned text
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Text => write!(f, "text"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}
