//! Output destination selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
    /// The dated log file inside the configured log directory
    File,
}

impl Output {
    pub fn to_str(&self) -> &'static str {
        match self {
            Output::Stdout => "STDOUT",
            Output::Stderr => "STDERR",
            Output::File => "FILE",
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STDOUT" => Ok(Output::Stdout),
            "STDERR" => Ok(Output::Stderr),
            "FILE" => Ok(Output::File),
            _ => Err(format!("Invalid output: '{}'", s)),
        }
    }
}
