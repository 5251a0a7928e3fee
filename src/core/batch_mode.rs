//! Batching mode selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an accepted entry becomes visible at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BatchMode {
    /// Each entry travels through the worker queue on its own
    #[default]
    None,
    /// Write once the pending batch holds `max_items` entries
    Item,
    /// Write once the pending batch holds `max_bytes` rendered bytes
    Byte,
    /// Write when the batch window (`max_wait`) elapses
    Time,
}

impl BatchMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            BatchMode::None => "NONE",
            BatchMode::Item => "ITEM",
            BatchMode::Byte => "BYTE",
            BatchMode::Time => "TIME",
        }
    }
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for BatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(BatchMode::None),
            "ITEM" => Ok(BatchMode::Item),
            "BYTE" => Ok(BatchMode::Byte),
            "TIME" => Ok(BatchMode::Time),
            _ => Err(format!("Invalid batch mode: '{}'", s)),
        }
    }
}
