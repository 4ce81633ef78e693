//! File statistics shown in directory listings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A per-file statistic column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Created,
    Modified,
    Accessed,
    Size,
}

impl StatKind {
    /// Default listing columns.
    pub const DEFAULT: [StatKind; 3] = [StatKind::Created, StatKind::Modified, StatKind::Size];

    /// Column header for this statistic.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Created => "Creation Date",
            Self::Modified => "Modified Date",
            Self::Accessed => "Access Date",
            Self::Size => "Size",
        }
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created" | "ct" => Ok(Self::Created),
            "modified" | "mt" => Ok(Self::Modified),
            "accessed" | "at" => Ok(Self::Accessed),
            "size" | "sz" => Ok(Self::Size),
            other => Err(format!(
                "unknown stat '{other}' (expected created, modified, accessed, or size)"
            )),
        }
    }
}
