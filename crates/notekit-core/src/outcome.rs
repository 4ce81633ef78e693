//! Outcomes of conflict checks and copy attempts.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of copying a template to one planned destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyResult {
    Copied,
    /// A regular file already sits at the destination; it was left untouched.
    AlreadyExists,
    /// The destination is a directory.
    IsDirectory,
    /// An unexpected I/O error (permissions, full disk, ...).
    Failed { reason: String },
}

impl CopyResult {
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

impl fmt::Display for CopyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied => write!(f, "copied"),
            Self::AlreadyExists => write!(f, "already exists"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Whether every result in a batch is [`CopyResult::Copied`].
#[must_use]
pub fn all_copied(results: &[CopyResult]) -> bool {
    results.iter().all(CopyResult::is_copied)
}

/// Planned destinations that already exist as regular files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicting: Vec<PathBuf>,
}

impl ConflictReport {
    /// `true` when no planned destination is taken.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.conflicting.is_empty()
    }
}
