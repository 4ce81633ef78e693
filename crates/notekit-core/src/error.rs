//! Error types for notekit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for notekit operations.
pub type Result<T> = std::result::Result<T, NotekitError>;

/// Top-level error type for notekit.
#[derive(Debug, Error)]
pub enum NotekitError {
    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotekitError {
    /// Whether this error stems from a malformed request rather than
    /// filesystem state (e.g. a negative copy count).
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Plan(_))
    }
}

/// Errors raised while validating a template source or target directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path does not exist or is not a regular file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path is a directory: {}", .0.display())]
    IsDirectory(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors raised while computing a copy plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("cannot copy a template {0} times: the copy count must not be negative")]
    InvalidCount(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = PathError::IsDirectory(PathBuf::from("/vault/templates"));
        let msg = err.to_string();
        assert!(msg.contains("directory"));
        assert!(msg.contains("/vault/templates"));

        let err = PlanError::InvalidCount(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn only_plan_errors_are_usage_errors() {
        let usage: NotekitError = PlanError::InvalidCount(-1).into();
        assert!(usage.is_usage());

        let missing: NotekitError = PathError::NotFound(PathBuf::from("nope")).into();
        assert!(!missing.is_usage());
    }
}
