//! # notekit-vault
//!
//! File system operations on a note vault.
//!
//! The copy pipeline runs leaves first:
//! [`validate_source`]/[`validate_target`] → [`FormatAnalyzer`] →
//! [`CopyPlanner`] → [`ConflictChecker`] → [`CopyExecutor`].
//! Directory listings ([`listing`]) and their formatting ([`formatter`])
//! are read-only reporting on the side.

pub mod analyzer;
pub mod conflict;
pub mod executor;
pub mod formatter;
pub mod listing;
pub mod planner;
pub mod validate;

pub use analyzer::FormatAnalyzer;
pub use conflict::ConflictChecker;
pub use executor::CopyExecutor;
pub use formatter::{format_listing, OutputFormat};
pub use listing::{list_directory, DirectoryListing, FileRow};
pub use planner::CopyPlanner;
pub use validate::{validate_source, validate_target, TargetDirectory, TemplateSource};
