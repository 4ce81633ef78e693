//! # notekit-core
//!
//! Core types and the naming-convention engine for notekit.
//!
//! Nothing in this crate touches the filesystem:
//! - ISO date parsing and rendering ([`date`])
//! - Naming-convention inference over stems ([`FormatDecision`], [`format::analyze_stems`])
//! - Copy naming schemes and [`CopyPlan`]
//! - Outcome types ([`CopyResult`], [`ConflictReport`])
//! - Listing statistics ([`StatKind`])
//! - Error hierarchy ([`NotekitError`], [`PathError`], [`PlanError`])

pub mod date;
pub mod error;
pub mod format;
pub mod outcome;
pub mod plan;
pub mod stat;

pub use error::{NotekitError, PathError, PlanError, Result};
pub use format::{FormatDecision, FormatKind};
pub use outcome::{all_copied, ConflictReport, CopyResult};
pub use plan::{CopyPlan, TemplateName};
pub use stat::StatKind;
