//! Pre-copy check for destinations that are already taken.

use tracing::debug;

use notekit_core::{ConflictReport, CopyPlan};

/// Reports which planned destinations already exist as regular files.
///
/// The answer reflects the filesystem at call time only; a file may appear
/// between this check and the copy, in which case the executor reports
/// [`notekit_core::CopyResult::AlreadyExists`].
pub struct ConflictChecker;

impl ConflictChecker {
    #[must_use]
    pub fn check(plan: &CopyPlan) -> ConflictReport {
        let conflicting: Vec<_> = plan.iter().filter(|p| p.is_file()).cloned().collect();
        debug!(
            planned = plan.len(),
            conflicting = conflicting.len(),
            "checked copy plan for conflicts"
        );
        ConflictReport { conflicting }
    }
}
