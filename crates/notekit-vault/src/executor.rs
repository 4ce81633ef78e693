//! Copying a template to planned destinations.
//!
//! Destinations are opened with `create_new`, so an existing file is never
//! truncated or replaced, even if it appears after the conflict check.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use tracing::{info, warn};

use notekit_core::{CopyPlan, CopyResult};

use crate::validate::TemplateSource;

/// Performs template copies, one result per destination.
pub struct CopyExecutor;

impl CopyExecutor {
    /// Copy `source` to `destination` unless something is already there.
    ///
    /// Unexpected I/O errors are captured as [`CopyResult::Failed`].
    #[must_use]
    pub fn copy_one(source: &Path, destination: &Path) -> CopyResult {
        if destination.is_file() {
            return CopyResult::AlreadyExists;
        }
        if destination.is_dir() {
            return CopyResult::IsDirectory;
        }

        let result = match copy_new(source, destination) {
            Ok(bytes) => {
                info!(destination = %destination.display(), bytes, "copied template");
                CopyResult::Copied
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => CopyResult::AlreadyExists,
            Err(e) => CopyResult::Failed {
                reason: e.to_string(),
            },
        };
        if !result.is_copied() {
            warn!(destination = %destination.display(), %result, "template not copied");
        }
        result
    }

    /// Copy `source` to every destination in `plan`, in order.
    ///
    /// Every destination is attempted; the returned results line up with
    /// the plan positionally.
    #[must_use]
    pub fn copy_many(source: &TemplateSource, plan: &CopyPlan) -> Vec<CopyResult> {
        plan.iter()
            .map(|destination| Self::copy_one(source.path(), destination))
            .collect()
    }
}

fn copy_new(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)?;

    match io::copy(&mut reader, &mut writer).and_then(|n| writer.sync_all().map(|()| n)) {
        Ok(n) => Ok(n),
        Err(e) => {
            // don't leave a truncated copy behind
            drop(writer);
            let _ = fs::remove_file(destination);
            Err(e)
        }
    }
}
