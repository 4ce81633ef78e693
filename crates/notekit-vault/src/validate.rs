//! Validation of template sources and target directories.
//!
//! Both checks are read-only and resolve the supplied path to an absolute,
//! canonical location before handing it to the rest of the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use notekit_core::PathError;

/// An existing regular file to copy from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource(PathBuf);

impl TemplateSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TemplateSource {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// An existing directory to copy into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory(PathBuf);

impl TargetDirectory {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TargetDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Validate that `path` names an existing regular file.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if nothing exists at `path` or it is a
/// special file, and [`PathError::IsDirectory`] if it is a directory.
pub fn validate_source(path: &Path) -> Result<TemplateSource, PathError> {
    let metadata = fs::metadata(path).map_err(|_| PathError::NotFound(path.to_path_buf()))?;

    if metadata.is_dir() {
        return Err(PathError::IsDirectory(path.to_path_buf()));
    }
    if !metadata.is_file() {
        return Err(PathError::NotFound(path.to_path_buf()));
    }

    resolve(path).map(TemplateSource)
}

/// Validate that `path` names an existing directory.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if nothing exists at `path` or it is a
/// special file, and [`PathError::NotADirectory`] if it is a regular file.
pub fn validate_target(path: &Path) -> Result<TargetDirectory, PathError> {
    let metadata = fs::metadata(path).map_err(|_| PathError::NotFound(path.to_path_buf()))?;

    if metadata.is_file() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    if !metadata.is_dir() {
        return Err(PathError::NotFound(path.to_path_buf()));
    }

    resolve(path).map(TargetDirectory)
}

fn resolve(path: &Path) -> Result<PathBuf, PathError> {
    fs::canonicalize(path).map_err(|_| PathError::NotFound(path.to_path_buf()))
}
