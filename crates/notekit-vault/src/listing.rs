//! Directory listings with per-file statistics.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::warn;
use walkdir::WalkDir;

use notekit_core::{PathError, Result, StatKind};

/// One file in a listing with its rendered statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    pub name: String,
    pub path: PathBuf,
    /// One rendered value per requested [`StatKind`], in request order.
    pub stats: Vec<String>,
}

/// Files found under a directory, sorted by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub directory: PathBuf,
    pub columns: Vec<StatKind>,
    pub rows: Vec<FileRow>,
}

/// Recursively list regular files under `directory` with the given stats.
///
/// When `directory` is a file, its parent directory is listed instead.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if `directory` does not exist.
pub fn list_directory(directory: &Path, columns: &[StatKind]) -> Result<DirectoryListing> {
    if !directory.exists() {
        return Err(PathError::NotFound(directory.to_path_buf()).into());
    }
    let root = if directory.is_file() {
        directory.parent().unwrap_or(directory)
    } else {
        directory
    };

    let mut rows = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let metadata = entry.metadata().ok();
        let stats = columns
            .iter()
            .map(|&kind| metadata.as_ref().map(|m| render_stat(m, kind)).unwrap_or_default())
            .collect();
        rows.push(FileRow {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
            stats,
        });
    }

    Ok(DirectoryListing {
        directory: root.to_path_buf(),
        columns: columns.to_vec(),
        rows,
    })
}

/// Render one statistic; unavailable values render as an empty string.
#[must_use]
pub fn render_stat(metadata: &Metadata, kind: StatKind) -> String {
    let time = match kind {
        StatKind::Created => metadata.created(),
        StatKind::Modified => metadata.modified(),
        StatKind::Accessed => metadata.accessed(),
        StatKind::Size => return format_size(metadata.len()),
    };
    time.map(format_timestamp).unwrap_or_default()
}

/// Local time to the second: `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Size in kilobytes (1 KB = 1000 bytes).
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1000.0;
    format!("{kb:.3} KB")
}
