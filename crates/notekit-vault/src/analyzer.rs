//! Naming-convention detection for a directory on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use notekit_core::format::analyze_stems;
use notekit_core::{FormatDecision, Result};

/// Inspects a directory's entry names for a shared naming convention.
pub struct FormatAnalyzer;

impl FormatAnalyzer {
    /// Detect the naming convention of `directory`'s immediate entries.
    ///
    /// Every entry participates, subdirectories included.
    ///
    /// # Errors
    ///
    /// Returns [`notekit_core::NotekitError::Io`] if the directory cannot be read.
    pub fn analyze(directory: &Path) -> Result<FormatDecision> {
        let stems = directory_stems(directory)?;
        let decision = analyze_stems(&stems);
        debug!(
            directory = %directory.display(),
            entries = stems.len(),
            %decision,
            "analyzed directory naming"
        );
        Ok(decision)
    }
}

/// Stems (names without their last extension) of `directory`'s immediate
/// entries, in no particular order.
///
/// # Errors
///
/// Returns [`notekit_core::NotekitError::Io`] if the directory cannot be read.
pub fn directory_stems(directory: &Path) -> Result<Vec<String>> {
    let mut stems = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if let Some(stem) = path.file_stem() {
            stems.push(stem.to_string_lossy().into_owned());
        }
    }
    Ok(stems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekit_core::FormatKind;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn empty_directory_has_no_format() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FormatAnalyzer::analyze(dir.path()).unwrap(), FormatDecision::none());
    }

    #[test]
    fn detects_dash_dated_notes() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2025-01-01.md");
        touch(dir.path(), "2025-01-02.md");
        touch(dir.path(), "2025-02-14.md");

        let decision = FormatAnalyzer::analyze(dir.path()).unwrap();
        assert_eq!(decision.kind, FormatKind::IsoDate);
        assert_eq!(decision.separator, Some('-'));
    }

    #[test]
    fn extensions_do_not_affect_detection() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2025.01.01.md");
        touch(dir.path(), "2025.01.02.txt");

        // "2025.01.01.md" has stem "2025.01.01"
        let decision = FormatAnalyzer::analyze(dir.path()).unwrap();
        assert_eq!(decision, FormatDecision::iso_date(Some('.')));
    }

    #[test]
    fn detects_unseparated_dates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "20250101.md");
        touch(dir.path(), "20250102.md");

        assert_eq!(
            FormatAnalyzer::analyze(dir.path()).unwrap(),
            FormatDecision::iso_date(None)
        );
    }

    #[test]
    fn subdirectories_participate() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2025-01-01.md");
        fs::create_dir(dir.path().join("attachments")).unwrap();

        assert!(!FormatAnalyzer::analyze(dir.path()).unwrap().is_detected());
    }

    #[test]
    fn one_odd_name_disqualifies_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2025-01-01.md");
        touch(dir.path(), "2025-01-02.md");
        touch(dir.path(), "notes-2025.md");

        assert!(!FormatAnalyzer::analyze(dir.path()).unwrap().is_detected());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FormatAnalyzer::analyze(&dir.path().join("missing"));
        assert!(matches!(result, Err(notekit_core::NotekitError::Io(_))));
    }
}
