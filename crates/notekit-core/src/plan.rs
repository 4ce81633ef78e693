//! Copy plans and the naming schemes that produce them.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_iso_date;
use crate::format::{FormatDecision, FormatKind};

/// Ordered destinations a template will be copied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CopyPlan {
    destinations: Vec<PathBuf>,
}

impl CopyPlan {
    #[must_use]
    pub fn new(destinations: Vec<PathBuf>) -> Self {
        Self { destinations }
    }

    /// Join each name onto `directory`, preserving order.
    #[must_use]
    pub fn from_names(directory: &Path, names: Vec<String>) -> Self {
        Self::new(names.into_iter().map(|n| directory.join(n)).collect())
    }

    #[must_use]
    pub fn destinations(&self) -> &[PathBuf] {
        &self.destinations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.destinations.iter()
    }
}

impl<'a> IntoIterator for &'a CopyPlan {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

/// The stem and suffix of a template file name (`note.txt` → `note`, `.txt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName {
    pub stem: String,
    pub suffix: String,
}

impl TemplateName {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        Self { stem, suffix }
    }
}

/// Names for `count` copies of `template` following `decision`.
///
/// Without formatting (or when nothing was detected) the stem-copy scheme
/// applies: `note-copy.txt` for one copy, `note-copy-{i}.txt` for several.
#[must_use]
pub fn copy_names(
    template: &TemplateName,
    decision: &FormatDecision,
    use_formatting: bool,
    count: usize,
    today: NaiveDate,
) -> Vec<String> {
    if !use_formatting {
        return default_names(template, count);
    }
    match decision.kind {
        FormatKind::IsoDate => iso_date_names(template, decision.separator, count, today),
        FormatKind::None => default_names(template, count),
    }
}

/// Stem-copy names: `{stem}-copy{suffix}` or `{stem}-copy-{i}{suffix}`.
#[must_use]
pub fn default_names(template: &TemplateName, count: usize) -> Vec<String> {
    let TemplateName { stem, suffix } = template;
    match count {
        0 => Vec::new(),
        1 => vec![format!("{stem}-copy{suffix}")],
        _ => (0..count)
            .map(|i| format!("{stem}-copy-{i}{suffix}"))
            .collect(),
    }
}

/// Date names for `today`: `{date}{suffix}` or `{date}{sep}copy{sep}{i}{suffix}`.
#[must_use]
pub fn iso_date_names(
    template: &TemplateName,
    separator: Option<char>,
    count: usize,
    today: NaiveDate,
) -> Vec<String> {
    let date = format_iso_date(today, separator);
    let suffix = &template.suffix;
    let sep = separator.map(String::from).unwrap_or_default();
    match count {
        0 => Vec::new(),
        1 => vec![format!("{date}{suffix}")],
        _ => (0..count)
            .map(|i| format!("{date}{sep}copy{sep}{i}{suffix}"))
            .collect(),
    }
}
