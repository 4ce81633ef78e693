//! Human-readable and JSON reports for command results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use notekit_core::{all_copied, CopyPlan, CopyResult, FormatDecision};

/// Outcome of a `copy` invocation.
#[derive(Debug, Serialize)]
pub struct CopyReport {
    pub template: PathBuf,
    pub destination: PathBuf,
    pub format: FormatDecision,
    pub plan: CopyPlan,
    pub results: Vec<CopyResult>,
}

impl CopyReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        all_copied(&self.results)
    }

    /// One line per destination followed by a summary line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for (path, result) in self.plan.iter().zip(&self.results) {
            output.push_str(&format!("  {}: {result}\n", file_name(path)));
        }
        output.push_str(&format!(
            "Template file '{}' copied {}successfully {} time(s) to {}.\n",
            file_name(&self.template),
            if self.succeeded() { "" } else { "un" },
            self.plan.len(),
            self.destination.display(),
        ));
        output
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Outcome of an `analyze` invocation.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub directory: PathBuf,
    #[serde(flatten)]
    pub format: FormatDecision,
}

impl AnalysisReport {
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{}: {}\n", self.directory.display(), self.format)
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
