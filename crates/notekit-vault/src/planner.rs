//! Copy planning: where would copies of a template land?

use chrono::{Local, NaiveDate};
use tracing::info;

use notekit_core::plan::copy_names;
use notekit_core::{CopyPlan, FormatDecision, PlanError, Result, TemplateName};

use crate::analyzer::FormatAnalyzer;
use crate::validate::{TargetDirectory, TemplateSource};

/// Computes destination paths for template copies without touching them.
///
/// The planning date is fixed when the planner is built, so every plan it
/// produces for the same directory snapshot is identical.
#[derive(Debug, Clone, Copy)]
pub struct CopyPlanner {
    today: NaiveDate,
}

impl Default for CopyPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyPlanner {
    /// Plan against the local calendar date.
    #[must_use]
    pub fn new() -> Self {
        Self::on(Local::now().date_naive())
    }

    /// Plan as if today were `today`.
    #[must_use]
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Plan `count` copies of `template` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidCount`] if `count` is negative and
    /// [`notekit_core::NotekitError::Io`] if `target` cannot be read.
    pub fn plan(
        &self,
        template: &TemplateSource,
        target: &TargetDirectory,
        use_formatting: bool,
        count: i64,
    ) -> Result<CopyPlan> {
        Ok(self
            .plan_with_decision(template, target, use_formatting, count)?
            .0)
    }

    /// Like [`CopyPlanner::plan`], also returning the analysis the plan used.
    ///
    /// # Errors
    ///
    /// See [`CopyPlanner::plan`].
    pub fn plan_with_decision(
        &self,
        template: &TemplateSource,
        target: &TargetDirectory,
        use_formatting: bool,
        count: i64,
    ) -> Result<(CopyPlan, FormatDecision)> {
        let count = usize::try_from(count).map_err(|_| PlanError::InvalidCount(count))?;

        let decision = FormatAnalyzer::analyze(target.path())?;
        let name = TemplateName::from_path(template.path());
        let names = copy_names(&name, &decision, use_formatting, count, self.today);

        info!(
            template = %template.path().display(),
            target = %target.path().display(),
            count,
            use_formatting,
            formatted = use_formatting && decision.is_detected(),
            "planned template copies"
        );
        Ok((CopyPlan::from_names(target.path(), names), decision))
    }
}
