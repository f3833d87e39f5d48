//! Read-only projections of wizard state for the presentation layer.

use serde::Serialize;

use crate::catalog::CategoryCatalog;
use crate::domain::ReportDraft;
use crate::step::Step;

/// How a step renders relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: Step,
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
}

impl StepView {
    pub fn new(step: Step, current: Step) -> Self {
        let status = match step.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        };
        Self {
            step,
            number: step.number(),
            title: step.title(),
            description: step.description(),
            status,
        }
    }
}

/// Everything a front end needs to draw the stepper and nav buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
    pub current: Step,
    pub total: usize,
    pub progress_percent: f64,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub submitted: bool,
    pub steps: Vec<StepView>,
}

/// `current / N * 100`.
pub fn progress_percent(current: Step) -> f64 {
    current.number() as f64 / Step::COUNT as f64 * 100.0
}

/// Text shown on the Review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub category: String,
    pub description: String,
    pub location: String,
    pub files: String,
    pub file_names: Vec<String>,
}

impl ReviewSummary {
    pub fn new(draft: &ReportDraft, catalog: &CategoryCatalog) -> Self {
        let category = if draft.category.is_empty() {
            "Not selected".to_string()
        } else {
            catalog
                .label_for(&draft.category)
                .map(str::to_string)
                .unwrap_or_else(|| draft.category.clone())
        };
        let description = if draft.description.is_empty() {
            "None".to_string()
        } else {
            draft.description.clone()
        };
        Self {
            category,
            description,
            location: draft.location.to_string(),
            files: format!("{} file(s)", draft.attachments.len()),
            file_names: draft.attachments.iter().map(|a| a.name.clone()).collect(),
        }
    }
}
