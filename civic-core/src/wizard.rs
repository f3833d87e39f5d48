//! Report wizard: the four-step corruption report flow as a finite sequence controller.
//!
//! States are the steps 1..=4 plus a terminal `Submitted` pseudostate:
//! - `advance`: 1 → 2 → 3 → 4, gated only at 1 → 2 (category and description)
//! - `retreat`: n → n−1, floored at 1
//! - `submit`: 4 → Submitted, arming the deferred reset
//! - reset (fired by `tick`): Submitted → 1 with an empty draft
//!
//! While submitted the front end shows a confirmation instead of the form,
//! so edits and navigation are ignored until the reset fires.

use std::time::{Duration, Instant};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::CategoryCatalog;
use crate::config::WizardConfig;
use crate::domain::{Attachment, Coordinates, Field, ReportDraft};
use crate::receipt::Receipt;
use crate::schedule::DeferredReset;
use crate::step::Step;
use crate::view::{progress_percent, ReviewSummary, StepView, WizardView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Required fields are empty. Recoverable: keep the user on `step`.
    #[error("step {step} is incomplete: missing {}", list_fields(.missing))]
    IncompleteStep { step: Step, missing: Vec<Field> },

    #[error("submit is only available on the review step (currently on step {step})")]
    NotAtReview { step: Step },

    #[error("report already submitted")]
    AlreadySubmitted,
}

fn list_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a step gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStatus {
    Open,
    Blocked(Vec<Field>),
}

impl GateStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, GateStatus::Open)
    }
}

/// Something the host loop should react to after `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Deferred reset fired: draft cleared, back on step 1.
    Reset,
}

/// Owns the step position, the draft and the pending reset.
#[derive(Debug, Clone)]
pub struct ReportWizard {
    step: Step,
    submitted: bool,
    draft: ReportDraft,
    reset: DeferredReset,
    receipt: Option<Receipt>,
    catalog: CategoryCatalog,
    default_location: Coordinates,
    reset_delay: Duration,
}

impl Default for ReportWizard {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

impl ReportWizard {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            step: Step::first(),
            submitted: false,
            draft: ReportDraft::with_location(config.default_location),
            reset: DeferredReset::new(),
            receipt: None,
            catalog: config.categories.clone(),
            default_location: config.default_location,
            reset_delay: config.reset_delay(),
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn step_count(&self) -> usize {
        Step::COUNT
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Receipt of the submission currently on display.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Whether the confirmation will clear on its own.
    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    /// Time until the confirmation clears.
    pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
        self.reset.remaining(now)
    }

    // ── Draft edits ────────────────────────────────────────────────────

    /// Overwrite a text field. Validation happens at `advance`, not here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.ignore_while_submitted("set_field") {
            return;
        }
        *self.draft.field_mut(field) = value.into();
    }

    /// Append files in order. Returns how many were added.
    pub fn add_attachments<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = Attachment>,
    {
        if self.ignore_while_submitted("add_attachments") {
            return 0;
        }
        let before = self.draft.attachments.len();
        self.draft.attachments.extend(files);
        let added = self.draft.attachments.len() - before;
        debug!(added, total = self.draft.attachments.len(), "attachments added");
        added
    }

    /// Remove the attachment at `index`. Out of range is a no-op.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if self.ignore_while_submitted("remove_attachment") {
            return None;
        }
        if index >= self.draft.attachments.len() {
            debug!(index, len = self.draft.attachments.len(), "remove_attachment out of range");
            return None;
        }
        Some(self.draft.attachments.remove(index))
    }

    pub fn select_location(&mut self, lat: f64, lng: f64) {
        if self.ignore_while_submitted("select_location") {
            return;
        }
        self.draft.location = Coordinates::new(lat, lng);
    }

    // ── Gates ──────────────────────────────────────────────────────────

    /// Gate guarding the transition out of `step`.
    pub fn gate(&self, step: Step) -> GateStatus {
        match step {
            Step::Details => {
                let missing = self.draft.missing_required();
                if missing.is_empty() {
                    GateStatus::Open
                } else {
                    GateStatus::Blocked(missing)
                }
            }
            Step::Location | Step::Evidence | Step::Review => GateStatus::Open,
        }
    }

    pub fn current_gate(&self) -> GateStatus {
        self.gate(self.step)
    }

    /// Whether "Next" should be enabled.
    pub fn can_advance(&self) -> bool {
        !self.submitted && !self.step.is_last() && self.current_gate().is_open()
    }

    /// Whether "Previous" should be enabled.
    pub fn can_retreat(&self) -> bool {
        !self.submitted && self.step != Step::first()
    }

    // ── Transitions ────────────────────────────────────────────────────

    /// Move forward one step.
    ///
    /// On the last step this is a no-op; submission is a separate action.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };
        if let GateStatus::Blocked(missing) = self.current_gate() {
            debug!(step = self.step.number(), ?missing, "advance rejected");
            return Err(WizardError::IncompleteStep {
                step: self.step,
                missing,
            });
        }
        debug!(from = self.step.number(), to = next.number(), "step advanced");
        self.step = next;
        Ok(next)
    }

    /// Move back one step, never below the first.
    pub fn retreat(&mut self) -> Step {
        if self.ignore_while_submitted("retreat") {
            return self.step;
        }
        if let Some(prev) = self.step.prev() {
            debug!(from = self.step.number(), to = prev.number(), "step retreated");
            self.step = prev;
        }
        self.step
    }

    /// Submit from the review step and arm the reset at `now + reset_delay`.
    ///
    /// Nothing is transmitted; the returned receipt is the only record.
    pub fn submit(&mut self, now: Instant) -> Result<Receipt, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.step.is_last() {
            return Err(WizardError::NotAtReview { step: self.step });
        }
        let receipt = Receipt::issue(&self.draft, Utc::now());
        self.submitted = true;
        if !self.reset.schedule(now, self.reset_delay) {
            warn!(
                delay_secs = self.reset_delay.as_secs(),
                "reset delay out of range, confirmation stays until force_reset"
            );
        }
        self.receipt = Some(receipt.clone());
        info!(
            reference = %receipt.reference,
            category = %receipt.category,
            attachments = receipt.attachment_count,
            "report submitted"
        );
        Ok(receipt)
    }

    /// Drive the deferred reset. Call from the host event loop.
    pub fn tick(&mut self, now: Instant) -> Option<WizardEvent> {
        if self.reset.poll(now) {
            self.apply_reset();
            Some(WizardEvent::Reset)
        } else {
            None
        }
    }

    /// Drop the pending reset without firing it. The wizard stays submitted
    /// until [`force_reset`](Self::force_reset).
    pub fn cancel_pending_reset(&mut self) -> bool {
        let cancelled = self.reset.cancel();
        if cancelled {
            debug!("pending reset cancelled");
        }
        cancelled
    }

    /// Perform the reset transition now, whatever is pending.
    pub fn force_reset(&mut self) {
        self.reset.cancel();
        self.apply_reset();
    }

    fn apply_reset(&mut self) {
        self.step = Step::first();
        self.submitted = false;
        self.draft = ReportDraft::with_location(self.default_location);
        self.receipt = None;
        info!("draft reset");
    }

    fn ignore_while_submitted(&self, op: &'static str) -> bool {
        if self.submitted {
            debug!(op, "ignored while submitted");
        }
        self.submitted
    }

    // ── Projections ────────────────────────────────────────────────────

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.step)
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            current: self.step,
            total: Step::COUNT,
            progress_percent: self.progress_percent(),
            can_advance: self.can_advance(),
            can_retreat: self.can_retreat(),
            submitted: self.submitted,
            steps: Step::ALL
                .iter()
                .map(|s| StepView::new(*s, self.step))
                .collect(),
        }
    }

    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary::new(&self.draft, &self.catalog)
    }
}
