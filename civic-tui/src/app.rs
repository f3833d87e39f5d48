//! Application state: single-owner, main-thread only.
//!
//! The wizard owns the report; this struct owns everything around it:
//! which widget has focus, prompt buffers, the map cursor step and the
//! status/error history.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDateTime;

use civic_core::{Clock, Coordinates, ReportWizard, WizardConfig, WizardEvent};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    File,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Validation => "FORM",
            ErrorCategory::File => "FILE",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which Details-step widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsFocus {
    Category,
    Description,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
    AttachPrompt,
}

/// Smallest and largest map nudge, in degrees.
pub const MIN_MAP_STEP: f64 = 0.0001;
pub const MAX_MAP_STEP: f64 = 1.0;
const ERROR_HISTORY_CAP: usize = 50;

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub wizard: ReportWizard,
    pub config: WizardConfig,
    pub clock: Arc<dyn Clock>,

    // Details step
    pub details_focus: DetailsFocus,

    // Location step
    pub map_step: f64,

    // Evidence step
    pub evidence_cursor: usize,
    pub path_input: String,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(config: WizardConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            running: true,
            wizard: ReportWizard::new(&config),
            config,
            clock,
            details_focus: DetailsFocus::Category,
            map_step: 0.01,
            evidence_cursor: 0,
            path_input: String::new(),
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    /// Advance time-driven state. Called once per loop iteration.
    pub fn tick(&mut self) {
        if let Some(WizardEvent::Reset) = self.wizard.tick(self.clock.now()) {
            self.details_focus = DetailsFocus::Category;
            self.evidence_cursor = 0;
            self.path_input.clear();
            self.set_status("Ready for a new report");
        }
    }

    /// Move the map marker by whole nudges and emit the new point to the wizard.
    pub fn nudge_location(&mut self, dlat: f64, dlng: f64) {
        let Coordinates { lat, lng } = self.wizard.draft().location;
        self.wizard
            .select_location(lat + dlat * self.map_step, lng + dlng * self.map_step);
    }

    pub fn zoom_in(&mut self) {
        self.map_step = (self.map_step / 10.0).max(MIN_MAP_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.map_step = (self.map_step * 10.0).min(MAX_MAP_STEP);
    }

    /// Keep the evidence cursor on a valid row after removals.
    pub fn clamp_evidence_cursor(&mut self) {
        let len = self.wizard.draft().attachments.len();
        if self.evidence_cursor >= len {
            self.evidence_cursor = len.saturating_sub(1);
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        tracing::warn!(category = category.label(), %message, %context, "ui error");
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
