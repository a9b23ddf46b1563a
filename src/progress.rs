//! Progress record and the advance state machine.
//!
//! Progress is a persisted cursor (current section + step) plus a
//! completion set over a [`Guide`](crate::guide::Guide). It is mutated only
//! by [`advance`] and written back after every advance, whichever branch is
//! taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::guide::{Guide, Step, StepLookup};

/// Persisted progress state.
///
/// Stored as flat JSON with `currentSection` / `currentStep` /
/// `completed` / `lastUpdated` fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Identifier of the section containing the current step.
    pub current_section: String,
    /// Identifier of the step the user is currently on.
    pub current_step: String,
    /// Completed step ids. Set semantics: no duplicates, order irrelevant.
    #[serde(default)]
    pub completed: Vec<String>,
    /// Set on every write, never read by logic.
    pub last_updated: DateTime<Utc>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_section: "github-setup".to_string(),
            current_step: "create-account".to_string(),
            completed: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

/// Display classification of a step in the guide listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

impl StepStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Done => "✅",
            Self::Current => "🟡",
            Self::Pending => "⚪",
        }
    }
}

impl Progress {
    pub fn is_completed(&self, step_id: &str) -> bool {
        self.completed.iter().any(|id| id == step_id)
    }

    /// Idempotent insertion into the completed set.
    pub fn mark_completed(&mut self, step_id: &str) {
        if !self.is_completed(step_id) {
            self.completed.push(step_id.to_string());
        }
    }

    /// Classify a step for display: done beats current beats pending.
    pub fn step_status(&self, step_id: &str) -> StepStatus {
        if self.is_completed(step_id) {
            StepStatus::Done
        } else if self.current_step == step_id {
            StepStatus::Current
        } else {
            StepStatus::Pending
        }
    }

    /// Refresh the write timestamp. Called right before persisting.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

/// Outcome of an [`advance`] call.
#[derive(Debug, Clone)]
pub enum Advance {
    /// The cursor moved to the next step.
    Next(Step),
    /// There is no next step: either the current step was the last one, or
    /// its id no longer exists in the guide (stale cursor after a guide
    /// edit — treated as complete, logged at `warn`).
    GuideComplete,
}

/// Mark the current step completed and move the cursor to the step that
/// follows it in the guide's flattened ordering.
///
/// The completed-set insertion happens on every branch; the cursor only
/// moves when a following step exists. The caller persists the record
/// afterwards regardless of outcome.
pub fn advance(guide: &Guide, progress: &mut Progress) -> Advance {
    let current = progress.current_step.clone();
    progress.mark_completed(&current);

    match guide.step_after(&current) {
        StepLookup::Next {
            section_title,
            step,
        } => {
            progress.current_step = step.id.clone();
            progress.current_section = section_title;
            Advance::Next(step)
        }
        StepLookup::LastStep => Advance::GuideComplete,
        StepLookup::NotFound => {
            tracing::warn!(
                step = %current,
                "Current step not found in guide (guide edited?); treating as complete"
            );
            Advance::GuideComplete
        }
    }
}

/// Snapshot of the user's position, rendered by the status command.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub section: String,
    pub step: String,
    pub completed: usize,
    pub total: usize,
}

/// Compute the current position and counts against a freshly loaded guide.
///
/// The total is recomputed on every call so edits to the guide document
/// show up immediately. The section display falls back to the raw persisted
/// section id when the cursor no longer matches the guide.
pub fn status(guide: &Guide, progress: &Progress) -> StatusReport {
    let section = guide
        .section_title_of(&progress.current_step)
        .map(str::to_string)
        .unwrap_or_else(|| progress.current_section.clone());

    StatusReport {
        section,
        step: progress.current_step.clone(),
        completed: progress.completed.len(),
        total: guide.total_steps(),
    }
}
