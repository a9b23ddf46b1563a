//! Guide data model — the static ordered curriculum of sections and steps.
//!
//! The guide is configuration, not behavior: it is loaded fresh from disk
//! on every query so hot edits to the document are picked up immediately.

use serde::{Deserialize, Serialize};

/// A complete guide document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled group of consecutive steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// The smallest addressable unit of the curriculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Unique across the whole guide (not validated; first match wins).
    pub id: String,
    pub desc: String,
    /// Optional shell command the user should run for this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Outcome of looking up the step that follows a given step id.
#[derive(Debug, Clone)]
pub enum StepLookup {
    /// The id was found and a step follows it in document order.
    Next { section_title: String, step: Step },
    /// The id was found but nothing follows it.
    LastStep,
    /// The id does not appear anywhere in the guide.
    NotFound,
}

impl Guide {
    /// Total number of steps across all sections.
    pub fn total_steps(&self) -> usize {
        self.sections.iter().map(|s| s.steps.len()).sum()
    }

    /// Find the step immediately following `step_id` in the guide's
    /// flattened ordering (sections in order, steps within a section in
    /// order).
    ///
    /// A single forward scan: if multiple steps share an id, the first
    /// occurrence wins and the scan stops there.
    pub fn step_after(&self, step_id: &str) -> StepLookup {
        let mut found = false;
        for section in &self.sections {
            for step in &section.steps {
                if found {
                    return StepLookup::Next {
                        section_title: section.title.clone(),
                        step: step.clone(),
                    };
                }
                if step.id == step_id {
                    found = true;
                }
            }
        }
        if found {
            StepLookup::LastStep
        } else {
            StepLookup::NotFound
        }
    }

    /// Title of the section containing `step_id`, if any.
    pub fn section_title_of(&self, step_id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.steps.iter().any(|step| step.id == step_id))
            .map(|section| section.title.as_str())
    }
}
