//! Ordered registry of wizard steps.
//!
//! Navigation, the sidebar and progress all derive from [`STEPS`]; pages never
//! hard-code their neighbours.

use crate::completion::CompletionStatus;

/// Route prefix shared by every step page.
pub const WIZARD_BASE_ROUTE: &str = "/profile-building";

/// Where the wizard goes after the last step.
pub const PREVIEW_ROUTE: &str = "/profile-building/preview";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    /// Identifier used in routes, storage keys and the completion map
    pub id: &'static str,
    /// Sidebar label
    pub label: &'static str,
}

impl StepDescriptor {
    pub fn route(&self) -> String {
        format!("{}/{}", WIZARD_BASE_ROUTE, self.id)
    }

    pub fn storage_key(&self) -> String {
        format!("{}-form", self.id)
    }
}

pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor { id: "services", label: "Services" },
    StepDescriptor { id: "rates", label: "Rates" },
    StepDescriptor { id: "availability", label: "Availability" },
    StepDescriptor { id: "locations", label: "Locations" },
    StepDescriptor { id: "languages", label: "Languages" },
    StepDescriptor { id: "cultural-background", label: "Cultural background" },
    StepDescriptor { id: "about-me", label: "About me" },
    StepDescriptor { id: "work-history", label: "Work history" },
    StepDescriptor { id: "education", label: "Education" },
    StepDescriptor { id: "certifications", label: "Certifications" },
    StepDescriptor { id: "interests", label: "Interests" },
    StepDescriptor { id: "preferences", label: "Care preferences" },
];

/// One row of the step navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub route: String,
    pub completed: bool,
}

pub fn steps() -> &'static [StepDescriptor] {
    STEPS
}

pub fn find(step_id: &str) -> Option<&'static StepDescriptor> {
    STEPS.iter().find(|step| step.id == step_id)
}

pub fn position(step_id: &str) -> Option<usize> {
    STEPS.iter().position(|step| step.id == step_id)
}

pub fn next(step_id: &str) -> Option<&'static StepDescriptor> {
    position(step_id).and_then(|i| STEPS.get(i + 1))
}

pub fn previous(step_id: &str) -> Option<&'static StepDescriptor> {
    position(step_id)
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| STEPS.get(i))
}

/// Route to visit after submitting `step_id`; the preview once the list runs out.
pub fn next_route(step_id: &str) -> String {
    next(step_id)
        .map(StepDescriptor::route)
        .unwrap_or_else(|| PREVIEW_ROUTE.to_string())
}

pub fn sidebar(status: &CompletionStatus) -> Vec<SidebarEntry> {
    STEPS
        .iter()
        .map(|step| SidebarEntry {
            id: step.id,
            label: step.label,
            route: step.route(),
            completed: status.is_complete(step.id),
        })
        .collect()
}

/// Completed registry steps as a whole percentage. Unknown keys don't count.
pub fn progress(status: &CompletionStatus) -> u8 {
    let done = STEPS.iter().filter(|step| status.is_complete(step.id)).count();
    ((done * 100) / STEPS.len()) as u8
}

pub fn first_incomplete(status: &CompletionStatus) -> Option<&'static StepDescriptor> {
    STEPS.iter().find(|step| !status.is_complete(step.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(position(step.id), Some(i), "duplicate step id {}", step.id);
        }
    }

    #[test]
    fn test_languages_leads_to_cultural_background() {
        assert_eq!(next_route("languages"), "/profile-building/cultural-background");
        assert_eq!(previous("cultural-background").map(|s| s.id), Some("languages"));
    }

    #[test]
    fn test_edges_of_the_sequence() {
        assert_eq!(previous("services"), None);
        assert_eq!(next("preferences"), None);
        assert_eq!(next_route("preferences"), PREVIEW_ROUTE);
        assert_eq!(next_route("no-such-step"), PREVIEW_ROUTE);
    }

    #[test]
    fn test_sidebar_reflects_completion() {
        let status: CompletionStatus = [("rates", true), ("languages", false)].into_iter().collect();
        let entries = sidebar(&status);

        assert_eq!(entries.len(), STEPS.len());
        let rates = entries.iter().find(|e| e.id == "rates").unwrap();
        assert!(rates.completed);
        assert_eq!(rates.route, "/profile-building/rates");
        assert!(!entries.iter().find(|e| e.id == "languages").unwrap().completed);
    }

    #[test]
    fn test_progress_and_first_incomplete() {
        let mut status = CompletionStatus::new();
        assert_eq!(progress(&status), 0);
        assert_eq!(first_incomplete(&status).map(|s| s.id), Some("services"));

        status.set("services", true);
        status.set("rates", true);
        status.set("retired-step", true);
        assert_eq!(progress(&status), 16);
        assert_eq!(first_incomplete(&status).map(|s| s.id), Some("availability"));

        for step in STEPS {
            status.set(step.id, true);
        }
        assert_eq!(progress(&status), 100);
        assert_eq!(first_incomplete(&status), None);
    }
}
