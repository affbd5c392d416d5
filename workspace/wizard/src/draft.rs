use common::{FieldErrors, field_errors};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::completion::{CompletionStatus, CompletionStore};
use crate::forms::StepForm;
use crate::steps::{self, SidebarEntry};
use crate::storage::{KeyValueStorage, StorageError, read_json, write_json};

/// Storage key of the draft revision counter.
pub const REVISION_KEY: &str = "profile-building-revision";

/// Error types for wizard submissions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    /// The form failed its own rules; nothing was written
    #[error("Step '{step}' has {} invalid field(s)", .errors.len())]
    Validation {
        step: &'static str,
        errors: FieldErrors,
    },

    /// Another window saved the draft after this one loaded it
    #[error("Profile draft was changed elsewhere (loaded revision {expected}, found {found})")]
    StaleDraft { expected: u64, found: u64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a successful step submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step_id: &'static str,
    /// Route the page should navigate to
    pub next_route: String,
    /// Draft revision after this write
    pub revision: u64,
    /// Every registered step is now completed
    pub profile_complete: bool,
}

/// Owner of one carer's profile draft.
///
/// The controller remembers the draft revision it was opened at. A submission
/// only goes through while the stored revision still matches, so a save made
/// from another tab is never silently overwritten; call [`refresh`] to adopt
/// the newer draft and retry.
///
/// [`refresh`]: ProfileWizard::refresh
#[derive(Debug, Clone)]
pub struct ProfileWizard<S> {
    storage: S,
    completion: CompletionStore<S>,
    revision: u64,
}

impl<S: KeyValueStorage + Clone> ProfileWizard<S> {
    pub fn open(storage: S) -> Self {
        let revision = stored_revision(&storage);
        debug!("Opened profile draft at revision {}", revision);
        Self {
            completion: CompletionStore::new(storage.clone()),
            storage,
            revision,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adopt whatever is currently stored.
    pub fn refresh(&mut self) -> u64 {
        self.revision = stored_revision(&self.storage);
        self.revision
    }

    /// Saved form of a step, or its default when nothing usable is stored.
    pub fn load_step<F: StepForm>(&self) -> F {
        read_json(&self.storage, &F::storage_key()).unwrap_or_default()
    }

    #[instrument(skip(self, form), fields(step = F::STEP_ID))]
    pub fn submit_step<F: StepForm>(&mut self, form: &F) -> Result<StepOutcome, WizardError> {
        if let Err(errors) = form.validate() {
            let errors = field_errors(&errors);
            debug!("Submission blocked, {} invalid field(s)", errors.len());
            return Err(WizardError::Validation {
                step: F::STEP_ID,
                errors,
            });
        }

        let found = stored_revision(&self.storage);
        if found != self.revision {
            warn!(
                "Refusing to overwrite draft: loaded revision {}, stored revision {}",
                self.revision, found
            );
            return Err(WizardError::StaleDraft {
                expected: self.revision,
                found,
            });
        }

        // Revision first: a write that fails halfway still makes other tabs stale
        let revision = found + 1;
        write_json(&self.storage, REVISION_KEY, &revision)?;
        self.revision = revision;

        write_json(&self.storage, &F::storage_key(), form)?;
        let status = self.completion.save_completion_status(F::STEP_ID, true)?;

        let outcome = StepOutcome {
            step_id: F::STEP_ID,
            next_route: steps::next_route(F::STEP_ID),
            revision,
            profile_complete: steps::first_incomplete(&status).is_none(),
        };
        info!(
            "Step '{}' saved at revision {}, continuing to {}",
            F::STEP_ID, revision, outcome.next_route
        );
        Ok(outcome)
    }

    pub fn completion(&self) -> CompletionStatus {
        self.completion.get_completion_status()
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        steps::sidebar(&self.completion())
    }

    pub fn progress(&self) -> u8 {
        steps::progress(&self.completion())
    }

    pub fn is_profile_complete(&self) -> bool {
        steps::first_incomplete(&self.completion()).is_none()
    }

    /// Saved forms with their step ids, in wizard order, for the preview page.
    pub fn preview(&self) -> Vec<(&'static str, Value)> {
        steps::steps()
            .iter()
            .filter_map(|step| {
                read_json::<_, Value>(&self.storage, &step.storage_key())
                    .map(|value| (step.id, value))
            })
            .collect()
    }
}

fn stored_revision<S: KeyValueStorage>(storage: &S) -> u64 {
    read_json(storage, REVISION_KEY).unwrap_or(0)
}
