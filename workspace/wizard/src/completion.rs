use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::storage::{KeyValueStorage, StorageError, read_json, write_json};

/// Storage key of the shared completion map.
pub const COMPLETION_KEY: &str = "profile-building-completion";

/// Step id to "completed" flag. Absent steps are not completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionStatus(BTreeMap<String, bool>);

impl CompletionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self, step_id: &str) -> bool {
        self.0.get(step_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, step_id: impl Into<String>, completed: bool) {
        self.0.insert(step_id.into(), completed);
    }

    pub fn get(&self, step_id: &str) -> Option<bool> {
        self.0.get(step_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for CompletionStatus {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Completion map persisted under [`COMPLETION_KEY`].
///
/// Saving is a read-modify-write of the whole map, so within one store the
/// flags of other steps survive every save.
#[derive(Debug, Clone)]
pub struct CompletionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CompletionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current map, empty when the entry is missing or unreadable.
    pub fn get_completion_status(&self) -> CompletionStatus {
        read_json(&self.storage, COMPLETION_KEY).unwrap_or_default()
    }

    #[instrument(skip(self))]
    pub fn save_completion_status(
        &self,
        step_id: &str,
        completed: bool,
    ) -> Result<CompletionStatus, StorageError> {
        let mut status = self.get_completion_status();
        status.set(step_id, completed);
        write_json(&self.storage, COMPLETION_KEY, &status)?;
        debug!("Step '{}' marked completed={}", step_id, completed);
        Ok(status)
    }

    pub fn is_step_complete(&self, step_id: &str) -> bool {
        self.get_completion_status().is_complete(step_id)
    }
}
