//! Short-lived memory of recent submissions so a double click appends one row.
//!
//! A repeat that arrives while the first append is still running waits for it
//! and reports the same outcome.

use moka::future::Cache;
use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::sheets::SheetError;

/// `None` while the first append is running, then its result.
type PendingOutcome = watch::Receiver<Option<Result<(), String>>>;

/// What happened to a guarded submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// This request appended the row
    Recorded,
    /// An identical submission inside the window already appended it
    Duplicate,
    /// The append failed, either for this request or for the one it repeats
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SubmissionGuard {
    recent: Option<Cache<String, PendingOutcome>>,
}

impl SubmissionGuard {
    /// A zero window disables the guard.
    pub fn new(window: Duration, capacity: u64) -> Self {
        let recent = (!window.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(capacity)
                .time_to_live(window)
                .build()
        });
        Self { recent }
    }

    pub fn disabled() -> Self {
        Self { recent: None }
    }

    pub fn fingerprint(kind: &str, values: &[String]) -> String {
        let mut hasher = DefaultHasher::new();
        kind.hash(&mut hasher);
        for value in values {
            value.trim().to_lowercase().hash(&mut hasher);
        }
        format!("{}:{:016x}", kind, hasher.finish())
    }

    /// Run `append` unless an identical submission ran inside the window.
    ///
    /// A failed append is forgotten so the user can retry at once.
    pub async fn submit_once<F>(&self, fingerprint: &str, append: F) -> Outcome
    where
        F: Future<Output = Result<(), SheetError>>,
    {
        let Some(recent) = &self.recent else {
            return outcome_of(append.await);
        };

        loop {
            let (done, pending) = watch::channel(None);
            let entry = recent.entry(fingerprint.to_string()).or_insert(pending).await;

            if entry.is_fresh() {
                let result = append.await.map_err(|e| e.to_string());
                if result.is_err() {
                    recent.invalidate(fingerprint).await;
                }
                let _ = done.send(Some(result.clone()));
                return match result {
                    Ok(()) => Outcome::Recorded,
                    Err(reason) => Outcome::Failed(reason),
                };
            }

            debug!("Duplicate submission {}", fingerprint);
            let mut pending = entry.into_value();
            let settled = pending
                .wait_for(|outcome| outcome.is_some())
                .await
                .map(|outcome| outcome.clone());

            match settled {
                Ok(Some(Ok(()))) => return Outcome::Duplicate,
                Ok(Some(Err(reason))) => return Outcome::Failed(reason),
                _ => {
                    // The first request was dropped before it finished
                    warn!("Pending submission {} was abandoned, retrying", fingerprint);
                    recent.invalidate(fingerprint).await;
                }
            }
        }
    }
}

fn outcome_of(result: Result<(), SheetError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Recorded,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}
