use crate::config::Settings;
use crate::dedupe::SubmissionGuard;
use crate::router::create_router;
use crate::schemas::AppState;
use crate::sheets::{SheetAppender, SheetError};
use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Row appended through [`RecordingSheet`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRow {
    pub range: String,
    pub values: Vec<String>,
}

/// Spreadsheet double that records every append, optionally failing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSheet {
    rows: Arc<Mutex<Vec<RecordedRow>>>,
    fail_with: Option<String>,
    delay: Duration,
}

impl RecordingSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every append fails as if the API were unreachable
    pub fn unreachable(reason: &str) -> Self {
        Self {
            rows: Arc::default(),
            fail_with: Some(reason.to_string()),
            delay: Duration::ZERO,
        }
    }

    /// Every append takes `delay` before it is recorded
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn rows(&self) -> Vec<RecordedRow> {
        self.rows.lock().expect("rows lock poisoned").clone()
    }

    pub fn append_calls(&self) -> usize {
        self.rows.lock().expect("rows lock poisoned").len()
    }
}

#[async_trait]
impl SheetAppender for RecordingSheet {
    async fn append_row(&self, range: &str, values: Vec<String>) -> Result<(), SheetError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.rows.lock().expect("rows lock poisoned").push(RecordedRow {
            range: range.to_string(),
            values,
        });
        match &self.fail_with {
            Some(reason) => Err(SheetError::Upstream {
                status: 503,
                body: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Create AppState for testing
pub fn setup_test_app_state(sheet: RecordingSheet) -> AppState {
    let settings = Settings::default();
    AppState {
        sheets: Arc::new(sheet),
        guard: SubmissionGuard::new(
            Duration::from_secs(settings.submissions.dedupe_window_secs),
            settings.submissions.dedupe_capacity,
        ),
        settings: Arc::new(settings),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG and defaults to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing, backed by `sheet`
pub fn setup_test_app(sheet: RecordingSheet) -> Router {
    let _ = init_test_tracing();
    create_router(setup_test_app_state(sheet))
}

/// App with the duplicate guard switched off
pub fn setup_test_app_without_guard(sheet: RecordingSheet) -> Router {
    let _ = init_test_tracing();
    let state = AppState {
        guard: SubmissionGuard::disabled(),
        ..setup_test_app_state(sheet)
    };
    create_router(state)
}
