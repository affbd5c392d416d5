use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::dedupe::SubmissionGuard;
use crate::schemas::AppState;
use crate::sheets::{GoogleSheetsClient, LoggingSheet, SheetAppender};

/// Application settings.
///
/// Layered as: built-in defaults, `config/default.toml` when present, an
/// explicit `--config` file, then `CARELINK__SECTION__KEY` environment
/// variables (after `.env` has been loaded).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub sheets: SheetsSettings,
    pub submissions: SubmissionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Format: IP:PORT
    pub bind_address: String,
    /// Built frontend (`trunk build` output) served for every non-API route
    pub static_dir: Option<PathBuf>,
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_dir: None,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsSettings {
    pub base_url: String,
    /// Without an id rows are only logged
    pub spreadsheet_id: Option<String>,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub waitlist_range: String,
    pub feedback_range: String,
    pub onboarding_range: String,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id: None,
            access_token: None,
            timeout_secs: 10,
            waitlist_range: "Waitlist!A:B".to_string(),
            feedback_range: "Feedback!A:C".to_string(),
            onboarding_range: "Onboarding!A:H".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
    /// Identical submissions inside this window are appended once; 0 disables
    pub dedupe_window_secs: u64,
    pub dedupe_capacity: u64,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            dedupe_window_secs: 10,
            dedupe_capacity: 10_000,
        }
    }
}

/// Load settings from files and environment
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));
    if let Some(path) = config_path {
        debug!("Reading configuration file: {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    let settings: Settings = builder
        .add_source(
            Environment::with_prefix("CARELINK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    debug!("Loaded settings: {:?}", settings.redacted());
    Ok(settings)
}

impl Settings {
    /// Copy safe to log
    pub fn redacted(&self) -> Settings {
        let mut copy = self.clone();
        if copy.sheets.access_token.is_some() {
            copy.sheets.access_token = Some("***".to_string());
        }
        copy
    }
}

/// Build the spreadsheet client described by the settings
pub fn build_sheet_appender(settings: &SheetsSettings) -> Result<Arc<dyn SheetAppender>> {
    let access_token = non_blank(&settings.access_token);
    match non_blank(&settings.spreadsheet_id) {
        Some(spreadsheet_id) => {
            info!("Forwarding submissions to spreadsheet {}", spreadsheet_id);
            if access_token.is_none() {
                warn!("No spreadsheet access token configured, appends will be unauthenticated");
            }
            let client = GoogleSheetsClient::new(
                &settings.base_url,
                &spreadsheet_id,
                access_token,
                Duration::from_secs(settings.timeout_secs),
            )?;
            Ok(Arc::new(client))
        }
        None => {
            warn!("No spreadsheet configured, submissions will only be logged");
            Ok(Arc::new(LoggingSheet))
        }
    }
}

/// Empty environment variables count as unset
fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Initialize application state
pub fn initialize_app_state(settings: Settings) -> Result<AppState> {
    let sheets = build_sheet_appender(&settings.sheets)?;
    let guard = SubmissionGuard::new(
        Duration::from_secs(settings.submissions.dedupe_window_secs),
        settings.submissions.dedupe_capacity,
    );

    Ok(AppState {
        sheets,
        guard,
        settings: Arc::new(settings),
    })
}
