//! Spreadsheet backend the submission forms append rows to.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Error types for spreadsheet appends
#[derive(Error, Debug)]
pub enum SheetError {
    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("Spreadsheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Spreadsheet API answered with a non-success status
    #[error("Spreadsheet API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Client could not be built from the configuration
    #[error("Invalid spreadsheet configuration: {0}")]
    Config(String),
}

/// Appends rows to a named range of a spreadsheet.
#[async_trait]
pub trait SheetAppender: Send + Sync + fmt::Debug {
    async fn append_row(&self, range: &str, values: Vec<String>) -> Result<(), SheetError>;

    /// Whether rows reach a real spreadsheet
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Serialize)]
struct AppendBody<'a> {
    values: [&'a [String]; 1],
}

/// Google Sheets `values:append` client.
#[derive(Clone)]
pub struct GoogleSheetsClient {
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: Option<String>,
}

impl fmt::Debug for GoogleSheetsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSheetsClient")
            .field("base_url", &self.base_url.as_str())
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

impl GoogleSheetsClient {
    pub fn new(
        base_url: &str,
        spreadsheet_id: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SheetError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SheetError::Config(format!("base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SheetError::Config(format!("base url '{}' cannot be a base", base_url)));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token,
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append`
    pub fn append_url(&self, range: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values"])
                .push(&format!("{}:append", range));
        }
        url
    }
}

#[async_trait]
impl SheetAppender for GoogleSheetsClient {
    #[instrument(skip(self, values), fields(columns = values.len()))]
    async fn append_row(&self, range: &str, values: Vec<String>) -> Result<(), SheetError> {
        let url = self.append_url(range);
        debug!("Appending row to {}", url);

        let mut request = self
            .client
            .post(url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&AppendBody { values: [values.as_slice()] });
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Spreadsheet request to range '{}' failed: {}", range, e);
            SheetError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Spreadsheet API returned {} for range '{}': {}", status, range, body);
            return Err(SheetError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!("Row appended to range '{}'", range);
        Ok(())
    }
}

/// Stand-in used when no spreadsheet is configured: rows are written to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSheet;

#[async_trait]
impl SheetAppender for LoggingSheet {
    async fn append_row(&self, range: &str, values: Vec<String>) -> Result<(), SheetError> {
        info!(range, ?values, "Spreadsheet not configured, logging row");
        Ok(())
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GoogleSheetsClient {
        GoogleSheetsClient::new(base, "sheet-123", None, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_append_url_encodes_range() {
        let url = client("https://sheets.googleapis.com").append_url("Waitlist!A:B");
        assert_eq!(
            url.path(),
            "/v4/spreadsheets/sheet-123/values/Waitlist!A:B:append"
        );
    }

    #[test]
    fn test_append_url_keeps_base_path() {
        let url = client("http://localhost:9000/proxy/").append_url("Feedback Form!A:C");
        assert_eq!(
            url.path(),
            "/proxy/v4/spreadsheets/sheet-123/values/Feedback%20Form!A:C:append"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_config_error() {
        let err = GoogleSheetsClient::new("not a url", "id", None, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, SheetError::Config(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = GoogleSheetsClient::new(
            "https://sheets.googleapis.com",
            "id",
            Some("secret".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(!format!("{:?}", client).contains("secret"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_http_error() {
        // Port 9 (discard) is closed on test machines
        let client = client("http://127.0.0.1:9");
        let err = client
            .append_row("Waitlist!A:B", vec!["a@example.com".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, SheetError::Http(_)));
    }
}
