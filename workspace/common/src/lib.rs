//! Common transport-layer types shared between backend and frontend.
//! The submission requests carry their validation rules so the frontend can
//! reject a form before any network call and the backend re-checks the same
//! rules on arrival.

mod submissions;
pub mod validation;

pub use submissions::{FeedbackRequest, OnboardingRequest, Role, WaitlistRequest};
pub use validation::{FieldErrors, field_errors, validated};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct SubmissionResponse {
    /// Whether the row reached the spreadsheet
    pub success: bool,
    /// Human readable message shown next to the form
    pub message: String,
    /// Where the browser should go after a successful submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Field name to validation messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl SubmissionResponse {
    pub fn accepted(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect: Some(redirect.into()),
            errors: None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: "Please correct the highlighted fields".to_string(),
            redirect: None,
            errors: Some(errors),
        }
    }

    /// Upstream failure, the underlying error text is appended for diagnostics.
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Something went wrong. Please try again later. Error: {}", error),
            redirect: None,
            errors: None,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_response_carries_error_text() {
        let response = SubmissionResponse::failed("connection refused");
        assert!(!response.success);
        assert!(response.message.contains("connection refused"));
        assert!(response.redirect.is_none());
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let response = SubmissionResponse::accepted("Thanks", "/thank-you");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["redirect"], "/thank-you");
        assert!(json.get("errors").is_none());
    }
}
