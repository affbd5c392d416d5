use common::{ErrorResponse, FeedbackRequest, OnboardingRequest, SubmissionResponse, WaitlistRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::Settings;
use crate::dedupe::SubmissionGuard;
use crate::sheets::SheetAppender;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Where submitted rows go
    pub sheets: Arc<dyn SheetAppender>,
    /// Recent submissions, for duplicate detection
    pub guard: SubmissionGuard,
    /// Loaded configuration
    pub settings: Arc<Settings>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Spreadsheet backend: "configured" or "log-only"
    pub sheets: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::submissions::submit_waitlist,
        crate::handlers::submissions::submit_feedback,
        crate::handlers::submissions::submit_onboarding,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            SubmissionResponse,
            WaitlistRequest,
            FeedbackRequest,
            OnboardingRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "submissions", description = "Waitlist, feedback and onboarding form submissions"),
    ),
    info(
        title = "CareLink API",
        description = "Form submission backend for the CareLink caregiver-matching site",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
