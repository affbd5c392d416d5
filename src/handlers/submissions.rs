use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Json,
};
use chrono::{SecondsFormat, Utc};
use common::{
    FeedbackRequest, OnboardingRequest, SubmissionResponse, WaitlistRequest, field_errors,
};
use tracing::{debug, error, info, instrument, trace, warn};
use validator::Validate;

use crate::dedupe::{Outcome, SubmissionGuard};
use crate::schemas::AppState;

type SubmissionResult = (StatusCode, Json<SubmissionResponse>);

/// Redirect target after waitlist and feedback submissions
pub const THANK_YOU_ROUTE: &str = "/thank-you";
/// Redirect target after onboarding
pub const ONBOARDING_SUCCESS_ROUTE: &str = "/onboarding/success";

/// Join the waitlist
#[utoipa::path(
    post,
    path = "/api/v1/waitlist",
    tag = "submissions",
    request_body(content = WaitlistRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Email added to the waitlist", body = SubmissionResponse),
        (status = 422, description = "Invalid fields", body = SubmissionResponse),
        (status = 502, description = "Spreadsheet backend failed", body = SubmissionResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn submit_waitlist(
    State(state): State<AppState>,
    Form(request): Form<WaitlistRequest>,
) -> SubmissionResult {
    trace!("Entering submit_waitlist function");
    if let Err(response) = check(&request) {
        return response;
    }

    let range = state.settings.sheets.waitlist_range.clone();
    forward(
        &state,
        "waitlist",
        &range,
        request.row_values(),
        SubmissionResponse::accepted("You're on the list! We'll be in touch soon.", THANK_YOU_ROUTE),
    )
    .await
}

/// Send product feedback
#[utoipa::path(
    post,
    path = "/api/v1/feedback",
    tag = "submissions",
    request_body(content = FeedbackRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Feedback recorded", body = SubmissionResponse),
        (status = 422, description = "Invalid fields", body = SubmissionResponse),
        (status = 502, description = "Spreadsheet backend failed", body = SubmissionResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Form(request): Form<FeedbackRequest>,
) -> SubmissionResult {
    trace!("Entering submit_feedback function");
    if let Err(response) = check(&request) {
        return response;
    }

    let range = state.settings.sheets.feedback_range.clone();
    forward(
        &state,
        "feedback",
        &range,
        request.row_values(),
        SubmissionResponse::accepted("Thank you for your feedback!", THANK_YOU_ROUTE),
    )
    .await
}

/// Start onboarding as a family or a carer
#[utoipa::path(
    post,
    path = "/api/v1/onboarding",
    tag = "submissions",
    request_body(content = OnboardingRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Onboarding request recorded", body = SubmissionResponse),
        (status = 422, description = "Invalid fields", body = SubmissionResponse),
        (status = 502, description = "Spreadsheet backend failed", body = SubmissionResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn submit_onboarding(
    State(state): State<AppState>,
    Form(request): Form<OnboardingRequest>,
) -> SubmissionResult {
    trace!("Entering submit_onboarding function");
    if let Err(response) = check(&request) {
        return response;
    }

    let range = state.settings.sheets.onboarding_range.clone();
    forward(
        &state,
        "onboarding",
        &range,
        request.row_values(),
        SubmissionResponse::accepted(
            "Thanks! Our care team will contact you within one business day.",
            ONBOARDING_SUCCESS_ROUTE,
        ),
    )
    .await
}

fn check<T: Validate>(request: &T) -> Result<(), SubmissionResult> {
    request.validate().map_err(|errors| {
        let errors = field_errors(&errors);
        debug!("Rejecting submission with invalid fields: {:?}", errors.keys().collect::<Vec<_>>());
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionResponse::invalid(errors)),
        )
    })
}

/// Append one timestamped row, at most once per duplicate window.
async fn forward(
    state: &AppState,
    kind: &'static str,
    range: &str,
    values: Vec<String>,
    accepted: SubmissionResponse,
) -> SubmissionResult {
    let fingerprint = SubmissionGuard::fingerprint(kind, &values);

    let mut row = Vec::with_capacity(values.len() + 1);
    row.push(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    row.extend(values);

    let append = state.sheets.append_row(range, row);
    match state.guard.submit_once(&fingerprint, append).await {
        Outcome::Recorded => {
            info!("Recorded {} submission", kind);
            (StatusCode::OK, Json(accepted))
        }
        Outcome::Duplicate => {
            warn!("Ignoring duplicate {} submission", kind);
            (StatusCode::OK, Json(accepted))
        }
        Outcome::Failed(reason) => {
            error!("Failed to record {} submission: {}", kind, reason);
            (StatusCode::BAD_GATEWAY, Json(SubmissionResponse::failed(reason)))
        }
    }
}
