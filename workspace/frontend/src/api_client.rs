use common::{FeedbackRequest, OnboardingRequest, SubmissionResponse, WaitlistRequest};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use web_sys::UrlSearchParams;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Flatten a request into form fields; `None` fields are left out.
fn form_fields<B: Serialize>(body: &B) -> Result<Vec<(String, String)>, String> {
    let value = serde_json::to_value(body).map_err(|e| format!("Failed to serialize request: {}", e))?;
    let Value::Object(map) = value else {
        return Err("Request must serialize to an object".to_string());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

/// POST a form-encoded body and read the submission outcome.
///
/// Validation and upstream failures still carry a [`SubmissionResponse`];
/// `Err` is only returned when no such body could be read.
pub async fn post_form<B: Serialize>(endpoint: &str, body: &B) -> Result<SubmissionResponse, String> {
    let url = api_url(endpoint);
    log::debug!("POST form to: {}", url);

    let params = UrlSearchParams::new().map_err(|_| "Failed to build form body".to_string())?;
    for (key, value) in form_fields(body)? {
        params.append(&key, &value);
    }

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
        .body(params)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    let status = response.status();
    log::trace!("POST {} - Response {} received, parsing JSON", endpoint, status);
    let submission: SubmissionResponse = response.json().await.map_err(|e| {
        let error_msg = format!("HTTP error: {} ({})", status, e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if submission.success {
        log::info!("POST {} - Success", endpoint);
    } else {
        log::warn!("POST {} - Rejected with {}: {}", endpoint, status, submission.message);
    }
    Ok(submission)
}

pub async fn join_waitlist(request: &WaitlistRequest) -> Result<SubmissionResponse, String> {
    post_form("/waitlist", request).await
}

pub async fn send_feedback(request: &FeedbackRequest) -> Result<SubmissionResponse, String> {
    post_form("/feedback", request).await
}

pub async fn start_onboarding(request: &OnboardingRequest) -> Result<SubmissionResponse, String> {
    post_form("/onboarding", request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_skip_missing_optionals() {
        let request = FeedbackRequest {
            email: None,
            feedback: "Great".to_string(),
        };
        let fields = form_fields(&request).unwrap();
        assert_eq!(fields, vec![("feedback".to_string(), "Great".to_string())]);
    }

    #[test]
    fn test_form_fields_use_wire_names() {
        let request = OnboardingRequest {
            first_name: "Mei".to_string(),
            ..OnboardingRequest::default()
        };
        let fields = form_fields(&request).unwrap();
        assert!(fields.contains(&("firstName".to_string(), "Mei".to_string())));
    }
}
