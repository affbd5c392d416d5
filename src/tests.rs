use crate::schemas::HealthResponse;
use crate::router::create_router;
use crate::test_utils::{
    RecordingSheet, setup_test_app, setup_test_app_state, setup_test_app_without_guard,
};
use axum::http::StatusCode;
use axum_test::TestServer;
use std::time::Duration;
use common::{ErrorResponse, FeedbackRequest, OnboardingRequest, SubmissionResponse, WaitlistRequest};

fn waitlist(email: &str) -> WaitlistRequest {
    WaitlistRequest {
        email: email.to_string(),
    }
}

fn onboarding() -> OnboardingRequest {
    OnboardingRequest {
        first_name: "Mei".to_string(),
        last_name: "Chen".to_string(),
        email: "mei.chen@example.com".to_string(),
        phone: "+61 400 123 456".to_string(),
        postcode: "2000".to_string(),
        role: "family".to_string(),
        message: Some("Looking for help for my father on weekdays".to_string()),
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new(setup_test_app(RecordingSheet::new())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.sheets, "configured");
}

#[tokio::test]
async fn test_waitlist_appends_one_row() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/waitlist")
        .form(&waitlist("someone@example.com"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: SubmissionResponse = response.json();
    assert!(body.success);
    assert_eq!(body.redirect.as_deref(), Some("/thank-you"));
    assert!(body.errors.is_none());

    let rows = sheet.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].range, "Waitlist!A:B");
    assert_eq!(rows[0].values.len(), 2);
    assert!(chrono::DateTime::parse_from_rfc3339(&rows[0].values[0]).is_ok());
    assert_eq!(rows[0].values[1], "someone@example.com");
}

#[tokio::test]
async fn test_waitlist_rejects_invalid_email_without_upstream_call() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/waitlist")
        .form(&waitlist("not-an-email"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: SubmissionResponse = response.json();
    assert!(!body.success);
    assert!(body.redirect.is_none());
    let errors = body.errors.expect("field errors expected");
    assert_eq!(errors["email"], vec!["Invalid email address".to_string()]);
    assert_eq!(sheet.append_calls(), 0);
}

#[tokio::test]
async fn test_empty_form_is_a_validation_error() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/waitlist")
        .form(&Vec::<(String, String)>::new())
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: SubmissionResponse = response.json();
    assert!(body.errors.unwrap().contains_key("email"));
    assert_eq!(sheet.append_calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_surfaces_error_text() {
    let sheet = RecordingSheet::unreachable("connection refused (os error 111)");
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/waitlist")
        .form(&waitlist("someone@example.com"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: SubmissionResponse = response.json();
    assert!(!body.success);
    assert!(body.message.starts_with("Something went wrong"));
    assert!(body.message.contains("connection refused (os error 111)"));
    assert!(body.redirect.is_none());
    assert_eq!(sheet.append_calls(), 1);
}

#[tokio::test]
async fn test_failed_submission_can_be_retried() {
    let sheet = RecordingSheet::unreachable("timeout");
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    for _ in 0..2 {
        server
            .post("/api/v1/waitlist")
            .form(&waitlist("someone@example.com"))
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }
    assert_eq!(sheet.append_calls(), 2);
}

#[tokio::test]
async fn test_repeat_during_failing_append_is_not_accepted() {
    let sheet = RecordingSheet::unreachable("down").slow(Duration::from_millis(300));
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let (first, second) = tokio::join!(
        async {
            server
                .post("/api/v1/waitlist")
                .form(&waitlist("someone@example.com"))
                .await
        },
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            server
                .post("/api/v1/waitlist")
                .form(&waitlist("someone@example.com"))
                .await
        }
    );

    for response in [first, second] {
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: SubmissionResponse = response.json();
        assert!(!body.success);
        assert!(body.redirect.is_none());
        assert!(body.message.contains("down"));
    }
    assert_eq!(sheet.append_calls(), 1);
}

#[tokio::test]
async fn test_repeat_during_successful_append_is_accepted_once() {
    let sheet = RecordingSheet::new().slow(Duration::from_millis(300));
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let (first, second) = tokio::join!(
        async { server.post("/api/v1/onboarding").form(&onboarding()).await },
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            server.post("/api/v1/onboarding").form(&onboarding()).await
        }
    );

    for response in [first, second] {
        response.assert_status(StatusCode::OK);
        let body: SubmissionResponse = response.json();
        assert_eq!(body.redirect.as_deref(), Some("/onboarding/success"));
    }
    assert_eq!(sheet.append_calls(), 1);
}

#[tokio::test]
async fn test_double_submit_appends_once() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    for _ in 0..2 {
        let response = server.post("/api/v1/onboarding").form(&onboarding()).await;
        response.assert_status(StatusCode::OK);
        let body: SubmissionResponse = response.json();
        assert!(body.success);
    }

    assert_eq!(sheet.append_calls(), 1);
}

#[tokio::test]
async fn test_distinct_submissions_are_all_appended() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        server
            .post("/api/v1/waitlist")
            .form(&waitlist(email))
            .await
            .assert_status(StatusCode::OK);
    }

    assert_eq!(sheet.append_calls(), 3);
}

#[tokio::test]
async fn test_without_guard_every_submit_appends() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app_without_guard(sheet.clone())).unwrap();

    for _ in 0..2 {
        server
            .post("/api/v1/waitlist")
            .form(&waitlist("someone@example.com"))
            .await
            .assert_status(StatusCode::OK);
    }

    assert_eq!(sheet.append_calls(), 2);
}

#[tokio::test]
async fn test_feedback_without_email() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/feedback")
        .form(&[("email", ""), ("feedback", "The demo was really clear")])
        .await;

    response.assert_status(StatusCode::OK);
    let rows = sheet.rows();
    assert_eq!(rows[0].range, "Feedback!A:C");
    assert_eq!(rows[0].values[1..], ["".to_string(), "The demo was really clear".to_string()]);
}

#[tokio::test]
async fn test_feedback_requires_text() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server
        .post("/api/v1/feedback")
        .form(&FeedbackRequest {
            email: Some("someone@example.com".to_string()),
            feedback: "  ".to_string(),
        })
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: SubmissionResponse = response.json();
    assert_eq!(
        body.errors.unwrap()["feedback"],
        vec!["Feedback is required".to_string()]
    );
    assert_eq!(sheet.append_calls(), 0);
}

#[tokio::test]
async fn test_onboarding_row_and_redirect() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let response = server.post("/api/v1/onboarding").form(&onboarding()).await;

    response.assert_status(StatusCode::OK);
    let body: SubmissionResponse = response.json();
    assert_eq!(body.redirect.as_deref(), Some("/onboarding/success"));

    let rows = sheet.rows();
    assert_eq!(rows[0].range, "Onboarding!A:H");
    assert_eq!(rows[0].values.len(), 8);
    assert_eq!(rows[0].values[1..4], ["Mei", "Chen", "mei.chen@example.com"]);
    assert_eq!(rows[0].values[6], "family");
}

#[tokio::test]
async fn test_onboarding_field_errors() {
    let sheet = RecordingSheet::new();
    let server = TestServer::new(setup_test_app(sheet.clone())).unwrap();

    let request = OnboardingRequest {
        phone: "123".to_string(),
        postcode: "ABCD".to_string(),
        role: "".to_string(),
        ..onboarding()
    };
    let response = server.post("/api/v1/onboarding").form(&request).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.json::<SubmissionResponse>().errors.unwrap();
    assert_eq!(errors["phone"], vec!["Invalid phone number".to_string()]);
    assert_eq!(errors["postcode"], vec!["Postcode must be four digits".to_string()]);
    assert!(errors.contains_key("role"));
    assert!(!errors.contains_key("email"));
    assert_eq!(sheet.append_calls(), 0);
}

#[tokio::test]
async fn test_unknown_api_route() {
    let server = TestServer::new(setup_test_app(RecordingSheet::new())).unwrap();

    let response = server.get("/api/v1/bookings").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "NOT_FOUND");
    assert!(!body.success);
}

/// Log sink shared with the subscriber installed by a test.
#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_submitter_email_stays_out_of_logs() {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let server = TestServer::new(create_router(setup_test_app_state(RecordingSheet::new()))).unwrap();
    server
        .post("/api/v1/waitlist")
        .form(&waitlist("private.person@example.com"))
        .await
        .assert_status(StatusCode::OK);
    server
        .post("/api/v1/feedback")
        .form(&FeedbackRequest {
            email: Some("private.person@example.com".to_string()),
            feedback: "Great idea".to_string(),
        })
        .await
        .assert_status(StatusCode::OK);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("submit_waitlist"));
    assert!(!output.contains("private.person@example.com"));
}
