#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;
    use utoipa::openapi::{PathItemType, RefOr, schema::Schema};

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{name} should be an object schema"),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        for name in [
            "ErrorResponse",
            "HealthResponse",
            "SubmissionResponse",
            "WaitlistRequest",
            "FeedbackRequest",
            "OnboardingRequest",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {name}");
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        assert!(properties.contains(&"error".to_string()));
        assert!(properties.contains(&"code".to_string()));
        assert!(properties.contains(&"success".to_string()));
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        assert_eq!(properties.len(), 3);
        assert!(properties.contains(&"status".to_string()));
        assert!(properties.contains(&"version".to_string()));
        assert!(properties.contains(&"sheets".to_string()));
    }

    #[test]
    fn test_submission_response_schema_structure() {
        let properties = object_properties("SubmissionResponse");
        for field in ["success", "message", "redirect", "errors"] {
            assert!(properties.contains(&field.to_string()), "missing field {field}");
        }
    }

    #[test]
    fn test_onboarding_request_uses_form_field_names() {
        let properties = object_properties("OnboardingRequest");
        assert!(properties.contains(&"firstName".to_string()));
        assert!(properties.contains(&"lastName".to_string()));
        assert!(!properties.contains(&"first_name".to_string()));
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();

        let health = openapi.paths.paths.get("/health").expect("/health path");
        assert!(health.operations.contains_key(&PathItemType::Get));

        for path in ["/api/v1/waitlist", "/api/v1/feedback", "/api/v1/onboarding"] {
            let item = openapi.paths.paths.get(path).expect(path);
            let post = item
                .operations
                .get(&PathItemType::Post)
                .unwrap_or_else(|| panic!("{path} should accept POST"));
            for status in ["200", "422", "502"] {
                assert!(post.responses.responses.contains_key(status), "{path} missing {status}");
            }
        }
    }

    #[test]
    fn test_submission_bodies_are_form_encoded() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(openapi_json.contains("application/x-www-form-urlencoded"));
        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
    }
}
