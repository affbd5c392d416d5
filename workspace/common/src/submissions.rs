use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::validation::{invalid, validate_not_blank, validate_phone, validate_postcode};

/// Waitlist sign-up from the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, PartialEq, Default)]
#[serde(default)]
pub struct WaitlistRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl WaitlistRequest {
    pub fn row_values(&self) -> Vec<String> {
        vec![self.email.trim().to_string()]
    }
}

/// Free-form product feedback, the email is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, PartialEq, Default)]
#[serde(default)]
pub struct FeedbackRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(
        length(max = 2000, message = "Feedback must be at most 2000 characters"),
        custom(function = "validate_feedback")
    )]
    pub feedback: String,
}

impl FeedbackRequest {
    pub fn row_values(&self) -> Vec<String> {
        vec![
            self.email.clone().unwrap_or_default(),
            self.feedback.trim().to_string(),
        ]
    }
}

fn validate_feedback(feedback: &str) -> Result<(), ValidationError> {
    if feedback.trim().is_empty() {
        Err(invalid("required", "Feedback is required"))
    } else {
        Ok(())
    }
}

/// Who is signing up through the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Family,
    Carer,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "family" => Some(Role::Family),
            "carer" => Some(Role::Carer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Family => "family",
            Role::Carer => "carer",
        }
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    Role::parse(role)
        .map(|_| ())
        .ok_or_else(|| invalid("role", "Choose whether you are a family or a carer"))
}

/// Contact details collected by the onboarding funnel.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingRequest {
    #[validate(
        length(max = 100, message = "First name is too long"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(max = 100, message = "Last name is too long"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_postcode"))]
    pub postcode: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

impl OnboardingRequest {
    pub fn row_values(&self) -> Vec<String> {
        vec![
            self.first_name.trim().to_string(),
            self.last_name.trim().to_string(),
            self.email.trim().to_string(),
            self.phone.trim().to_string(),
            self.postcode.trim().to_string(),
            Role::parse(&self.role)
                .map(|role| role.as_str().to_string())
                .unwrap_or_else(|| self.role.clone()),
            self.message.clone().unwrap_or_default(),
        ]
    }
}

/// HTML forms post optional inputs as empty strings.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
