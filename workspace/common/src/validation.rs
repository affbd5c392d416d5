//! Flattening of `validator` errors into per-field messages plus the custom
//! rules shared by the submission forms and the profile wizard.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field name to the messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten nested validation errors.
///
/// Nested structs are reported as `parent.field`, list entries as
/// `parent[index].field` and struct-level checks under the parent's name.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect(errors, None, &mut out);
    out
}

/// `value` back when it passes its rules, its flattened field errors otherwise.
pub fn validated<T: Validate>(value: T) -> Result<T, FieldErrors> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(errors) => Err(field_errors(&errors)),
    }
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = match (prefix, field.as_str()) {
            (Some(prefix), "__all__") => prefix.to_string(),
            (None, "__all__") => "form".to_string(),
            (Some(prefix), _) => format!("{}.{}", prefix, field),
            (None, _) => field,
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(path).or_default();
                messages.extend(list.iter().map(message_of));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", error.code),
    }
}

/// Build a validation error carrying a display message.
pub fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Australian postcodes are exactly four digits.
pub fn validate_postcode(postcode: &str) -> Result<(), ValidationError> {
    let postcode = postcode.trim();
    if postcode.len() == 4 && postcode.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("postcode", "Postcode must be four digits"))
    }
}

/// 8 to 20 characters made of digits, spaces and a leading `+`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = phone
        .char_indices()
        .all(|(i, c)| c.is_ascii_digit() || c == ' ' || (c == '+' && i == 0));

    if well_formed && (8..=20).contains(&phone.len()) && digits >= 8 {
        Ok(())
    } else {
        Err(invalid("phone", "Invalid phone number"))
    }
}

/// Rejects strings that are empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("required", "This field is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postcode_rules() {
        assert!(validate_postcode("2000").is_ok());
        assert!(validate_postcode(" 3121 ").is_ok());
        assert!(validate_postcode("200").is_err());
        assert!(validate_postcode("20a0").is_err());
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("+61 400 123 456").is_ok());
        assert!(validate_phone("0400123456").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("0400-123-456").is_err());
        assert!(validate_phone("04+00123456").is_err());
    }

    #[test]
    fn test_custom_errors_carry_messages() {
        let error = validate_not_blank("   ").unwrap_err();
        assert_eq!(message_of(&error), "This field is required");
    }

    #[test]
    fn test_validated_returns_value_or_flat_errors() {
        let ok = validated(crate::WaitlistRequest {
            email: "someone@example.com".to_string(),
        });
        assert!(ok.is_ok());

        let errors = validated(crate::WaitlistRequest {
            email: "not-an-email".to_string(),
        })
        .unwrap_err();
        assert_eq!(errors["email"], vec!["Invalid email address".to_string()]);
    }
}
