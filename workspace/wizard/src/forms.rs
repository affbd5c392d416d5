//! Typed form for every wizard step.
//!
//! Forms are stored as camelCase JSON under `<step-id>-form`. Every field has a
//! default so an older, partially filled entry still loads.

use common::validation::{invalid, validate_not_blank, validate_postcode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use validator::{Validate, ValidationError};

/// A form owned by exactly one wizard step.
pub trait StepForm: Serialize + DeserializeOwned + Validate + Default + Clone {
    /// Id of the step in the registry
    const STEP_ID: &'static str;

    fn storage_key() -> String {
        format!("{}-form", Self::STEP_ID)
    }
}

pub const SERVICE_OPTIONS: &[&str] = &[
    "Personal care",
    "Companionship",
    "Domestic assistance",
    "Meal preparation",
    "Transport",
    "Dementia care",
    "Respite care",
    "Overnight care",
];

pub const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const TIME_SLOTS: &[&str] = &["morning", "afternoon", "evening", "overnight"];

pub const LANGUAGE_OPTIONS: &[&str] = &[
    "English",
    "Mandarin",
    "Cantonese",
    "Vietnamese",
    "Arabic",
    "Greek",
    "Italian",
    "Hindi",
    "Korean",
    "Spanish",
];

pub const BACKGROUND_OPTIONS: &[&str] = &[
    "Australian",
    "Chinese",
    "Vietnamese",
    "Indian",
    "Greek",
    "Italian",
    "Middle Eastern",
    "Aboriginal and Torres Strait Islander",
];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Cooking",
    "Gardening",
    "Music",
    "Reading",
    "Walking",
    "Crafts",
    "Sport",
    "Board games",
];

pub const CLIENT_TYPES: &[&str] = &[
    "Older adults",
    "People with disability",
    "Post-hospital recovery",
    "Palliative care",
];

pub const GENDER_PREFERENCES: &[&str] = &["any", "female", "male"];

#[allow(clippy::ptr_arg)]
fn validate_weekdays(days: &Vec<String>) -> Result<(), ValidationError> {
    if days.iter().all(|day| WEEKDAYS.contains(&day.as_str())) {
        Ok(())
    } else {
        Err(invalid("weekday", "Unknown day of the week"))
    }
}

fn validate_gender_preference(value: &str) -> Result<(), ValidationError> {
    if GENDER_PREFERENCES.contains(&value) {
        Ok(())
    } else {
        Err(invalid("gender_preference", "Choose a gender preference"))
    }
}

/// NaN slips through range checks since every comparison with it is false.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid("number", "Enter a number"))
    }
}

fn validate_confirmed(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(invalid("confirmed", "A current police check is required"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesForm {
    #[validate(length(min = 1, message = "Select at least one service"))]
    pub services: Vec<String>,
}

impl StepForm for ServicesForm {
    const STEP_ID: &'static str = "services";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RatesForm {
    #[validate(
        range(min = 20.0, max = 300.0, message = "Hourly rate must be between $20 and $300"),
        custom(function = "validate_finite")
    )]
    pub hourly_rate: f64,
    #[validate(
        range(min = 50.0, max = 1000.0, message = "Overnight rate must be between $50 and $1000"),
        custom(function = "validate_finite")
    )]
    pub overnight_rate: Option<f64>,
    pub negotiable: bool,
}

impl StepForm for RatesForm {
    const STEP_ID: &'static str = "rates";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityForm {
    #[validate(
        length(min = 1, message = "Select at least one day"),
        custom(function = "validate_weekdays")
    )]
    pub days: Vec<String>,
    #[validate(length(min = 1, message = "Select at least one time of day"))]
    pub time_slots: Vec<String>,
}

impl StepForm for AvailabilityForm {
    const STEP_ID: &'static str = "availability";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationsForm {
    #[validate(custom(function = "validate_postcode"))]
    pub postcode: String,
    pub suburbs: Vec<String>,
    #[validate(range(min = 1, max = 100, message = "Travel radius must be between 1 and 100 km"))]
    pub travel_radius_km: u32,
}

impl Default for LocationsForm {
    fn default() -> Self {
        Self {
            postcode: String::new(),
            suburbs: Vec::new(),
            travel_radius_km: 10,
        }
    }
}

impl StepForm for LocationsForm {
    const STEP_ID: &'static str = "locations";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguagesForm {
    #[validate(length(min = 1, message = "Select at least one main language"))]
    pub main_languages: Vec<String>,
    pub other_languages: Vec<String>,
}

impl StepForm for LanguagesForm {
    const STEP_ID: &'static str = "languages";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CulturalBackgroundForm {
    #[validate(length(min = 1, message = "Select at least one cultural background"))]
    pub backgrounds: Vec<String>,
    pub religions: Vec<String>,
}

impl StepForm for CulturalBackgroundForm {
    const STEP_ID: &'static str = "cultural-background";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutMeForm {
    #[validate(length(
        min = 20,
        max = 1000,
        message = "Tell families about yourself in 20 to 1000 characters"
    ))]
    pub personality: String,
    pub non_smoker: bool,
    pub pet_friendly: bool,
}

impl StepForm for AboutMeForm {
    const STEP_ID: &'static str = "about-me";
}

fn validate_entry_years(entry: &WorkHistoryEntry) -> Result<(), ValidationError> {
    match entry.end_year {
        Some(end) if end < entry.start_year => {
            Err(invalid("years", "End year cannot be before start year"))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_entry_years"))]
pub struct WorkHistoryEntry {
    #[validate(custom(function = "validate_not_blank"))]
    pub employer: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub role: String,
    #[validate(range(min = 1950, max = 2100, message = "Enter a valid start year"))]
    pub start_year: i32,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkHistoryForm {
    #[validate(length(min = 1, message = "Add at least one role"), nested)]
    pub entries: Vec<WorkHistoryEntry>,
}

impl StepForm for WorkHistoryForm {
    const STEP_ID: &'static str = "work-history";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[validate(custom(function = "validate_not_blank"))]
    pub institution: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub qualification: String,
    pub year: Option<i32>,
}

/// Education is optional; an empty list is a valid submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationForm {
    #[validate(nested)]
    pub entries: Vec<EducationEntry>,
}

impl StepForm for EducationForm {
    const STEP_ID: &'static str = "education";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationsForm {
    pub first_aid: bool,
    #[validate(custom(function = "validate_confirmed"))]
    pub police_check: bool,
    pub working_with_children: bool,
    pub other: Vec<String>,
}

impl StepForm for CertificationsForm {
    const STEP_ID: &'static str = "certifications";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct InterestsForm {
    #[validate(length(min = 1, message = "Select at least one interest"))]
    pub interests: Vec<String>,
}

impl StepForm for InterestsForm {
    const STEP_ID: &'static str = "interests";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesForm {
    #[validate(length(min = 1, message = "Select at least one type of client"))]
    pub client_types: Vec<String>,
    #[validate(custom(function = "validate_gender_preference"))]
    pub gender_preference: String,
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self {
            client_types: Vec::new(),
            gender_preference: "any".to_string(),
        }
    }
}

impl StepForm for PreferencesForm {
    const STEP_ID: &'static str = "preferences";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps;
    use common::field_errors;

    fn messages<F: Validate>(form: &F) -> Vec<String> {
        match form.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_errors(&errors).into_values().flatten().collect(),
        }
    }

    #[test]
    fn test_every_form_belongs_to_a_registered_step() {
        for id in [
            ServicesForm::STEP_ID,
            RatesForm::STEP_ID,
            AvailabilityForm::STEP_ID,
            LocationsForm::STEP_ID,
            LanguagesForm::STEP_ID,
            CulturalBackgroundForm::STEP_ID,
            AboutMeForm::STEP_ID,
            WorkHistoryForm::STEP_ID,
            EducationForm::STEP_ID,
            CertificationsForm::STEP_ID,
            InterestsForm::STEP_ID,
            PreferencesForm::STEP_ID,
        ] {
            assert!(steps::find(id).is_some(), "{} is not in the registry", id);
        }
    }

    #[test]
    fn test_languages_json_shape() {
        let form = LanguagesForm {
            main_languages: vec!["English".to_string(), "Mandarin".to_string()],
            other_languages: vec![],
        };
        assert_eq!(LanguagesForm::storage_key(), "languages-form");
        assert_eq!(
            serde_json::to_string(&form).unwrap(),
            r#"{"mainLanguages":["English","Mandarin"],"otherLanguages":[]}"#
        );
    }

    #[test]
    fn test_partial_json_loads_with_defaults() {
        let form: AboutMeForm = serde_json::from_str(r#"{"nonSmoker":true}"#).unwrap();
        assert!(form.non_smoker);
        assert!(form.personality.is_empty());
    }

    #[test]
    fn test_default_forms_with_required_fields_are_invalid() {
        assert!(ServicesForm::default().validate().is_err());
        assert!(RatesForm::default().validate().is_err());
        assert!(AvailabilityForm::default().validate().is_err());
        assert!(LocationsForm::default().validate().is_err());
        assert!(LanguagesForm::default().validate().is_err());
        assert!(AboutMeForm::default().validate().is_err());
        assert!(WorkHistoryForm::default().validate().is_err());
        assert!(CertificationsForm::default().validate().is_err());
        assert!(InterestsForm::default().validate().is_err());
        assert!(PreferencesForm::default().validate().is_err());
        assert!(EducationForm::default().validate().is_ok());
    }

    #[test]
    fn test_rates_bounds() {
        let mut form = RatesForm {
            hourly_rate: 45.0,
            overnight_rate: None,
            negotiable: true,
        };
        assert!(form.validate().is_ok());

        form.overnight_rate = Some(20.0);
        assert_eq!(
            messages(&form),
            vec!["Overnight rate must be between $50 and $1000".to_string()]
        );
    }

    #[test]
    fn test_rates_must_be_numbers() {
        let form = RatesForm {
            hourly_rate: f64::NAN,
            overnight_rate: Some(f64::NAN),
            negotiable: false,
        };
        let errors = field_errors(&form.validate().unwrap_err());
        assert_eq!(errors["hourly_rate"], vec!["Enter a number".to_string()]);
        assert_eq!(errors["overnight_rate"], vec!["Enter a number".to_string()]);
    }

    #[test]
    fn test_unknown_weekday_rejected() {
        let form = AvailabilityForm {
            days: vec!["monday".to_string(), "someday".to_string()],
            time_slots: vec!["morning".to_string()],
        };
        assert_eq!(messages(&form), vec!["Unknown day of the week".to_string()]);
    }

    #[test]
    fn test_work_history_entry_errors_are_indexed() {
        let entry = WorkHistoryEntry {
            employer: "Sunrise Aged Care".to_string(),
            role: "Support worker".to_string(),
            start_year: 2018,
            end_year: Some(2021),
        };
        let form = WorkHistoryForm {
            entries: vec![
                entry.clone(),
                WorkHistoryEntry {
                    employer: " ".to_string(),
                    ..entry.clone()
                },
                WorkHistoryEntry {
                    start_year: 2022,
                    end_year: Some(2020),
                    ..entry.clone()
                },
            ],
        };
        let errors = field_errors(&form.validate().unwrap_err());

        assert!(!errors.keys().any(|key| key.starts_with("entries[0]")));
        let blank: Vec<_> = errors
            .iter()
            .filter(|(key, _)| key.starts_with("entries[1]"))
            .flat_map(|(_, messages)| messages.clone())
            .collect();
        assert_eq!(blank, vec!["This field is required".to_string()]);
        assert_eq!(
            errors.get("entries[2]"),
            Some(&vec!["End year cannot be before start year".to_string()])
        );
    }

    #[test]
    fn test_police_check_required() {
        let mut form = CertificationsForm::default();
        assert_eq!(
            messages(&form),
            vec!["A current police check is required".to_string()]
        );
        form.police_check = true;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_locations_postcode() {
        let form = LocationsForm {
            postcode: "2000".to_string(),
            ..LocationsForm::default()
        };
        assert!(form.validate().is_ok());

        let form = LocationsForm {
            postcode: "20000".to_string(),
            ..LocationsForm::default()
        };
        assert_eq!(messages(&form), vec!["Postcode must be four digits".to_string()]);
    }
}
