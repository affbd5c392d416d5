use serde_json::Value;
use wizard::{ProfileWizard, steps};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::wizard::step_sidebar::StepSidebar;
use crate::router::Route;
use crate::storage::BrowserStorage;

/// Human readable rendering of one saved form value.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(text) if text.is_empty() => "-".to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) if items.is_empty() => "-".to_string(),
        Value::Array(items) => items.iter().map(describe).collect::<Vec<_>>().join(", "),
        Value::Object(fields) => fields
            .values()
            .map(describe)
            .filter(|part| part != "-")
            .collect::<Vec<_>>()
            .join(" · "),
        Value::Number(number) => number.to_string(),
    }
}

/// `hourlyRate` -> `Hourly rate`
fn field_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}

#[function_component(ProfilePreviewPage)]
pub fn profile_preview_page() -> Html {
    let wizard = ProfileWizard::open(BrowserStorage);
    let sections = wizard.preview();
    let complete = wizard.is_profile_complete();

    html! {
        <Layout>
            <div class="flex flex-col lg:flex-row gap-6">
                <StepSidebar entries={wizard.sidebar()} current="preview" progress={wizard.progress()} />
                <section class="card bg-base-100 shadow flex-1">
                    <div class="card-body">
                        <h2 class="card-title text-2xl">{"Your profile"}</h2>
                        {if complete {
                            html! {
                                <div class="alert alert-success">
                                    <i class="fas fa-circle-check"></i>
                                    <span>{"Every section is done. This is what families will see."}</span>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="alert alert-warning">
                                    <i class="fas fa-triangle-exclamation"></i>
                                    <span>{"Some sections are still missing."}</span>
                                    <Link<Route> to={Route::ProfileBuilding} classes="btn btn-sm">{"Continue"}</Link<Route>>
                                </div>
                            }
                        }}
                        {for sections.iter().map(|(step_id, form)| {
                            let label = steps::find(step_id).map(|step| step.label).unwrap_or(*step_id);
                            let fields = match form {
                                Value::Object(fields) => fields.iter().collect::<Vec<_>>(),
                                _ => Vec::new(),
                            };
                            html! {
                                <div key={*step_id} class="border-b border-base-300 py-3">
                                    <div class="flex justify-between items-center">
                                        <h3 class="font-semibold">{label}</h3>
                                        <Link<Route> to={Route::ProfileStep { step: step_id.to_string() }} classes="link link-primary text-sm">
                                            {"Edit"}
                                        </Link<Route>>
                                    </div>
                                    <dl class="grid grid-cols-1 md:grid-cols-3 gap-x-4 gap-y-1 mt-2 text-sm">
                                        {for fields.into_iter().map(|(key, value)| html! {
                                            <>
                                                <dt class="opacity-70">{field_label(key)}</dt>
                                                <dd class="md:col-span-2">{describe(value)}</dd>
                                            </>
                                        })}
                                    </dl>
                                </div>
                            }
                        })}
                    </div>
                </section>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_values() {
        assert_eq!(describe(&json!(["Mandarin", "English"])), "Mandarin, English");
        assert_eq!(describe(&json!(true)), "Yes");
        assert_eq!(describe(&json!(null)), "-");
        assert_eq!(
            describe(&json!({"employer": "Sunrise Aged Care", "endYear": null, "role": "Carer"})),
            "Sunrise Aged Care · Carer"
        );
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("hourlyRate"), "Hourly rate");
        assert_eq!(field_label("services"), "Services");
    }
}
