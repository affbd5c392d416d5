//! Carer profile-building wizard pages.

mod choices;
mod details;
mod history;
mod preview;

use wizard::{CompletionStore, steps};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::form_data::FormValues;
use crate::router::Route;
use crate::storage::BrowserStorage;

pub use preview::ProfilePreviewPage;

/// Page for `step_id`, `None` for an unknown step.
pub fn step_page(step_id: &str) -> Option<Html> {
    let page = match step_id {
        "services" => html! { <choices::ServicesStep /> },
        "rates" => html! { <details::RatesStep /> },
        "availability" => html! { <choices::AvailabilityStep /> },
        "locations" => html! { <details::LocationsStep /> },
        "languages" => html! { <choices::LanguagesStep /> },
        "cultural-background" => html! { <choices::CulturalBackgroundStep /> },
        "about-me" => html! { <details::AboutMeStep /> },
        "work-history" => html! { <history::WorkHistoryStep /> },
        "education" => html! { <history::EducationStep /> },
        "certifications" => html! { <details::CertificationsStep /> },
        "interests" => html! { <choices::InterestsStep /> },
        "preferences" => html! { <choices::PreferencesStep /> },
        _ => return None,
    };
    Some(page)
}

/// Sends the carer to the first step they haven't finished.
#[function_component(ProfileBuildingStart)]
pub fn profile_building_start() -> Html {
    let status = CompletionStore::new(BrowserStorage).get_completion_status();
    let route = match steps::first_incomplete(&status) {
        Some(step) => Route::ProfileStep { step: step.id.to_string() },
        None => Route::ProfilePreview,
    };
    log::debug!("Resuming profile building at {:?}", route);
    html! { <Redirect<Route> to={route} /> }
}

/// Submit handler that reads the step form out of the `<form>` element.
fn read_on_submit<F: 'static>(
    form_ref: &NodeRef,
    on_submit: &Callback<F>,
    read: fn(&FormValues) -> F,
) -> Callback<SubmitEvent> {
    let form_ref = form_ref.clone();
    let on_submit = on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        if let Some(values) = FormValues::from_ref(&form_ref) {
            on_submit.emit(read(&values));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_step_has_a_page() {
        for step in steps::steps() {
            assert!(step_page(step.id).is_some(), "no page for {}", step.id);
        }
        assert!(step_page("hobbies").is_none());
    }
}
