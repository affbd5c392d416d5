use wizard::StepForm;
use wizard::forms::{
    AvailabilityForm, BACKGROUND_OPTIONS, CLIENT_TYPES, CulturalBackgroundForm, GENDER_PREFERENCES,
    INTEREST_OPTIONS, InterestsForm, LANGUAGE_OPTIONS, LanguagesForm, PreferencesForm, SERVICE_OPTIONS,
    ServicesForm, TIME_SLOTS, WEEKDAYS,
};
use yew::prelude::*;

use super::read_on_submit;
use crate::common::field_error::FieldError;
use crate::components::wizard::choices::{CheckboxGroup, SaveButton};
use crate::components::wizard::shell::WizardShell;
use crate::hooks::use_step_form;

#[function_component(ServicesStep)]
pub fn services_step() -> Html {
    let step = use_step_form::<ServicesForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| ServicesForm {
        services: values.all("services"),
    });

    html! {
        <WizardShell step_id={ServicesForm::STEP_ID} intro="Which kinds of support can you offer?">
            <form ref={form_ref} onsubmit={on_submit}>
                <CheckboxGroup name="services" options={SERVICE_OPTIONS} selected={step.initial.services.clone()} />
                <FieldError errors={step.errors.clone()} field="services" />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(AvailabilityStep)]
pub fn availability_step() -> Html {
    let step = use_step_form::<AvailabilityForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| AvailabilityForm {
        days: values.all("days"),
        time_slots: values.all("timeSlots"),
    });

    html! {
        <WizardShell step_id={AvailabilityForm::STEP_ID} intro="When are you usually free to work?">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-6">
                <div>
                    <h3 class="font-semibold mb-2">{"Days"}</h3>
                    <CheckboxGroup name="days" options={WEEKDAYS} selected={step.initial.days.clone()} />
                    <FieldError errors={step.errors.clone()} field="days" />
                </div>
                <div>
                    <h3 class="font-semibold mb-2">{"Times of day"}</h3>
                    <CheckboxGroup name="timeSlots" options={TIME_SLOTS} selected={step.initial.time_slots.clone()} />
                    <FieldError errors={step.errors.clone()} field="time_slots" />
                </div>
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(LanguagesStep)]
pub fn languages_step() -> Html {
    let step = use_step_form::<LanguagesForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| LanguagesForm {
        main_languages: values.all("mainLanguages"),
        other_languages: values.list("otherLanguages"),
    });

    html! {
        <WizardShell step_id={LanguagesForm::STEP_ID} intro="Families search for carers who speak their language.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-6">
                <div>
                    <h3 class="font-semibold mb-2">{"Languages you speak fluently"}</h3>
                    <CheckboxGroup name="mainLanguages" options={LANGUAGE_OPTIONS} selected={step.initial.main_languages.clone()} />
                    <FieldError errors={step.errors.clone()} field="main_languages" />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Other languages or dialects (comma separated)"}</span></label>
                    <input
                        type="text"
                        name="otherLanguages"
                        class="input input-bordered w-full"
                        placeholder="e.g. Hokkien, Teochew"
                        value={step.initial.other_languages.join(", ")}
                    />
                </div>
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(CulturalBackgroundStep)]
pub fn cultural_background_step() -> Html {
    let step = use_step_form::<CulturalBackgroundForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| CulturalBackgroundForm {
        backgrounds: values.all("backgrounds"),
        religions: values.list("religions"),
    });

    html! {
        <WizardShell step_id={CulturalBackgroundForm::STEP_ID} intro="Share the cultures you belong to or know well.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-6">
                <div>
                    <CheckboxGroup name="backgrounds" options={BACKGROUND_OPTIONS} selected={step.initial.backgrounds.clone()} />
                    <FieldError errors={step.errors.clone()} field="backgrounds" />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Religious or cultural practices you're familiar with (optional)"}</span></label>
                    <input
                        type="text"
                        name="religions"
                        class="input input-bordered w-full"
                        value={step.initial.religions.join(", ")}
                    />
                </div>
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(InterestsStep)]
pub fn interests_step() -> Html {
    let step = use_step_form::<InterestsForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| InterestsForm {
        interests: values.all("interests"),
    });

    html! {
        <WizardShell step_id={InterestsForm::STEP_ID} intro="Shared interests make visits something to look forward to.">
            <form ref={form_ref} onsubmit={on_submit}>
                <CheckboxGroup name="interests" options={INTEREST_OPTIONS} selected={step.initial.interests.clone()} />
                <FieldError errors={step.errors.clone()} field="interests" />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(PreferencesStep)]
pub fn preferences_step() -> Html {
    let step = use_step_form::<PreferencesForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| PreferencesForm {
        client_types: values.all("clientTypes"),
        gender_preference: values.text("genderPreference"),
    });

    html! {
        <WizardShell step_id={PreferencesForm::STEP_ID} intro="Who would you like to care for?">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-6">
                <div>
                    <CheckboxGroup name="clientTypes" options={CLIENT_TYPES} selected={step.initial.client_types.clone()} />
                    <FieldError errors={step.errors.clone()} field="client_types" />
                </div>
                <div class="form-control max-w-xs">
                    <label class="label"><span class="label-text">{"Preferred client gender"}</span></label>
                    <select name="genderPreference" class="select select-bordered">
                        {for GENDER_PREFERENCES.iter().map(|option| html! {
                            <option
                                value={*option}
                                selected={step.initial.gender_preference == *option}
                            >
                                {match *option {
                                    "female" => "Female clients",
                                    "male" => "Male clients",
                                    _ => "No preference",
                                }}
                            </option>
                        })}
                    </select>
                    <FieldError errors={step.errors.clone()} field="gender_preference" />
                </div>
                <SaveButton label="Finish and preview" />
            </form>
        </WizardShell>
    }
}
