use wizard::StepForm;
use wizard::forms::{AboutMeForm, CertificationsForm, LocationsForm, RatesForm};
use yew::prelude::*;

use super::read_on_submit;
use crate::common::field_error::FieldError;
use crate::components::wizard::choices::SaveButton;
use crate::components::wizard::shell::WizardShell;
use crate::hooks::use_step_form;

#[derive(Properties, PartialEq)]
struct ToggleProps {
    name: AttrValue,
    label: AttrValue,
    checked: bool,
}

#[function_component(Toggle)]
fn toggle(props: &ToggleProps) -> Html {
    html! {
        <label class="label cursor-pointer justify-start gap-3">
            <input type="checkbox" class="toggle toggle-primary" name={props.name.clone()} checked={props.checked} />
            <span class="label-text">{&props.label}</span>
        </label>
    }
}

#[function_component(RatesStep)]
pub fn rates_step() -> Html {
    let step = use_step_form::<RatesForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| RatesForm {
        hourly_rate: values.number("hourlyRate").unwrap_or_default(),
        overnight_rate: values.number("overnightRate"),
        negotiable: values.checked("negotiable"),
    });

    let hourly = if step.initial.hourly_rate > 0.0 {
        step.initial.hourly_rate.to_string()
    } else {
        String::new()
    };
    let overnight = step.initial.overnight_rate.map(|rate| rate.to_string()).unwrap_or_default();

    html! {
        <WizardShell step_id={RatesForm::STEP_ID} intro="Set the rates families will see on your profile.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                <div class="form-control max-w-xs">
                    <label class="label"><span class="label-text">{"Hourly rate (AUD)"}</span></label>
                    <input type="number" name="hourlyRate" min="20" max="300" step="0.5" class="input input-bordered" value={hourly} />
                    <FieldError errors={step.errors.clone()} field="hourly_rate" />
                </div>
                <div class="form-control max-w-xs">
                    <label class="label"><span class="label-text">{"Overnight rate (optional)"}</span></label>
                    <input type="number" name="overnightRate" min="50" max="1000" step="1" class="input input-bordered" value={overnight} />
                    <FieldError errors={step.errors.clone()} field="overnight_rate" />
                </div>
                <Toggle name="negotiable" label="My rates are negotiable" checked={step.initial.negotiable} />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(LocationsStep)]
pub fn locations_step() -> Html {
    let step = use_step_form::<LocationsForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| LocationsForm {
        postcode: values.text("postcode").trim().to_string(),
        suburbs: values.list("suburbs"),
        travel_radius_km: values.number("travelRadiusKm").unwrap_or_default(),
    });

    html! {
        <WizardShell step_id={LocationsForm::STEP_ID} intro="Where can you work?">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                <div class="form-control max-w-xs">
                    <label class="label"><span class="label-text">{"Home postcode"}</span></label>
                    <input type="text" name="postcode" inputmode="numeric" maxlength="4" class="input input-bordered" value={step.initial.postcode.clone()} />
                    <FieldError errors={step.errors.clone()} field="postcode" />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Suburbs you'd like to work in (comma separated)"}</span></label>
                    <input type="text" name="suburbs" class="input input-bordered w-full" value={step.initial.suburbs.join(", ")} />
                </div>
                <div class="form-control max-w-xs">
                    <label class="label"><span class="label-text">{"How far will you travel? (km)"}</span></label>
                    <input type="number" name="travelRadiusKm" min="1" max="100" class="input input-bordered" value={step.initial.travel_radius_km.to_string()} />
                    <FieldError errors={step.errors.clone()} field="travel_radius_km" />
                </div>
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(AboutMeStep)]
pub fn about_me_step() -> Html {
    let step = use_step_form::<AboutMeForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| AboutMeForm {
        personality: values.text("personality").trim().to_string(),
        non_smoker: values.checked("nonSmoker"),
        pet_friendly: values.checked("petFriendly"),
    });

    html! {
        <WizardShell step_id={AboutMeForm::STEP_ID} intro="Help families get to know you before you meet.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"About you"}</span></label>
                    <textarea
                        name="personality"
                        class="textarea textarea-bordered h-40"
                        maxlength="1000"
                        placeholder="What do you enjoy about caring for people?"
                        value={step.initial.personality.clone()}
                    />
                    <FieldError errors={step.errors.clone()} field="personality" />
                </div>
                <Toggle name="nonSmoker" label="I don't smoke" checked={step.initial.non_smoker} />
                <Toggle name="petFriendly" label="I'm comfortable around pets" checked={step.initial.pet_friendly} />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(CertificationsStep)]
pub fn certifications_step() -> Html {
    let step = use_step_form::<CertificationsForm>();
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, |values| CertificationsForm {
        first_aid: values.checked("firstAid"),
        police_check: values.checked("policeCheck"),
        working_with_children: values.checked("workingWithChildren"),
        other: values.list("other"),
    });

    html! {
        <WizardShell step_id={CertificationsForm::STEP_ID} intro="Families need to know you're qualified and checked.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-2">
                <Toggle name="policeCheck" label="I hold a current national police check" checked={step.initial.police_check} />
                <FieldError errors={step.errors.clone()} field="police_check" />
                <Toggle name="firstAid" label="First aid certificate" checked={step.initial.first_aid} />
                <Toggle name="workingWithChildren" label="Working with children check" checked={step.initial.working_with_children} />
                <div class="form-control pt-2">
                    <label class="label"><span class="label-text">{"Other qualifications (comma separated)"}</span></label>
                    <input type="text" name="other" class="input input-bordered w-full" placeholder="e.g. Cert III Individual Support" value={step.initial.other.join(", ")} />
                </div>
                <SaveButton />
            </form>
        </WizardShell>
    }
}
