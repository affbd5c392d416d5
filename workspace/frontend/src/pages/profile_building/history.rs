use wizard::StepForm;
use wizard::forms::{EducationEntry, EducationForm, WorkHistoryEntry, WorkHistoryForm};
use yew::prelude::*;

use super::read_on_submit;
use crate::common::field_error::FieldError;
use crate::common::form_data::FormValues;
use crate::components::wizard::choices::SaveButton;
use crate::components::wizard::shell::WizardShell;
use crate::hooks::use_step_form;

/// Upper bound on repeated rows read back from the form.
const MAX_ROWS: usize = 20;

fn row_count(values: &FormValues) -> usize {
    values.number::<usize>("rows").unwrap_or(1).min(MAX_ROWS)
}

/// Rows left completely blank are dropped.
fn read_work_history(values: &FormValues) -> WorkHistoryForm {
    let entries = (0..row_count(values))
        .filter_map(|i| {
            let employer = values.text(&format!("employer-{i}")).trim().to_string();
            let role = values.text(&format!("role-{i}")).trim().to_string();
            let start = values.text(&format!("startYear-{i}"));
            if employer.is_empty() && role.is_empty() && start.trim().is_empty() {
                return None;
            }
            Some(WorkHistoryEntry {
                employer,
                role,
                start_year: start.trim().parse().unwrap_or_default(),
                end_year: values.number(&format!("endYear-{i}")),
            })
        })
        .collect();
    WorkHistoryForm { entries }
}

fn read_education(values: &FormValues) -> EducationForm {
    let entries = (0..row_count(values))
        .filter_map(|i| {
            let institution = values.text(&format!("institution-{i}")).trim().to_string();
            let qualification = values.text(&format!("qualification-{i}")).trim().to_string();
            if institution.is_empty() && qualification.is_empty() {
                return None;
            }
            Some(EducationEntry {
                institution,
                qualification,
                year: values.number(&format!("year-{i}")),
            })
        })
        .collect();
    EducationForm { entries }
}

fn year_value(year: Option<i32>) -> String {
    year.filter(|y| *y > 0).map(|y| y.to_string()).unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct AddRowProps {
    rows: UseStateHandle<usize>,
    label: AttrValue,
}

#[function_component(AddRowButton)]
fn add_row_button(props: &AddRowProps) -> Html {
    let onclick = {
        let rows = props.rows.clone();
        Callback::from(move |_| rows.set((*rows + 1).min(MAX_ROWS)))
    };
    html! {
        <button type="button" class="btn btn-ghost btn-sm" {onclick} disabled={*props.rows >= MAX_ROWS}>
            <i class="fas fa-plus"></i>{format!(" {}", props.label)}
        </button>
    }
}

#[function_component(WorkHistoryStep)]
pub fn work_history_step() -> Html {
    let step = use_step_form::<WorkHistoryForm>();
    let saved_rows = step.initial.entries.len().max(1);
    let rows = use_state(move || saved_rows);
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, read_work_history);

    html! {
        <WizardShell step_id={WorkHistoryForm::STEP_ID} intro="List your care roles, most recent first. Paid and volunteer work both count.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                <input type="hidden" name="rows" value={rows.to_string()} />
                <FieldError errors={step.errors.clone()} field="entries" exact={true} />
                {for (0..*rows).map(|i| {
                    let entry = step.initial.entries.get(i).cloned().unwrap_or_default();
                    let start = if entry.start_year > 0 { entry.start_year.to_string() } else { String::new() };
                    html! {
                        <fieldset key={i} class="grid grid-cols-1 md:grid-cols-4 gap-2 border border-base-300 rounded-box p-3">
                            <input type="text" name={format!("employer-{i}")} placeholder="Employer" class="input input-bordered input-sm" value={entry.employer} />
                            <input type="text" name={format!("role-{i}")} placeholder="Role" class="input input-bordered input-sm" value={entry.role} />
                            <input type="number" name={format!("startYear-{i}")} placeholder="Start year" class="input input-bordered input-sm" value={start} />
                            <input type="number" name={format!("endYear-{i}")} placeholder="End year (blank if current)" class="input input-bordered input-sm" value={year_value(entry.end_year)} />
                            <div class="md:col-span-4">
                                <FieldError errors={step.errors.clone()} field={format!("entries[{i}]")} />
                            </div>
                        </fieldset>
                    }
                })}
                <AddRowButton rows={rows.clone()} label="Add another role" />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[function_component(EducationStep)]
pub fn education_step() -> Html {
    let step = use_step_form::<EducationForm>();
    let saved_rows = step.initial.entries.len().max(1);
    let rows = use_state(move || saved_rows);
    let form_ref = use_node_ref();
    let on_submit = read_on_submit(&form_ref, &step.on_submit, read_education);

    html! {
        <WizardShell step_id={EducationForm::STEP_ID} intro="Add any study or training. You can skip this step.">
            <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                <input type="hidden" name="rows" value={rows.to_string()} />
                {for (0..*rows).map(|i| {
                    let entry = step.initial.entries.get(i).cloned().unwrap_or_default();
                    html! {
                        <fieldset key={i} class="grid grid-cols-1 md:grid-cols-3 gap-2 border border-base-300 rounded-box p-3">
                            <input type="text" name={format!("institution-{i}")} placeholder="Institution" class="input input-bordered input-sm" value={entry.institution} />
                            <input type="text" name={format!("qualification-{i}")} placeholder="Qualification" class="input input-bordered input-sm" value={entry.qualification} />
                            <input type="number" name={format!("year-{i}")} placeholder="Year" class="input input-bordered input-sm" value={year_value(entry.year)} />
                            <div class="md:col-span-3">
                                <FieldError errors={step.errors.clone()} field={format!("entries[{i}]")} />
                            </div>
                        </fieldset>
                    }
                })}
                <AddRowButton rows={rows.clone()} label="Add another qualification" />
                <SaveButton />
            </form>
        </WizardShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_value() {
        assert_eq!(year_value(Some(2019)), "2019");
        assert_eq!(year_value(Some(0)), "");
        assert_eq!(year_value(None), "");
    }
}
