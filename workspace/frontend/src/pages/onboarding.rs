use common::{FieldErrors, OnboardingRequest, Role, validated};
use yew::prelude::*;

use crate::api_client;
use crate::common::field_error::FieldError;
use crate::common::form_data::FormValues;
use crate::components::layout::layout::Layout;
use crate::hooks::use_submission;
use crate::i18n::{Phrase, forms, use_locale};

const TITLE: Phrase = Phrase::new("Let's get you started", "开始使用 CareLink");
const INTRO: Phrase = Phrase::new(
    "Leave your details and someone from our care team will call you.",
    "留下您的联系方式，我们的护理团队会与您联系。",
);
const FIRST_NAME: Phrase = Phrase::new("First name", "名");
const LAST_NAME: Phrase = Phrase::new("Last name", "姓");
const PHONE: Phrase = Phrase::new("Phone", "电话");
const POSTCODE: Phrase = Phrase::new("Postcode", "邮编");
const ROLE: Phrase = Phrase::new("I am", "我是");
const FAMILY: Phrase = Phrase::new("Looking for care for my family", "为家人寻找护理");
const CARER: Phrase = Phrase::new("A carer looking for work", "寻找工作的护理员");
const MESSAGE: Phrase = Phrase::new("Anything we should know? (optional)", "其他需要说明的情况（选填）");

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    name: AttrValue,
    /// Name validation errors are reported under
    field: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    errors: common::FieldErrors,
    disabled: bool,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{&props.label}</span></label>
            <input
                type={props.input_type.clone()}
                name={props.name.clone()}
                class="input input-bordered w-full"
                disabled={props.disabled}
            />
            <FieldError errors={props.errors.clone()} field={props.field.clone()} />
        </div>
    }
}

/// Build the request from the form field named by each input.
fn onboarding_request(field: impl Fn(&str) -> String) -> Result<OnboardingRequest, FieldErrors> {
    let message = field("message");
    validated(OnboardingRequest {
        first_name: field("firstName"),
        last_name: field("lastName"),
        email: field("email").trim().to_string(),
        phone: field("phone"),
        postcode: field("postcode").trim().to_string(),
        role: field("role"),
        message: Some(message).filter(|message| !message.trim().is_empty()),
    })
}

#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let i18n = use_locale();
    let form_ref = use_node_ref();
    let submission = use_submission();

    let on_submit = {
        let form_ref = form_ref.clone();
        let submit = submission.submit.clone();
        let reject = submission.reject.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(values) = FormValues::from_ref(&form_ref) else {
                return;
            };
            let request = match onboarding_request(|name| values.text(name)) {
                Ok(request) => request,
                Err(invalid) => return reject.emit(invalid),
            };
            log::info!("Starting onboarding as '{}'", request.role);
            submit.emit(Box::pin(async move { api_client::start_onboarding(&request).await }));
        })
    };

    let errors = submission.errors.clone();
    let disabled = submission.submitting;

    html! {
        <Layout>
            <div class="card bg-base-100 shadow max-w-2xl mx-auto">
                <div class="card-body">
                    <h1 class="card-title text-3xl">{i18n.t(&TITLE)}</h1>
                    <p>{i18n.t(&INTRO)}</p>

                    {if let Some(failure) = submission.failure.as_ref() {
                        html! {
                            <div class="alert alert-error mt-4">
                                <span>{failure}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-4" novalidate={true}>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{i18n.t(&ROLE)}</span></label>
                            {for [(Role::Family, &FAMILY), (Role::Carer, &CARER)].into_iter().map(|(role, label)| html! {
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input type="radio" name="role" class="radio radio-primary" value={role.as_str()} disabled={disabled} />
                                    <span class="label-text">{i18n.t(label)}</span>
                                </label>
                            })}
                            <FieldError errors={errors.clone()} field="role" />
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <TextField name="firstName" field="first_name" label={i18n.t(&FIRST_NAME)} errors={errors.clone()} {disabled} />
                            <TextField name="lastName" field="last_name" label={i18n.t(&LAST_NAME)} errors={errors.clone()} {disabled} />
                        </div>
                        <TextField name="email" field="email" input_type="email" label={i18n.t(&forms::EMAIL)} errors={errors.clone()} {disabled} />
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <TextField name="phone" field="phone" input_type="tel" label={i18n.t(&PHONE)} errors={errors.clone()} {disabled} />
                            <TextField name="postcode" field="postcode" label={i18n.t(&POSTCODE)} errors={errors.clone()} {disabled} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{i18n.t(&MESSAGE)}</span></label>
                            <textarea name="message" class="textarea textarea-bordered w-full" maxlength="2000" disabled={disabled} />
                            <FieldError errors={errors.clone()} field="message" />
                        </div>
                        <button type="submit" class="btn btn-primary w-full" disabled={disabled}>
                            {if disabled { i18n.t(&forms::SENDING) } else { i18n.t(&forms::SUBMIT) }}
                        </button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
