use common::{FeedbackRequest, FieldErrors, validated};
use yew::prelude::*;

use crate::api_client;
use crate::common::field_error::FieldError;
use crate::common::form_data::FormValues;
use crate::components::layout::layout::Layout;
use crate::hooks::use_submission;
use crate::i18n::{Phrase, forms, use_locale};

const TITLE: Phrase = Phrase::new("Tell us what you think", "告诉我们您的想法");
const INTRO: Phrase = Phrase::new(
    "What would make CareLink work for your family? Every message is read by our team.",
    "怎样的 CareLink 最适合您的家庭？我们的团队会认真阅读每一条留言。",
);
const EMAIL_OPTIONAL: Phrase = Phrase::new("Email (optional, if you'd like a reply)", "电子邮箱（选填，如需回复）");
const FEEDBACK: Phrase = Phrase::new("Your feedback", "您的意见");

fn feedback_request(email: Option<String>, feedback: String) -> Result<FeedbackRequest, FieldErrors> {
    validated(FeedbackRequest {
        email: email.map(|email| email.trim().to_string()),
        feedback,
    })
}

#[function_component(FeedbackPage)]
pub fn feedback_page() -> Html {
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
            let request = match feedback_request(values.optional_text("email"), values.text("feedback")) {
                Ok(request) => request,
                Err(invalid) => return reject.emit(invalid),
            };
            log::info!("Sending feedback ({} characters)", request.feedback.chars().count());
            submit.emit(Box::pin(async move { api_client::send_feedback(&request).await }));
        })
    };

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
                            <label class="label"><span class="label-text">{i18n.t(&EMAIL_OPTIONAL)}</span></label>
                            <input type="email" name="email" class="input input-bordered w-full" disabled={submission.submitting} />
                            <FieldError errors={submission.errors.clone()} field="email" />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{i18n.t(&FEEDBACK)}</span></label>
                            <textarea
                                name="feedback"
                                class="textarea textarea-bordered w-full h-40"
                                maxlength="2000"
                                disabled={submission.submitting}
                            />
                            <FieldError errors={submission.errors.clone()} field="feedback" />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={submission.submitting}>
                            {if submission.submitting { i18n.t(&forms::SENDING) } else { i18n.t(&forms::SUBMIT) }}
                        </button>
                    </form>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_without_email_passes() {
        let request = feedback_request(None, "More carers in Parramatta please".to_string()).unwrap();
        assert_eq!(request.email, None);
    }

    #[test]
    fn test_blank_feedback_and_bad_email_are_rejected() {
        let errors = feedback_request(Some("nope".to_string()), "   ".to_string()).unwrap_err();
        assert!(errors.contains_key("feedback"));
        assert_eq!(errors["email"], vec!["Invalid email address".to_string()]);
    }
}
