use common::{FieldErrors, WaitlistRequest, validated};
use yew::prelude::*;

use crate::api_client;
use crate::common::field_error::FieldError;
use crate::common::form_data::FormValues;
use crate::components::layout::layout::Layout;
use crate::hooks::use_submission;
use crate::i18n::{Phrase, forms, nav, use_locale};

const INTRO: Phrase = Phrase::new(
    "We're opening area by area. Leave your email and we'll let you know when CareLink is available near you.",
    "我们正在逐个地区开放。留下您的邮箱，服务在您附近开放时我们会通知您。",
);

fn waitlist_request(email: &str) -> Result<WaitlistRequest, FieldErrors> {
    validated(WaitlistRequest {
        email: email.trim().to_string(),
    })
}

#[function_component(WaitlistPage)]
pub fn waitlist_page() -> Html {
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
            let request = match waitlist_request(&values.text("email")) {
                Ok(request) => request,
                Err(invalid) => return reject.emit(invalid),
            };
            log::info!("Joining waitlist");
            submit.emit(Box::pin(async move { api_client::join_waitlist(&request).await }));
        })
    };

    html! {
        <Layout>
            <div class="card bg-base-100 shadow max-w-lg mx-auto">
                <div class="card-body">
                    <h1 class="card-title text-3xl">{i18n.t(&nav::WAITLIST)}</h1>
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
                            <label class="label"><span class="label-text">{i18n.t(&forms::EMAIL)}</span></label>
                            <input
                                type="email"
                                name="email"
                                class="input input-bordered w-full"
                                placeholder="you@example.com"
                                disabled={submission.submitting}
                            />
                            <FieldError errors={submission.errors.clone()} field="email" />
                        </div>
                        <button type="submit" class="btn btn-primary w-full" disabled={submission.submitting}>
                            {if submission.submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{i18n.t(&forms::SENDING)}</> }
                            } else {
                                html! { {i18n.t(&nav::WAITLIST)} }
                            }}
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
    fn test_bad_email_is_rejected_before_sending() {
        let errors = waitlist_request("not-an-email").unwrap_err();
        assert_eq!(errors["email"], vec!["Invalid email address".to_string()]);
    }

    #[test]
    fn test_email_is_trimmed() {
        let request = waitlist_request("  someone@example.com ").unwrap();
        assert_eq!(request.email, "someone@example.com");
    }
}
