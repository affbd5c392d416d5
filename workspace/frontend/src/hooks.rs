use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use common::{FieldErrors, SubmissionResponse};
use gloo_timers::callback::Timeout;
use wizard::{ProfileWizard, StepForm, Timeline, WizardError};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::ToastContext;
use crate::router::Route;
use crate::settings;
use crate::storage::BrowserStorage;

/// Playback state of a demo timeline.
#[derive(Clone, PartialEq)]
pub struct Playback {
    /// Number of frames shown so far
    pub shown: usize,
    pub finished: bool,
    pub restart: Callback<()>,
}

impl Playback {
    /// State of the most recently shown frame.
    pub fn current<'a, T>(&self, timeline: &'a Timeline<T>) -> Option<&'a T> {
        self.shown
            .checked_sub(1)
            .and_then(|index| timeline.frames().get(index))
            .map(|frame| &frame.state)
    }
}

fn scaled_millis(delay: Duration) -> u32 {
    let speed = settings::get_settings().demo_speed;
    (delay.as_millis() as f64 * speed).round().min(u32::MAX as f64) as u32
}

/// Play `timeline` with a single chain of timeouts.
///
/// Only the timeout for the next frame is ever pending; it is cancelled when
/// the component unmounts or the timeline is swapped.
#[hook]
pub fn use_timeline<T: 'static>(timeline: Rc<Timeline<T>>) -> Playback {
    let shown = use_state(|| 0usize);

    {
        let shown = shown.clone();
        let timeline = timeline.clone();
        let deps = (*shown, Rc::as_ptr(&timeline) as usize);
        use_effect_with(deps, move |(count, _)| {
            let count = *count;
            let pending = timeline.frames().get(count).map(|frame| {
                Timeout::new(scaled_millis(frame.delay), move || shown.set(count + 1))
            });
            move || drop(pending)
        });
    }

    let restart = {
        let shown = shown.clone();
        Callback::from(move |_| {
            log::debug!("Restarting demo timeline");
            shown.set(0);
        })
    };

    Playback {
        shown: *shown,
        finished: *shown >= timeline.len(),
        restart,
    }
}

/// Form state and submit handler of one wizard step page.
pub struct StepFormHandle<F> {
    pub initial: Rc<F>,
    pub errors: FieldErrors,
    pub on_submit: Callback<F>,
}

/// Load the saved form of step `F` and submit it through the profile wizard.
///
/// The wizard is opened once per page so a save from another tab in the
/// meantime is reported instead of overwritten.
#[hook]
pub fn use_step_form<F: StepForm + 'static>() -> StepFormHandle<F> {
    let wizard = use_mut_ref(|| ProfileWizard::open(BrowserStorage));
    let initial = {
        let wizard = wizard.clone();
        use_memo((), move |_| wizard.borrow().load_step::<F>())
    };
    let errors = use_state(FieldErrors::new);
    let navigator = use_navigator();
    let toast = use_context::<ToastContext>();

    let on_submit = {
        let errors = errors.clone();
        Callback::from(move |form: F| {
            submit(&wizard, &form, &errors, navigator.as_ref(), toast.as_ref());
        })
    };

    StepFormHandle {
        initial,
        errors: (*errors).clone(),
        on_submit,
    }
}

fn submit<F: StepForm>(
    wizard: &Rc<RefCell<ProfileWizard<BrowserStorage>>>,
    form: &F,
    errors: &UseStateHandle<FieldErrors>,
    navigator: Option<&Navigator>,
    toast: Option<&ToastContext>,
) {
    let result = wizard.borrow_mut().submit_step(form);
    match result {
        Ok(outcome) => {
            errors.set(FieldErrors::new());
            log::info!("Step '{}' saved, navigating to {}", outcome.step_id, outcome.next_route);
            match (navigator, Route::recognize(&outcome.next_route)) {
                (Some(navigator), Some(route)) => navigator.push(&route),
                _ => log::error!("No route for {}", outcome.next_route),
            }
        }
        Err(WizardError::Validation { errors: invalid, .. }) => {
            log::debug!("Step '{}' has invalid fields: {:?}", F::STEP_ID, invalid.keys());
            errors.set(invalid);
        }
        Err(WizardError::StaleDraft { .. }) => {
            let revision = wizard.borrow_mut().refresh();
            log::warn!("Profile changed in another tab, now at revision {}", revision);
            if let Some(toast) = toast {
                toast.show_warning(
                    "Your profile was updated in another window. Check this step and save again.".to_string(),
                );
            }
        }
        Err(e) => {
            log::error!("Failed to save step '{}': {}", F::STEP_ID, e);
            if let Some(toast) = toast {
                toast.show_error(format!("Could not save your answers: {}", e));
            }
        }
    }
}

/// Request future handed to [`SubmissionHandle::submit`].
pub type PendingSubmission = Pin<Box<dyn Future<Output = Result<SubmissionResponse, String>>>>;

#[derive(Clone, PartialEq)]
pub struct SubmissionHandle {
    pub submitting: bool,
    /// Per-field messages from a rejected submission
    pub errors: FieldErrors,
    /// Message of a submission that failed for any other reason
    pub failure: Option<String>,
    pub submit: Callback<PendingSubmission>,
    /// Show field errors found before sending
    pub reject: Callback<FieldErrors>,
}

/// Send a marketing form and follow the redirect it answers with.
#[hook]
pub fn use_submission() -> SubmissionHandle {
    let submitting = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let failure = use_state(|| None::<String>);
    let navigator = use_navigator();
    let network_error = crate::i18n::use_locale().t(&crate::i18n::forms::NETWORK_ERROR);

    let submit = {
        let submitting = submitting.clone();
        let errors = errors.clone();
        let failure = failure.clone();
        Callback::from(move |pending: PendingSubmission| {
            if *submitting {
                log::debug!("Submission already in flight, ignoring");
                return;
            }
            submitting.set(true);
            failure.set(None);

            let submitting = submitting.clone();
            let errors = errors.clone();
            let failure = failure.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pending.await {
                    Ok(response) if response.success => {
                        errors.set(FieldErrors::new());
                        let target = response.redirect.as_deref().and_then(Route::recognize);
                        match (navigator, target) {
                            (Some(navigator), Some(route)) => navigator.push(&route),
                            _ => log::warn!("Submission accepted without a known redirect: {:?}", response.redirect),
                        }
                    }
                    Ok(response) => match response.errors {
                        Some(invalid) => errors.set(invalid),
                        None => failure.set(Some(response.message)),
                    },
                    Err(e) => {
                        log::error!("Submission failed: {}", e);
                        failure.set(Some(network_error.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let reject = {
        let errors = errors.clone();
        let failure = failure.clone();
        Callback::from(move |invalid: FieldErrors| {
            log::debug!("Form has invalid fields: {:?}", invalid.keys());
            failure.set(None);
            errors.set(invalid);
        })
    };

    SubmissionHandle {
        submitting: *submitting,
        errors: (*errors).clone(),
        failure: (*failure).clone(),
        submit,
        reject,
    }
}
