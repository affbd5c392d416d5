use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::about::AboutPage;
use crate::pages::become_a_carer::BecomeACarerPage;
use crate::pages::confirmation::{OnboardingSuccessPage, ThankYouPage};
use crate::pages::demo::DemoPage;
use crate::pages::families::FamiliesPage;
use crate::pages::feedback::FeedbackPage;
use crate::pages::home::HomePage;
use crate::pages::onboarding::OnboardingPage;
use crate::pages::profile_building::{ProfileBuildingStart, ProfilePreviewPage, step_page};
use crate::pages::waitlist::WaitlistPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/families")]
    Families,
    #[at("/become-a-carer")]
    BecomeACarer,
    #[at("/about")]
    About,
    #[at("/demo")]
    Demo,
    #[at("/waitlist")]
    Waitlist,
    #[at("/feedback")]
    Feedback,
    #[at("/onboarding")]
    Onboarding,
    #[at("/onboarding/success")]
    OnboardingSuccess,
    #[at("/thank-you")]
    ThankYou,
    #[at("/profile-building")]
    ProfileBuilding,
    #[at("/profile-building/preview")]
    ProfilePreview,
    #[at("/profile-building/:step")]
    ProfileStep { step: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Families => html! { <FamiliesPage /> },
        Route::BecomeACarer => html! { <BecomeACarerPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Demo => html! { <DemoPage /> },
        Route::Waitlist => html! { <WaitlistPage /> },
        Route::Feedback => html! { <FeedbackPage /> },
        Route::Onboarding => html! { <OnboardingPage /> },
        Route::OnboardingSuccess => html! { <OnboardingSuccessPage /> },
        Route::ThankYou => html! { <ThankYouPage /> },
        Route::ProfileBuilding => html! { <ProfileBuildingStart /> },
        Route::ProfilePreview => html! { <ProfilePreviewPage /> },
        Route::ProfileStep { step } => {
            log::trace!("Rendering profile step '{}'", step);
            step_page(&step).unwrap_or_else(not_found)
        }
        Route::NotFound => not_found(),
    }
}

fn not_found() -> Html {
    log::warn!("404 - Route not found");
    html! {
        <Layout>
            <div class="hero min-h-[50vh]">
                <div class="hero-content text-center">
                    <div>
                        <h1 class="text-5xl font-bold">{"404"}</h1>
                        <p class="py-6">{"This page doesn't exist."}</p>
                        <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back home"}</Link<Route>>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard::{PREVIEW_ROUTE, steps};

    #[test]
    fn test_every_wizard_route_is_routable() {
        for step in steps::steps() {
            assert_eq!(
                Route::recognize(&step.route()),
                Some(Route::ProfileStep { step: step.id.to_string() })
            );
        }
        assert_eq!(Route::recognize(PREVIEW_ROUTE), Some(Route::ProfilePreview));
    }

    #[test]
    fn test_submission_redirects_are_routable() {
        assert_eq!(Route::recognize("/thank-you"), Some(Route::ThankYou));
        assert_eq!(Route::recognize("/onboarding/success"), Some(Route::OnboardingSuccess));
    }
}
