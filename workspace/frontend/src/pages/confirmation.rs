use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, nav, use_locale};
use crate::router::Route;

const THANK_YOU: Phrase = Phrase::new("Thank you!", "谢谢！");
const THANK_YOU_BODY: Phrase = Phrase::new(
    "We've got your message. Keep an eye on your inbox for news from CareLink.",
    "我们已收到您的信息，请留意来自 CareLink 的邮件。",
);
const WELCOME: Phrase = Phrase::new("You're all set", "提交成功");
const WELCOME_BODY: Phrase = Phrase::new(
    "Our care team will contact you within one business day.",
    "我们的护理团队会在一个工作日内与您联系。",
);
const CARER_NEXT: Phrase = Phrase::new(
    "Carers can start their profile now to be matched sooner.",
    "护理员现在就可以创建资料，更快获得匹配。",
);
const BUILD_PROFILE: Phrase = Phrase::new("Build your profile", "创建资料");

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    title: &'static Phrase,
    body: &'static Phrase,
    #[prop_or_default]
    children: Children,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <div class="hero min-h-[50vh]">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <i class="fas fa-circle-check text-6xl text-success"></i>
                        <h1 class="text-4xl font-bold mt-4">{i18n.t(props.title)}</h1>
                        <p class="py-6">{i18n.t(props.body)}</p>
                        { for props.children.iter() }
                        <Link<Route> to={Route::Home} classes="btn btn-ghost">{i18n.t(&nav::HOME)}</Link<Route>>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[function_component(ThankYouPage)]
pub fn thank_you_page() -> Html {
    html! { <Confirmation title={&THANK_YOU} body={&THANK_YOU_BODY} /> }
}

#[function_component(OnboardingSuccessPage)]
pub fn onboarding_success_page() -> Html {
    let i18n = use_locale();

    html! {
        <Confirmation title={&WELCOME} body={&WELCOME_BODY}>
            <p class="pb-4">{i18n.t(&CARER_NEXT)}</p>
            <Link<Route> to={Route::ProfileBuilding} classes="btn btn-primary mb-2">{i18n.t(&BUILD_PROFILE)}</Link<Route>>
        </Confirmation>
    }
}
