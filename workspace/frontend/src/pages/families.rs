use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, nav, use_locale};
use crate::router::Route;

const TITLE: Phrase = Phrase::new("Care for the people you love", "照顾您所爱的人");
const INTRO: Phrase = Phrase::new(
    "Whether it's help after a hospital stay, a few hours of company each week or support at home every day, CareLink finds a carer who fits your family.",
    "无论是出院后的照料、每周几个小时的陪伴，还是每天的居家支持，CareLink 都能为您的家庭找到合适的护理员。",
);

const STEPS: &[(Phrase, Phrase)] = &[
    (
        Phrase::new("Tell us what you need", "告诉我们您的需求"),
        Phrase::new("Speak or type in your own language. No forms full of jargon.", "用您自己的语言说出或写下需求，无需填写复杂的表格。"),
    ),
    (
        Phrase::new("Meet your matches", "认识为您匹配的护理员"),
        Phrase::new("See carers who share your language and culture, with reviews from other families.", "查看与您语言文化相通的护理员，以及其他家庭的评价。"),
    ),
    (
        Phrase::new("Book and stay in touch", "预约并保持联系"),
        Phrase::new("Arrange visits and chat with your carer in one place.", "在同一个地方安排上门时间并与护理员沟通。"),
    ),
];

#[function_component(FamiliesPage)]
pub fn families_page() -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <div class="max-w-3xl mx-auto">
                <h1 class="text-4xl font-bold">{i18n.t(&TITLE)}</h1>
                <p class="py-6 text-lg">{i18n.t(&INTRO)}</p>
                <ul class="steps steps-vertical">
                    {for STEPS.iter().map(|(title, body)| html! {
                        <li class="step step-primary text-left">
                            <div class="py-2">
                                <h2 class="font-semibold">{i18n.t(title)}</h2>
                                <p class="opacity-70">{i18n.t(body)}</p>
                            </div>
                        </li>
                    })}
                </ul>
                <div class="flex gap-3 mt-8">
                    <Link<Route> to={Route::Onboarding} classes="btn btn-primary">{i18n.t(&nav::GET_STARTED)}</Link<Route>>
                    <Link<Route> to={Route::Demo} classes="btn btn-ghost">{i18n.t(&nav::DEMO)}</Link<Route>>
                </div>
            </div>
        </Layout>
    }
}
