use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::demo::request_demo::RequestDemo;
use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, nav, use_locale};
use crate::router::Route;

const HEADLINE: Phrase = Phrase::new(
    "Home care from someone who understands",
    "找到真正懂您的居家护理员",
);
const SUBHEADLINE: Phrase = Phrase::new(
    "Tell us what your family needs in your own words and language. We match you with vetted carers who share it.",
    "用您熟悉的语言告诉我们家人的需要，我们为您匹配经过审核、语言文化相通的护理员。",
);

const FEATURES: &[(&str, Phrase, Phrase)] = &[
    (
        "fas fa-language",
        Phrase::new("Your language", "说您的语言"),
        Phrase::new("Carers who speak Mandarin, Cantonese, Vietnamese, Hindi and more.", "护理员会讲普通话、粤语、越南语、印地语等多种语言。"),
    ),
    (
        "fas fa-shield-heart",
        Phrase::new("Checked and insured", "审核与保障"),
        Phrase::new("Every carer holds a current police check and first aid.", "每位护理员都持有有效的无犯罪记录证明和急救证书。"),
    ),
    (
        "fas fa-clock",
        Phrase::new("Care in hours, not weeks", "快速安排"),
        Phrase::new("Describe the help you need and meet a carer the same day.", "描述您的需求，当天即可见到护理员。"),
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <div class="hero py-8">
                <div class="hero-content flex-col lg:flex-row-reverse gap-12">
                    <RequestDemo />
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">{i18n.t(&HEADLINE)}</h1>
                        <p class="py-6 text-lg">{i18n.t(&SUBHEADLINE)}</p>
                        <div class="flex flex-wrap gap-3">
                            <Link<Route> to={Route::Onboarding} classes="btn btn-primary">{i18n.t(&nav::GET_STARTED)}</Link<Route>>
                            <Link<Route> to={Route::Demo} classes="btn btn-outline">{i18n.t(&nav::DEMO)}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
                {for FEATURES.iter().map(|(icon, title, body)| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <i class={classes!(*icon, "text-3xl", "text-primary")}></i>
                            <h2 class="card-title">{i18n.t(title)}</h2>
                            <p>{i18n.t(body)}</p>
                        </div>
                    </div>
                })}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
                <Link<Route> to={Route::Families} classes="card bg-primary text-primary-content shadow hover:shadow-lg">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t(&nav::FAMILIES)}</h2>
                        <i class="fas fa-arrow-right self-end"></i>
                    </div>
                </Link<Route>>
                <Link<Route> to={Route::BecomeACarer} classes="card bg-secondary text-secondary-content shadow hover:shadow-lg">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t(&nav::CARERS)}</h2>
                        <i class="fas fa-arrow-right self-end"></i>
                    </div>
                </Link<Route>>
            </div>
        </Layout>
    }
}
