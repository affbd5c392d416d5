use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, use_locale};
use crate::router::Route;

const TITLE: Phrase = Phrase::new("Care for your community", "服务您的社区");
const INTRO: Phrase = Phrase::new(
    "Families are looking for carers who speak their language. Set your own rates and hours, and work close to home.",
    "许多家庭正在寻找会讲他们语言的护理员。您可以自主定价、安排时间，就近工作。",
);
const BUILD_PROFILE: Phrase = Phrase::new("Build your carer profile", "创建护理员资料");
const REQUIREMENTS_TITLE: Phrase = Phrase::new("What you'll need", "所需条件");

const BENEFITS: &[(&str, Phrase)] = &[
    ("fas fa-dollar-sign", Phrase::new("Keep more of what you earn", "收入更多归您所有")),
    ("fas fa-calendar-days", Phrase::new("Choose when and where you work", "自由选择工作时间和地点")),
    ("fas fa-people-group", Phrase::new("Be matched with families who share your culture", "与文化相通的家庭匹配")),
];

const REQUIREMENTS: &[Phrase] = &[
    Phrase::new("A current national police check", "有效的国家无犯罪记录证明"),
    Phrase::new("Right to work in Australia", "在澳大利亚的合法工作权"),
    Phrase::new("First aid certificate (or willingness to get one)", "急救证书（或愿意考取）"),
];

#[function_component(BecomeACarerPage)]
pub fn become_a_carer_page() -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <div class="max-w-4xl mx-auto space-y-8">
                <div>
                    <h1 class="text-4xl font-bold">{i18n.t(&TITLE)}</h1>
                    <p class="py-6 text-lg">{i18n.t(&INTRO)}</p>
                    <Link<Route> to={Route::ProfileBuilding} classes="btn btn-primary">
                        <i class="fas fa-id-card"></i>{format!(" {}", i18n.t(&BUILD_PROFILE))}
                    </Link<Route>>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {for BENEFITS.iter().map(|(icon, text)| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body items-center text-center">
                                <i class={classes!(*icon, "text-3xl", "text-secondary")}></i>
                                <p>{i18n.t(text)}</p>
                            </div>
                        </div>
                    })}
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t(&REQUIREMENTS_TITLE)}</h2>
                        <ul class="list-disc list-inside space-y-1">
                            {for REQUIREMENTS.iter().map(|item| html! { <li>{i18n.t(item)}</li> })}
                        </ul>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
