use yew::prelude::*;

use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, use_locale};

const TITLE: Phrase = Phrase::new("About CareLink", "关于 CareLink");
const STORY: Phrase = Phrase::new(
    "CareLink started when our founders struggled to find a carer who could talk with their grandmother in Cantonese. Language and culture shape how people want to be cared for, so we built a service that puts them first.",
    "CareLink 的创始人曾经很难为奶奶找到一位会讲粤语的护理员。语言和文化决定了人们希望被照顾的方式，所以我们创建了一个以此为先的服务。",
);
const STATUS: Phrase = Phrase::new(
    "We're preparing to launch in Sydney. Join the waitlist to hear when we open in your area.",
    "我们即将在悉尼上线。加入候补名单，第一时间获知您所在地区的开放消息。",
);

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <article class="prose lg:prose-lg max-w-3xl mx-auto">
                <h1>{i18n.t(&TITLE)}</h1>
                <p>{i18n.t(&STORY)}</p>
                <p>{i18n.t(&STATUS)}</p>
            </article>
        </Layout>
    }
}
