use yew::prelude::*;

use crate::components::demo::chat_demo::ChatDemo;
use crate::components::demo::request_demo::RequestDemo;
use crate::components::layout::layout::Layout;
use crate::i18n::{Phrase, use_locale};

const REQUEST_TITLE: Phrase = Phrase::new("Ask for help in your own words", "用自己的话寻求帮助");
const CHAT_TITLE: Phrase = Phrase::new("Stay in touch with your carer", "与护理员保持联系");
const NOTE: Phrase = Phrase::new(
    "This is a preview with sample carers. No request is sent.",
    "这是使用示例数据的演示，不会发送任何请求。",
);

#[function_component(DemoPage)]
pub fn demo_page() -> Html {
    let i18n = use_locale();

    html! {
        <Layout>
            <div class="alert mb-6">
                <i class="fas fa-circle-info"></i>
                <span>{i18n.t(&NOTE)}</span>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                <section class="flex flex-col items-center gap-4">
                    <h2 class="text-2xl font-bold">{i18n.t(&REQUEST_TITLE)}</h2>
                    <RequestDemo />
                </section>
                <section class="flex flex-col gap-4">
                    <h2 class="text-2xl font-bold text-center">{i18n.t(&CHAT_TITLE)}</h2>
                    <ChatDemo />
                </section>
            </div>
        </Layout>
    }
}
