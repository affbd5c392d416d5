use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{nav, use_locale};
use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_locale();

    html! {
        <footer class="footer footer-center bg-base-300 text-base-content p-8 mt-8">
            <nav class="grid grid-flow-col gap-4">
                <Link<Route> to={Route::Home} classes="link link-hover">{i18n.t(&nav::HOME)}</Link<Route>>
                <Link<Route> to={Route::Waitlist} classes="link link-hover">{i18n.t(&nav::WAITLIST)}</Link<Route>>
                <Link<Route> to={Route::Feedback} classes="link link-hover">{i18n.t(&nav::FEEDBACK)}</Link<Route>>
                <Link<Route> to={Route::About} classes="link link-hover">{i18n.t(&nav::ABOUT)}</Link<Route>>
            </nav>
            <aside>
                <p>{i18n.t(&nav::TAGLINE)}</p>
                <p class="text-sm opacity-70">{"© CareLink"}</p>
            </aside>
        </footer>
    }
}
