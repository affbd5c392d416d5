use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{nav, use_locale};
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let i18n = use_locale();

    let on_toggle_locale = {
        let i18n = i18n.clone();
        Callback::from(move |_| i18n.set_locale.emit(i18n.locale.toggled()))
    };

    let links = html! {
        <>
            <li><Link<Route> to={Route::Families}>{i18n.t(&nav::FAMILIES)}</Link<Route>></li>
            <li><Link<Route> to={Route::BecomeACarer}>{i18n.t(&nav::CARERS)}</Link<Route>></li>
            <li><Link<Route> to={Route::Demo}>{i18n.t(&nav::DEMO)}</Link<Route>></li>
            <li><Link<Route> to={Route::About}>{i18n.t(&nav::ABOUT)}</Link<Route>></li>
        </>
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="navbar-start">
                <div class="dropdown lg:hidden">
                    <div tabindex="0" role="button" aria-label="open menu" class="btn btn-square btn-ghost">
                        <i class="fas fa-bars text-xl"></i>
                    </div>
                    <ul tabindex="0" class="menu menu-sm dropdown-content bg-base-100 rounded-box z-50 mt-3 w-56 p-2 shadow">
                        {links.clone()}
                    </ul>
                </div>
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl gap-2">
                    <i class="fas fa-hand-holding-heart text-primary"></i>
                    {"CareLink"}
                </Link<Route>>
            </div>
            <div class="navbar-center hidden lg:flex">
                <ul class="menu menu-horizontal px-1">{links}</ul>
            </div>
            <div class="navbar-end gap-2">
                <button class="btn btn-ghost btn-sm" onclick={on_toggle_locale} aria-label="switch language">
                    <i class="fas fa-language"></i>
                    {i18n.locale.switch_label()}
                </button>
                <Link<Route> to={Route::Onboarding} classes="btn btn-primary btn-sm">
                    {i18n.t(&nav::GET_STARTED)}
                </Link<Route>>
            </div>
        </div>
    }
}
