use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod i18n;
pub mod router;
pub mod settings;
pub mod storage;

use crate::common::toast::ToastProvider;
use crate::i18n::LocaleProvider;
use crate::router::{Route, switch};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LocaleProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </LocaleProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CareLink Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
