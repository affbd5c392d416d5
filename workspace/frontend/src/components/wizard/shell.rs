use wizard::{ProfileWizard, steps};
use yew::prelude::*;
use yew_router::prelude::*;

use super::step_sidebar::StepSidebar;
use crate::components::layout::layout::Layout;
use crate::router::Route;
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub step_id: AttrValue,
    pub intro: AttrValue,
    pub children: Children,
}

/// Page frame shared by every profile-building step.
#[function_component(WizardShell)]
pub fn wizard_shell(props: &Props) -> Html {
    let wizard = ProfileWizard::open(BrowserStorage);
    let title = steps::find(&props.step_id).map(|step| step.label).unwrap_or_default();
    let previous = steps::previous(&props.step_id);

    html! {
        <Layout>
            <div class="flex flex-col lg:flex-row gap-6">
                <StepSidebar
                    entries={wizard.sidebar()}
                    current={props.step_id.clone()}
                    progress={wizard.progress()}
                />
                <section class="card bg-base-100 shadow flex-1">
                    <div class="card-body">
                        {if let Some(previous) = previous {
                            html! {
                                <Link<Route>
                                    to={Route::ProfileStep { step: previous.id.to_string() }}
                                    classes="link link-hover text-sm"
                                >
                                    <i class="fas fa-arrow-left"></i>{format!(" {}", previous.label)}
                                </Link<Route>>
                            }
                        } else {
                            html! {}
                        }}
                        <h2 class="card-title text-2xl">{title}</h2>
                        <p class="opacity-70">{&props.intro}</p>
                        { for props.children.iter() }
                    </div>
                </section>
            </div>
        </Layout>
    }
}
