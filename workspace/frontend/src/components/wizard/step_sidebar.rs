use wizard::SidebarEntry;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<SidebarEntry>,
    /// Step being edited
    pub current: AttrValue,
    pub progress: u8,
}

#[function_component(StepSidebar)]
pub fn step_sidebar(props: &Props) -> Html {
    html! {
        <aside class="card bg-base-100 shadow w-full lg:w-72 shrink-0">
            <div class="card-body p-4">
                <div class="flex justify-between items-center text-sm mb-1">
                    <span class="font-semibold">{"Your profile"}</span>
                    <span>{format!("{}%", props.progress)}</span>
                </div>
                <progress class="progress progress-primary w-full" value={props.progress.to_string()} max="100"></progress>
                <ul class="menu p-0 mt-2">
                    {for props.entries.iter().map(|entry| {
                        let active = entry.id == props.current.as_str();
                        let icon = if entry.completed {
                            "fas fa-circle-check text-success"
                        } else {
                            "far fa-circle opacity-40"
                        };
                        html! {
                            <li key={entry.id}>
                                <Link<Route>
                                    to={Route::ProfileStep { step: entry.id.to_string() }}
                                    classes={classes!(active.then_some("active"))}
                                >
                                    <i class={icon}></i>
                                    {entry.label}
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
                <Link<Route> to={Route::ProfilePreview} classes="btn btn-outline btn-sm mt-2">
                    <i class="fas fa-eye"></i>{" Preview profile"}
                </Link<Route>>
            </div>
        </aside>
    }
}
