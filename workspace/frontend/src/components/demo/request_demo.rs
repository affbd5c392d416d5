use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_timeline;
use crate::i18n::{Phrase, use_locale};
use crate::mock_data::{Carer, RequestStage, matched_carer, request_timeline};

const RECORDING: Phrase = Phrase::new("Listening...", "正在聆听...");
const SEARCHING: Phrase = Phrase::new("Finding carers who match", "正在寻找合适的护理员");
const FOUND: Phrase = Phrase::new("We found a match", "已为您找到合适的护理员");
const ARRIVING: Phrase = Phrase::new("On the way", "正在赶来");
const ARRIVED: Phrase = Phrase::new("Linda has arrived", "Linda 已到达");
const REPLAY: Phrase = Phrase::new("Replay", "重新播放");

#[function_component(RequestDemo)]
pub fn request_demo() -> Html {
    let i18n = use_locale();
    let timeline = use_memo(i18n.locale, |locale| request_timeline(*locale));
    let playback = use_timeline(Rc::clone(&timeline));

    let body = match playback.current(&*timeline) {
        None | Some(RequestStage::Recording) => html! {
            <div class="flex flex-col items-center gap-4 py-8">
                <div class="btn btn-circle btn-error btn-lg animate-pulse">
                    <i class="fas fa-microphone text-2xl"></i>
                </div>
                <span class="opacity-70">{i18n.t(&RECORDING)}</span>
            </div>
        },
        Some(RequestStage::Transcribing(text)) => html! {
            <div class="chat chat-end py-4">
                <div class="chat-bubble chat-bubble-primary">
                    {text}<span class="animate-pulse">{"▍"}</span>
                </div>
            </div>
        },
        Some(RequestStage::Searching) => html! {
            <div class="flex flex-col items-center gap-4 py-8">
                <span class="loading loading-dots loading-lg"></span>
                <span>{i18n.t(&SEARCHING)}</span>
            </div>
        },
        Some(RequestStage::CarerFound) => html! {
            <>
                <p class="font-semibold text-success">{i18n.t(&FOUND)}</p>
                <CarerCard carer={matched_carer().clone()} />
            </>
        },
        Some(RequestStage::CarerArriving { eta_minutes }) => html! {
            <>
                <CarerCard carer={matched_carer().clone()} />
                <div class="flex items-center gap-3 mt-4">
                    <i class="fas fa-car-side text-primary text-xl"></i>
                    <span>{format!("{} · {} min", i18n.t(&ARRIVING), eta_minutes)}</span>
                </div>
                <progress class="progress progress-primary w-full" value={15u32.saturating_sub(*eta_minutes).to_string()} max="15"></progress>
            </>
        },
        Some(RequestStage::Arrived) => html! {
            <div class="alert alert-success mt-2">
                <i class="fas fa-house-circle-check"></i>
                <span>{i18n.t(&ARRIVED)}</span>
            </div>
        },
    };

    let on_replay = {
        let restart = playback.restart.clone();
        Callback::from(move |_| restart.emit(()))
    };

    html! {
        <div class="mockup-phone border-primary">
            <div class="camera"></div>
            <div class="display">
                <div class="artboard artboard-demo phone-1 bg-base-100 p-4 justify-start">
                    {body}
                    {if playback.finished {
                        html! {
                            <button class="btn btn-sm btn-ghost mt-4" onclick={on_replay}>
                                <i class="fas fa-rotate-right"></i>{format!(" {}", i18n.t(&REPLAY))}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarerCardProps {
    pub carer: Carer,
}

#[function_component(CarerCard)]
pub fn carer_card(props: &CarerCardProps) -> Html {
    let carer = &props.carer;
    html! {
        <div class="card bg-base-200 w-full">
            <div class="card-body p-4">
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content w-12 rounded-full">
                            <span>{carer.initials}</span>
                        </div>
                    </div>
                    <div>
                        <h3 class="font-bold">{carer.name}</h3>
                        <p class="text-sm opacity-70">
                            {format!("{} · {} km · {} yrs", carer.suburb, carer.distance_km, carer.years_experience)}
                        </p>
                    </div>
                </div>
                <div class="flex flex-wrap gap-1 mt-2">
                    {for carer.languages.iter().map(|language| html! {
                        <span class="badge badge-outline">{*language}</span>
                    })}
                </div>
                <p class="text-sm mt-2">
                    <i class="fas fa-star text-warning"></i>
                    {format!(" {:.1} ({}) · ${}/hr", carer.rating, carer.reviews, carer.hourly_rate)}
                </p>
            </div>
        </div>
    }
}
