use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_timeline;
use crate::i18n::{Locale, use_locale};
use crate::mock_data::{ChatFrame, Speaker, chat_messages, chat_timeline, matched_carer};

fn speaker_name(speaker: Speaker, locale: Locale) -> &'static str {
    match (speaker, locale) {
        (Speaker::Family, Locale::En) => "You",
        (Speaker::Family, Locale::Zh) => "您",
        (Speaker::Carer, _) => matched_carer().name,
        (Speaker::Assistant, _) => "CareLink",
    }
}

#[function_component(ChatDemo)]
pub fn chat_demo() -> Html {
    let i18n = use_locale();
    let timeline = use_memo(i18n.locale, |locale| chat_timeline(*locale));
    let playback = use_timeline(Rc::clone(&timeline));
    let messages = chat_messages(i18n.locale);

    let frame = playback
        .current(&*timeline)
        .copied()
        .unwrap_or(ChatFrame { visible: 0, typing: false });
    let typing_speaker = messages.get(frame.visible).map(|m| m.speaker);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                {for messages[..frame.visible.min(messages.len())].iter().map(|message| {
                    let side = if message.speaker == Speaker::Family { "chat-end" } else { "chat-start" };
                    let bubble = match message.speaker {
                        Speaker::Family => "chat-bubble chat-bubble-primary",
                        Speaker::Carer => "chat-bubble",
                        Speaker::Assistant => "chat-bubble chat-bubble-info",
                    };
                    html! {
                        <div class={classes!("chat", side)}>
                            <div class="chat-header">{speaker_name(message.speaker, i18n.locale)}</div>
                            <div class={bubble}>{message.text}</div>
                        </div>
                    }
                })}
                {match typing_speaker {
                    Some(speaker) if frame.typing => html! {
                        <div class={classes!("chat", if speaker == Speaker::Family { "chat-end" } else { "chat-start" })}>
                            <div class="chat-bubble"><span class="loading loading-dots loading-sm"></span></div>
                        </div>
                    },
                    _ => html! {},
                }}
                {if playback.finished {
                    let restart = playback.restart.clone();
                    html! {
                        <div class="card-actions justify-end">
                            <button class="btn btn-ghost btn-sm" onclick={move |_| restart.emit(())}>
                                <i class="fas fa-rotate-right"></i>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
