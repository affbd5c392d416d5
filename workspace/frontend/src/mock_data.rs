//! Hard-coded carers and scripts played by the demo pages.

use std::time::Duration;

use wizard::Timeline;

use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq)]
pub struct Carer {
    pub name: &'static str,
    pub initials: &'static str,
    pub languages: &'static [&'static str],
    pub background: &'static str,
    pub suburb: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub hourly_rate: u32,
    pub years_experience: u32,
    pub distance_km: f32,
}

pub const CARERS: &[Carer] = &[
    Carer {
        name: "Linda Wu",
        initials: "LW",
        languages: &["Mandarin", "Cantonese", "English"],
        background: "Chinese",
        suburb: "Burwood",
        rating: 4.9,
        reviews: 62,
        hourly_rate: 48,
        years_experience: 8,
        distance_km: 2.4,
    },
    Carer {
        name: "Priya Raman",
        initials: "PR",
        languages: &["Tamil", "Hindi", "English"],
        background: "South Indian",
        suburb: "Parramatta",
        rating: 4.8,
        reviews: 41,
        hourly_rate: 45,
        years_experience: 6,
        distance_km: 5.1,
    },
    Carer {
        name: "Minh Nguyen",
        initials: "MN",
        languages: &["Vietnamese", "English"],
        background: "Vietnamese",
        suburb: "Cabramatta",
        rating: 4.7,
        reviews: 29,
        hourly_rate: 42,
        years_experience: 4,
        distance_km: 7.8,
    },
];

/// Carer the request demo always finds.
pub fn matched_carer() -> &'static Carer {
    &CARERS[0]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Family,
    Carer,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: &'static str,
}

const fn msg(speaker: Speaker, text: &'static str) -> ChatMessage {
    ChatMessage { speaker, text }
}

const CHAT_EN: &[ChatMessage] = &[
    msg(Speaker::Family, "Hi Linda, Mum has a GP appointment on Thursday at 10. Could you take her?"),
    msg(Speaker::Carer, "Of course! I'll pick her up at 9:30 and stay with her during the visit."),
    msg(Speaker::Assistant, "Booking confirmed: Thursday 9:30 to 12:00, Linda Wu."),
    msg(Speaker::Family, "Thank you. She'll be happy to chat in Cantonese on the way."),
    msg(Speaker::Carer, "我们路上可以聊天。See you Thursday!"),
];

const CHAT_ZH: &[ChatMessage] = &[
    msg(Speaker::Family, "Linda 您好，妈妈星期四上午十点要看家庭医生，您能陪她去吗？"),
    msg(Speaker::Carer, "当然可以！我九点半去接她，看病时全程陪同。"),
    msg(Speaker::Assistant, "预约已确认：星期四 9:30 至 12:00，护理员 Linda Wu。"),
    msg(Speaker::Family, "谢谢！路上她可以用粤语和您聊天，她一定很开心。"),
    msg(Speaker::Carer, "好的，星期四见！"),
];

pub fn chat_messages(locale: Locale) -> &'static [ChatMessage] {
    match locale {
        Locale::En => CHAT_EN,
        Locale::Zh => CHAT_ZH,
    }
}

/// What the chat demo shows at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatFrame {
    pub visible: usize,
    /// The next speaker is typing
    pub typing: bool,
}

/// Each message is preceded by a typing indicator.
pub fn chat_timeline(locale: Locale) -> Timeline<ChatFrame> {
    chat_messages(locale)
        .iter()
        .enumerate()
        .fold(Timeline::new(), |timeline, (index, message)| {
            let typing_for = Duration::from_millis(400 + 25 * message.text.chars().count() as u64);
            timeline
                .then(Duration::from_millis(900), ChatFrame { visible: index, typing: true })
                .then(typing_for, ChatFrame { visible: index + 1, typing: false })
        })
}

/// Stages of the voice request demo.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStage {
    Recording,
    Transcribing(String),
    Searching,
    CarerFound,
    CarerArriving { eta_minutes: u32 },
    Arrived,
}

fn transcript(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "I need someone who speaks Cantonese to help Dad after his hip surgery, weekday mornings in Burwood.",
        Locale::Zh => "我需要一位会讲粤语的护理员，在爸爸髋关节手术后帮忙照顾他，工作日上午，在 Burwood。",
    }
}

pub fn request_timeline(locale: Locale) -> Timeline<RequestStage> {
    let typing_speed = match locale {
        Locale::En => Duration::from_millis(35),
        Locale::Zh => Duration::from_millis(90),
    };

    Timeline::new()
        .then(Duration::ZERO, RequestStage::Recording)
        .then(Duration::from_millis(2500), RequestStage::Transcribing(String::new()))
        .type_out(transcript(locale), typing_speed, RequestStage::Transcribing)
        .then(Duration::from_millis(1200), RequestStage::Searching)
        .then(Duration::from_millis(2800), RequestStage::CarerFound)
        .then(Duration::from_millis(3000), RequestStage::CarerArriving { eta_minutes: 15 })
        .then(Duration::from_millis(1500), RequestStage::CarerArriving { eta_minutes: 8 })
        .then(Duration::from_millis(1500), RequestStage::CarerArriving { eta_minutes: 2 })
        .then(Duration::from_millis(1500), RequestStage::Arrived)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_demo_runs_in_order() {
        let timeline = request_timeline(Locale::En);
        assert_eq!(timeline.frames()[0].state, RequestStage::Recording);
        assert_eq!(timeline.last(), Some(&RequestStage::Arrived));

        let searching = timeline
            .frames()
            .iter()
            .position(|f| f.state == RequestStage::Searching)
            .unwrap();
        let RequestStage::Transcribing(text) = &timeline.frames()[searching - 1].state else {
            panic!("transcript should be fully typed before searching");
        };
        assert_eq!(text, transcript(Locale::En));
    }

    #[test]
    fn test_chinese_transcript_types_whole_characters() {
        let timeline = request_timeline(Locale::Zh);
        let typed: Vec<_> = timeline
            .frames()
            .iter()
            .filter_map(|f| match &f.state {
                RequestStage::Transcribing(text) if !text.is_empty() => Some(text.chars().count()),
                _ => None,
            })
            .collect();
        assert_eq!(typed.len(), transcript(Locale::Zh).chars().count());
        assert!(typed.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_chat_reveals_every_message() {
        let timeline = chat_timeline(Locale::En);
        assert_eq!(timeline.len(), CHAT_EN.len() * 2);
        assert_eq!(
            timeline.last(),
            Some(&ChatFrame { visible: CHAT_EN.len(), typing: false })
        );
        assert_eq!(chat_messages(Locale::Zh).len(), CHAT_EN.len());
    }
}
