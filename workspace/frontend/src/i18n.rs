//! English / Chinese copy and the persisted locale preference.

use wizard::KeyValueStorage;
use yew::prelude::*;

use crate::storage::BrowserStorage;

/// Storage key of the chosen locale.
pub const LOCALE_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" | "zh-cn" | "zh-hans" => Some(Self::Zh),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Label of the toggle button, shown in the other language
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::En => "中文",
            Self::Zh => "English",
        }
    }

    pub fn load<S: KeyValueStorage>(storage: &S) -> Self {
        storage
            .get_item(LOCALE_KEY)
            .ok()
            .flatten()
            .and_then(|code| Self::parse(&code))
            .unwrap_or_default()
    }

    pub fn save<S: KeyValueStorage>(self, storage: &S) {
        if let Err(e) = storage.set_item(LOCALE_KEY, self.code()) {
            log::warn!("Could not remember locale: {}", e);
        }
    }
}

/// A piece of copy in both languages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phrase {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Phrase {
    pub const fn new(en: &'static str, zh: &'static str) -> Self {
        Self { en, zh }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

pub mod nav {
    use super::Phrase;

    pub const HOME: Phrase = Phrase::new("Home", "首页");
    pub const FAMILIES: Phrase = Phrase::new("For families", "家庭");
    pub const CARERS: Phrase = Phrase::new("Become a carer", "成为护理员");
    pub const ABOUT: Phrase = Phrase::new("About", "关于我们");
    pub const DEMO: Phrase = Phrase::new("See the demo", "观看演示");
    pub const WAITLIST: Phrase = Phrase::new("Join the waitlist", "加入候补名单");
    pub const FEEDBACK: Phrase = Phrase::new("Feedback", "意见反馈");
    pub const GET_STARTED: Phrase = Phrase::new("Get started", "立即开始");
    pub const TAGLINE: Phrase = Phrase::new(
        "Culturally matched home care, in your language.",
        "懂您的文化，说您的语言的居家护理。",
    );
}

pub mod forms {
    use super::Phrase;

    pub const EMAIL: Phrase = Phrase::new("Email", "电子邮箱");
    pub const SUBMIT: Phrase = Phrase::new("Submit", "提交");
    pub const SENDING: Phrase = Phrase::new("Sending...", "正在提交...");
    pub const NETWORK_ERROR: Phrase = Phrase::new(
        "We couldn't reach CareLink. Check your connection and try again.",
        "无法连接到服务器，请检查网络后重试。",
    );
}

#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

impl LocaleContext {
    pub fn t(&self, phrase: &Phrase) -> &'static str {
        phrase.get(self.locale)
    }
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let locale = use_state(|| Locale::load(&BrowserStorage));

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            log::info!("Switching locale to {}", next.code());
            next.save(&BrowserStorage);
            locale.set(next);
        })
    };

    {
        let code = locale.code();
        use_effect_with(code, |code| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("lang", code);
            }
            || ()
        });
    }

    let context = LocaleContext {
        locale: *locale,
        set_locale,
    };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LocaleContext>>
    }
}

/// Current locale, English when rendered outside a [`LocaleProvider`].
#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: Locale::default(),
        set_locale: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard::MemoryStorage;

    #[test]
    fn test_locale_defaults_to_english() {
        let storage = MemoryStorage::new();
        assert_eq!(Locale::load(&storage), Locale::En);

        let storage = MemoryStorage::with_entries([(LOCALE_KEY, "klingon")]);
        assert_eq!(Locale::load(&storage), Locale::En);
    }

    #[test]
    fn test_locale_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        Locale::Zh.save(&storage);
        assert_eq!(storage.get_item(LOCALE_KEY).unwrap().as_deref(), Some("zh"));
        assert_eq!(Locale::load(&storage), Locale::Zh);
    }

    #[test]
    fn test_phrase_lookup() {
        assert_eq!(nav::HOME.get(Locale::En), "Home");
        assert_eq!(nav::HOME.get(Locale::Zh), "首页");
        assert_eq!(Locale::En.toggled(), Locale::Zh);
    }
}
