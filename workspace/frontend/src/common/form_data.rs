//! Reading submitted `<form>` values.

use std::str::FromStr;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};
use yew::NodeRef;

/// Values of a submitted form, read through `FormData`.
pub struct FormValues(FormData);

impl FormValues {
    pub fn from_ref(form_ref: &NodeRef) -> Option<Self> {
        let form = form_ref.cast::<HtmlFormElement>()?;
        FormData::new_with_form(&form).ok().map(Self)
    }

    pub fn text(&self, name: &str) -> String {
        self.0.get(name).as_string().unwrap_or_default()
    }

    /// `None` for a blank input
    pub fn optional_text(&self, name: &str) -> Option<String> {
        Some(self.text(name)).filter(|value| !value.trim().is_empty())
    }

    /// Every checked value of a checkbox group
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .get_all(name)
            .iter()
            .filter_map(|value| value.dyn_into::<js_sys::JsString>().ok())
            .map(String::from)
            .collect()
    }

    pub fn checked(&self, name: &str) -> bool {
        self.0.has(name)
    }

    /// Blank or unparsable input yields `None`
    pub fn number<T: FromStr>(&self, name: &str) -> Option<T> {
        self.text(name).trim().parse().ok()
    }

    /// Comma or newline separated free text
    pub fn list(&self, name: &str) -> Vec<String> {
        split_list(&self.text(name))
    }
}

pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(" Burwood, Strathfield\nAshfield ,, "),
            vec!["Burwood", "Strathfield", "Ashfield"]
        );
        assert!(split_list("  ").is_empty());
    }
}
