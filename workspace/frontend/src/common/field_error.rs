use common::FieldErrors;
use yew::prelude::*;

/// Messages reported for `field`, also matching its camelCase spelling and
/// nested entries (`entries[0].role` belongs to `entries`).
pub fn messages_for<'a>(errors: &'a FieldErrors, field: &str) -> Vec<&'a str> {
    let camel = to_camel_case(field);
    errors
        .iter()
        .filter(|(key, _)| {
            key.as_str() == field
                || key.as_str() == camel
                || key.starts_with(&format!("{}[", field))
                || key.starts_with(&format!("{}.", field))
        })
        .flat_map(|(_, messages)| messages.iter().map(String::as_str))
        .collect()
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub errors: FieldErrors,
    pub field: AttrValue,
    /// Ignore errors of nested entries
    #[prop_or_default]
    pub exact: bool,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    let messages: Vec<&str> = if props.exact {
        props
            .errors
            .get(props.field.as_str())
            .map(|messages| messages.iter().map(String::as_str).collect())
            .unwrap_or_default()
    } else {
        messages_for(&props.errors, &props.field)
    };
    if messages.is_empty() {
        return html! {};
    }

    html! {
        <label class="label">
            {for messages.into_iter().map(|message| html! {
                <span class="label-text-alt text-error">{message}</span>
            })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(entries: &[(&str, &str)]) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (key, message) in entries {
            errors.entry(key.to_string()).or_default().push(message.to_string());
        }
        errors
    }

    #[test]
    fn test_matches_both_spellings() {
        let errors = errors(&[("hourlyRate", "too low"), ("time_slots", "pick one")]);
        assert_eq!(messages_for(&errors, "hourly_rate"), vec!["too low"]);
        assert_eq!(messages_for(&errors, "time_slots"), vec!["pick one"]);
    }

    #[test]
    fn test_nested_entries_roll_up() {
        let errors = errors(&[
            ("entries[0].employer", "This field is required"),
            ("entries[1]", "End year cannot be before start year"),
            ("entry_count", "unrelated"),
        ]);
        assert_eq!(messages_for(&errors, "entries").len(), 2);
    }
}
