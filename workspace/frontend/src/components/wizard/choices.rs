use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxGroupProps {
    pub name: AttrValue,
    pub options: &'static [&'static str],
    #[prop_or_default]
    pub selected: Vec<String>,
}

/// Checkbox per option, all submitted under `name`.
#[function_component(CheckboxGroup)]
pub fn checkbox_group(props: &CheckboxGroupProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
            {for props.options.iter().map(|option| {
                let checked = props.selected.iter().any(|s| s == option);
                html! {
                    <label class="label cursor-pointer justify-start gap-3" key={*option}>
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            name={props.name.clone()}
                            value={*option}
                            checked={checked}
                        />
                        <span class="label-text">{capitalize(option)}</span>
                    </label>
                }
            })}
        </div>
    }
}

fn capitalize(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SaveButtonProps {
    #[prop_or(AttrValue::Static("Save and continue"))]
    pub label: AttrValue,
}

#[function_component(SaveButton)]
pub fn save_button(props: &SaveButtonProps) -> Html {
    html! {
        <div class="card-actions justify-end mt-6">
            <button type="submit" class="btn btn-primary">
                {&props.label}
                <i class="fas fa-arrow-right"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("monday"), "Monday");
        assert_eq!(capitalize("Personal care"), "Personal care");
        assert_eq!(capitalize(""), "");
    }
}
