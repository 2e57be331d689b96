use yew::prelude::*;

use crate::centers::CenterOption;

#[derive(Properties, PartialEq)]
pub struct CenterSelectProps {
    pub options: Vec<CenterOption>,
    /// Value of the selected option, if any.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_change: Callback<Option<String>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Dropdown of centers, with an empty placeholder entry.
#[function_component]
pub fn CenterSelect(props: &CenterSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit((!value.is_empty()).then_some(value));
        })
    };

    html! {
        <select
            onchange={on_change}
            disabled={props.disabled}
            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-white"
        >
            <option value="" selected={props.selected.is_none()}>
                {"Choisir un centre"}
            </option>
            {for props.options.iter().map(|option| {
                let selected =
                    props.selected.as_deref() == Some(option.value.as_str());
                html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        title={option.full_address.clone()}
                        selected={selected}
                    >
                        {&option.label}
                    </option>
                }
            })}
        </select>
    }
}
