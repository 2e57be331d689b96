use payloads::CenterType;
use yew::prelude::*;

use crate::components::CenterSelect;
use crate::contexts::toast::use_error_toast;
use crate::hooks::use_centers;

const CENTER_TYPES: [(CenterType, &str); 3] = [
    (CenterType::All, "Tous"),
    (CenterType::Formation, "Formation"),
    (CenterType::Exam, "Examen"),
];

#[function_component]
pub fn CentersPage() -> Html {
    let center_type = use_state(CenterType::default);
    let selected = use_state(|| None::<String>);
    let centers_hook = use_centers(*center_type);

    use_error_toast(centers_hook.error.clone());

    // A new type means a new list, the old selection may not be in it
    {
        let selected = selected.clone();
        use_effect_with(*center_type, move |_| selected.set(None));
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |value: Option<String>| selected.set(value))
    };

    let on_refresh = {
        let refetch = centers_hook.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let type_tabs = CENTER_TYPES.iter().map(|(kind, label)| {
        let is_active = *center_type == *kind;
        let onclick = {
            let center_type = center_type.clone();
            let kind = *kind;
            Callback::from(move |_: MouseEvent| center_type.set(kind))
        };
        let class = if is_active {
            "px-3 py-1 rounded-md text-sm font-medium bg-neutral-900 text-white dark:bg-white dark:text-neutral-900"
        } else {
            "px-3 py-1 rounded-md text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-800"
        };
        html! {
            <button key={kind.to_string()} onclick={onclick} class={class}>{*label}</button>
        }
    });

    let selected_details = (*selected).as_ref().and_then(|id| {
        let center = centers_hook.center_by_id(id)?;
        let address = centers_hook.center_address(id);
        Some(html! {
            <div class="mt-4 p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                <h3 class="font-semibold">{&center.name}</h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">{address}</p>
            </div>
        })
    });

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold">{"Centres"}</h2>
                <button
                    onclick={on_refresh}
                    disabled={centers_hook.is_loading}
                    class="text-sm text-neutral-600 dark:text-neutral-300 hover:underline disabled:opacity-50"
                >
                    {if centers_hook.is_loading { "Chargement..." } else { "Actualiser" }}
                </button>
            </div>
            <div class="flex space-x-2">
                {for type_tabs}
            </div>
            if let Some(error) = &centers_hook.error {
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
            }
            <CenterSelect
                options={centers_hook.centers_for_select()}
                selected={(*selected).clone()}
                on_change={on_select}
                disabled={centers_hook.is_loading && centers_hook.centers.is_empty()}
            />
            {selected_details.unwrap_or_default()}
        </div>
    }
}
