use yew::prelude::*;

use crate::contexts::toast::use_error_toast;
use crate::hooks::use_formations;
use crate::utils::{format_date, format_euros};

#[function_component]
pub fn FormationsPage() -> Html {
    let formations_hook = use_formations();
    use_error_toast(formations_hook.error.clone());

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Formations"}</h2>
            {formations_hook.render("formations", |formations, is_loading, _| html! {
                <div class="space-y-4">
                    if is_loading {
                        <p class="text-sm text-neutral-500">{"Actualisation..."}</p>
                    }
                    {for formations.iter().map(|formation| html! {
                        <div
                            key={formation.id.to_string()}
                            class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-700"
                        >
                            <div class="flex justify-between">
                                <h3 class="font-semibold">{&formation.title}</h3>
                                <span class="font-medium">{format_euros(formation.price)}</span>
                            </div>
                            if let Some(description) = &formation.description {
                                <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">{description}</p>
                            }
                            <p class="mt-2 text-sm text-neutral-500">
                                {format!("{} heures", formation.duration_hours)}
                                {match formation.next_session {
                                    Some(date) => format!(" · prochaine session le {}", format_date(date)),
                                    None => String::new(),
                                }}
                            </p>
                        </div>
                    })}
                </div>
            })}
        </div>
    }
}
