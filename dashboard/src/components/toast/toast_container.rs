use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let toasts = use_context::<ToastContext>()
        .map(|context| context.toasts.clone())
        .unwrap_or_default();

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.into_iter().map(|toast| {
                let key = toast.id.to_string();
                html! {
                    <ToastItem key={key} toast={toast} />
                }
            })}
        </div>
    }
}
