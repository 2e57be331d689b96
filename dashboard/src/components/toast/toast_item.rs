use crate::contexts::toast::{Toast, ToastKind, use_toast};
use yew::prelude::*;

struct ToastStyle {
    container: &'static str,
    icon: &'static str,
}

fn style_for(kind: ToastKind) -> ToastStyle {
    match kind {
        ToastKind::Error => ToastStyle {
            container: "bg-red-50 dark:bg-red-900 border-red-200 \
                        dark:border-red-800 text-red-700 dark:text-red-400",
            icon: "✕",
        },
        ToastKind::Success => ToastStyle {
            container: "bg-green-50 dark:bg-green-900 border-green-200 \
                        dark:border-green-800 text-green-700 \
                        dark:text-green-400",
            icon: "✓",
        },
        ToastKind::Info => ToastStyle {
            container: "bg-neutral-50 dark:bg-neutral-800 \
                        border-neutral-200 dark:border-neutral-700 \
                        text-neutral-700 dark:text-neutral-300",
            icon: "ℹ",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;
    let style = style_for(toast.kind);

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_| toast_handle.remove(toast_id))
    };

    html! {
        <div
            role="status"
            class={classes!(
                "relative", "p-4", "rounded-lg", "border", "shadow-lg",
                "transition-all", "duration-300", "ease-out",
                style.container
            )}
        >
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{style.icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-lg leading-none text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200"
                    title="Fermer"
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
