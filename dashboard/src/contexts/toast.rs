//! Toast notifications.
//!
//! The queue lives in a reducer provided by [`ToastProvider`] and reaches
//! views through the context, never through a global.

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration: Some(5000),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl ToastState {
    pub fn get(&self, id: Uuid) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                // Re-adding an id replaces the old toast in place
                match toasts.iter_mut().find(|t| t.id == toast.id) {
                    Some(existing) => *existing = toast,
                    None => toasts.push(toast),
                }
            }
            ToastAction::Remove(id) => {
                if self.get(id).is_none() {
                    return self;
                }
                toasts.retain(|toast| toast.id != id);
            }
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    /// Show a toast, scheduling its removal if it has a duration.
    /// Returns the id to remove it early.
    pub fn add(&self, toast: Toast) -> Uuid {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }

        toast_id
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.add(Toast::error(message))
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.add(Toast::success(message))
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

/// Raise an error toast each time `error` changes to a message.
#[hook]
pub fn use_error_toast(error: Option<String>) {
    let toasts = use_toast();
    use_effect_with(error, move |error| {
        if let Some(message) = error {
            toasts.error(message.clone());
        }
    });
}
