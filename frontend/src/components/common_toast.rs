use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::config::Config;
use crate::tutor_profile::{Notification, NotificationKind};

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

impl From<NotificationKind> for ToastType {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => ToastType::Success,
            NotificationKind::Error => ToastType::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration_ms: Config::toast_duration_ms(),
        }
    }
}

impl From<&Notification> for Toast {
    fn from(notification: &Notification) -> Self {
        Toast::new(notification.message.clone(), notification.kind.into())
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer_eq(ToastQueue::default);

    let add_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration_ms = toast.duration_ms;
            dispatcher.dispatch(ToastAction::Add(toast));

            // Toasts are transient
            let dispatcher = dispatcher.clone();
            Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Remove(toast_id))).forget();
        })
    };

    let remove_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastList />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| remove_toast.emit(toast_id))
    };

    html! {
        <div
            role="status"
            class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                props.toast.toast_type.classes()
            )}
        >
            <span class="mr-3 text-lg font-bold">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200 focus:outline-none">
                {"×"}
            </button>
        </div>
    }
}
