//! Toast stack for `#toast-container` and the signal-backed notifier feeding it.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::toasts::{Notifier, ToastKind, ToastState};
use crate::util::timers::OneShotTimer;

/// Queues toasts into shared state and dismisses each after `dismiss_ms`.
#[derive(Clone, Copy, Debug)]
pub struct SignalNotifier<T> {
    toasts: RwSignal<ToastState>,
    timer: T,
    dismiss_ms: u32,
}

impl<T: OneShotTimer> SignalNotifier<T> {
    pub fn new(toasts: RwSignal<ToastState>, timer: T, dismiss_ms: u32) -> Self {
        Self { toasts, timer, dismiss_ms }
    }
}

impl<T: OneShotTimer> Notifier for SignalNotifier<T> {
    fn notify(&self, message: &str, kind: ToastKind) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(message, kind));
        let toasts = self.toasts;
        self.timer.after(
            self.dismiss_ms,
            Box::new(move || {
                toasts.update(|t| {
                    t.dismiss(id);
                });
            }),
        );
    }
}

#[component]
pub fn ToastStack(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <For
            each=move || toasts.with(|t| t.items.clone())
            key=|toast| toast.id
            children=|toast| {
                view! { <div class=format!("toast {}", toast.kind.css_class())>{toast.message}</div> }
            }
        />
    }
}
