//! Single user-facing error/success channel. Replaces the per-page mix of
//! console logging and blocking alerts with one toast service provided via
//! context and consumed by every list/form page.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.toasts
            .try_update(|toasts| toasts.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        Timeout::new(DISMISS_AFTER_MS, move || {
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not found in context")
}

/// Fixed-position stack rendering the queued toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();
    let toasts = move || notify.toasts.get();

    view! {
        <div class="toast-host">
            {move || toasts().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div
                        class="toast"
                        class:toast--error=toast.kind == ToastKind::Error
                        class:toast--success=toast.kind == ToastKind::Success
                        on:click=move |_| notify.dismiss(id)
                    >
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
