//! Transient notifications. A context-held stack renders in a fixed corner of
//! the viewport; info toasts dismiss themselves after a short delay, success
//! toasts stay until dismissed and may carry a formatted flow result plus a
//! reload control.

use crate::app_lib::{PrettyValue, navigation};
use leptos::prelude::*;

/// How long info toasts stay on screen (milliseconds).
#[cfg(target_arch = "wasm32")]
const INFO_TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
    pub detail: Option<PrettyValue>,
    pub offer_reload: bool,
}

/// Handle for pushing and dismissing toasts, shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<usize>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Shows a short-lived informational toast.
    pub fn info(&self, message: impl Into<String>) {
        let id = self.push(ToastKind::Info, message.into(), None, false);
        self.schedule_dismiss(id);
    }

    /// Shows a sticky success toast, optionally carrying a formatted result
    /// and a reload control.
    pub fn success(
        &self,
        message: impl Into<String>,
        detail: Option<PrettyValue>,
        offer_reload: bool,
    ) {
        self.push(ToastKind::Success, message.into(), detail, offer_reload);
    }

    /// Removes the toast with the given id, if it is still shown.
    pub fn dismiss(&self, id: usize) {
        self.items.update(|items| remove_toast(items, id));
    }

    fn push(
        &self,
        kind: ToastKind,
        message: String,
        detail: Option<PrettyValue>,
        offer_reload: bool,
    ) -> usize {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message,
                detail,
                offer_reload,
            });
        });
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: usize) {
        let toasts = *self;
        gloo_timers::callback::Timeout::new(INFO_TOAST_MS, move || toasts.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: usize) {}
}

fn remove_toast(items: &mut Vec<Toast>, id: usize) {
    items.retain(|toast| toast.id != id);
}

/// Provides the toast context and renders the host stack after the app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <ToastHost />
    }
}

/// Returns the toast handle or a detached fallback.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

#[component]
fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-3">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 shadow"
        }
        ToastKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow"
        }
    };

    view! {
        <div class=class role="status">
            <div class="flex items-start justify-between gap-3">
                <p class="font-medium">{toast.message.clone()}</p>
                <button
                    type="button"
                    class="text-xs font-semibold uppercase tracking-wide opacity-60 hover:opacity-100"
                    on:click=move |_| toasts.dismiss(id)
                >
                    "Dismiss"
                </button>
            </div>
            {toast
                .detail
                .clone()
                .map(|detail| view! { <PrettyDetail detail=detail /> })}
            {toast
                .offer_reload
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="mt-3 rounded-lg border border-slate-200 bg-white px-3 py-1.5 text-xs font-medium text-slate-700 hover:bg-slate-50"
                            on:click=move |_| navigation::reload_page()
                        >
                            "reload"
                        </button>
                    }
                })}
        </div>
    }
}

/// Renders a formatted flow result: strings verbatim, composites as a list
/// with one `key: value` entry per key.
#[component]
fn PrettyDetail(detail: PrettyValue) -> impl IntoView {
    match detail {
        PrettyValue::Text(text) => {
            view! {
                <p class="mt-2">
                    <strong class="font-semibold">{text}</strong>
                </p>
            }
            .into_any()
        }
        PrettyValue::Entries(entries) => {
            view! {
                <ul class="mt-2 space-y-1">
                    {entries
                        .into_iter()
                        .map(|(key, value)| {
                            view! {
                                <li>
                                    <strong class="font-semibold">{format!("{key}: {value}")}</strong>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Toast, ToastKind, Toasts, remove_toast};
    use leptos::prelude::GetUntracked;

    fn plain_toast(id: usize) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: format!("toast {id}"),
            detail: None,
            offer_reload: false,
        }
    }

    #[test]
    fn remove_toast_drops_only_the_matching_id() {
        let mut items = vec![plain_toast(0), plain_toast(1), plain_toast(2)];

        remove_toast(&mut items, 1);

        let ids: Vec<usize> = items.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn remove_toast_with_unknown_id_keeps_the_stack() {
        let mut items = vec![plain_toast(0)];

        remove_toast(&mut items, 7);

        assert_eq!(items.len(), 1);
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let toasts = Toasts::new();

        toasts.info("first");
        toasts.info("second");
        toasts.success("done", None, true);

        let items = toasts.items.get_untracked();
        let ids: Vec<usize> = items.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(items[2].kind, ToastKind::Success);
        assert!(items[2].offer_reload);
    }

    #[test]
    fn dismiss_removes_a_pushed_toast() {
        let toasts = Toasts::new();
        toasts.info("short lived");

        toasts.dismiss(0);

        assert!(toasts.items.get_untracked().is_empty());
    }
}
