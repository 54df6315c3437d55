//! Minimalistic 404 page for unknown routes and unregistered flows.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page with the AppShell wrapper. Use this for
/// top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Inner 404 content without AppShell. Use inside pages that already provide
/// the shell.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-6xl font-black text-slate-200 select-none">"404"</h1>
            <p class="mt-2 text-xl font-semibold text-slate-900">"Page not found"</p>
            <p class="mt-4 text-slate-500 max-w-sm">
                "The flow you requested is not registered in this showcase."
            </p>
            <A
                href="/"
                {..}
                class="mt-6 inline-flex items-center rounded-lg bg-slate-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-slate-700"
            >
                "Back to flows"
            </A>
        </div>
    }
}
