//! Shared layout wrapper with a header and content container. It centralizes
//! the page chrome so demo pages can focus on content.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps pages with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-slate-900">
                            "Authbox Showcase"
                        </span>
                    </A>
                    <span class="text-xs text-slate-400">
                        {format!("build {}", short_hash(build_info::git_commit_hash()))}
                    </span>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto p-4 sm:p-6">{children()}</div>
            </main>
        </div>
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > 8 { &hash[..8] } else { hash }
}
