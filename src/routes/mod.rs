mod demos;
mod flows;
mod not_found;

pub(crate) use flows::FlowsPage;
pub(crate) use not_found::{NotFoundContent, NotFoundPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=FlowsPage />
            <Route path=path!("/flows/:flow") view=demos::FlowDemoPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
