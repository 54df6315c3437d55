//! Flows index: lists every registered demo flow as a link. The registry maps
//! a unique flow name to the demo page that exercises it; the link hrefs are
//! built from the configured base path.

use crate::app_lib::config::AppConfig;
use crate::components::AppShell;
use leptos::prelude::*;

/// A registered demo flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowDemo {
    LoginManage,
    Captcha,
    Register,
}

impl FlowDemo {
    /// Every registered flow, in display order.
    pub const ALL: [FlowDemo; 3] = [FlowDemo::LoginManage, FlowDemo::Captcha, FlowDemo::Register];

    /// Unique name used in links and routes.
    pub fn name(self) -> &'static str {
        match self {
            FlowDemo::LoginManage => "loginManage",
            FlowDemo::Captcha => "captcha",
            FlowDemo::Register => "register",
        }
    }

    /// Resolves a route parameter back to a registered flow.
    pub fn from_name(name: &str) -> Option<FlowDemo> {
        FlowDemo::ALL.into_iter().find(|flow| flow.name() == name)
    }
}

/// Builds the href for a flow page, e.g. `/flows/captcha` for base path `/`
/// or `/showcase/flows/captcha` for base path `/showcase/`.
pub fn flow_link(base_path: &str, flow_name: &str) -> String {
    format!("{base_path}flows/{flow_name}")
}

#[component]
pub fn FlowsPage() -> impl IntoView {
    let config = AppConfig::load();

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title("Flows");
        }
    });

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="w-full max-w-xl rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8">
                    <h1 class="text-2xl font-semibold text-slate-900">"Flows"</h1>
                    <div class="mt-6 space-y-4">
                        {FlowDemo::ALL
                            .into_iter()
                            .map(|flow| {
                                let name = flow.name();
                                view! {
                                    <aside>
                                        <a
                                            data-page-name=name
                                            href=flow_link(&config.base_path, name)
                                            class="block rounded-lg border border-slate-200 px-4 py-3 hover:bg-slate-50"
                                        >
                                            <h2 class="font-medium text-slate-900">{name}</h2>
                                        </a>
                                    </aside>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowDemo, flow_link};
    use std::collections::HashSet;

    #[test]
    fn flow_link_concatenates_base_and_name() {
        assert_eq!(flow_link("/", "captcha"), "/flows/captcha");
        assert_eq!(flow_link("/", "loginManage"), "/flows/loginManage");
    }

    #[test]
    fn flow_link_respects_non_root_base() {
        assert_eq!(flow_link("/showcase/", "register"), "/showcase/flows/register");
    }

    #[test]
    fn registry_names_are_unique_and_resolvable() {
        let names: HashSet<&str> = FlowDemo::ALL.iter().map(|flow| flow.name()).collect();
        assert_eq!(names.len(), FlowDemo::ALL.len());

        for flow in FlowDemo::ALL {
            assert_eq!(FlowDemo::from_name(flow.name()), Some(flow));
        }
        assert_eq!(FlowDemo::from_name("unknown"), None);
    }
}
