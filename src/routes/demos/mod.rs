//! Demo pages exercising the authentication flows with mock connectors.

mod captcha;
mod login_manage;
mod register;

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell};
use crate::routes::NotFoundContent;
use crate::routes::flows::FlowDemo;
use captcha::CaptchaDemo;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use login_manage::LoginManageDemo;
use register::RegisterDemo;

#[derive(Params, PartialEq, Clone)]
struct FlowParams {
    flow: Option<String>,
}

/// Dispatches `flows/:flow` to the registered demo.
#[component]
pub fn FlowDemoPage() -> impl IntoView {
    let params = use_params::<FlowParams>();

    view! {
        <AppShell>
            {move || {
                let name = params.get().ok().and_then(|params| params.flow);
                match name {
                    None => {
                        let error = AppError::Config("Flow name is required.".to_string());
                        view! { <Alert kind=AlertKind::Error message=error.to_string() /> }
                            .into_any()
                    }
                    Some(name) => {
                        match FlowDemo::from_name(&name) {
                            Some(flow) => {
                                set_flow_title(flow.name());
                                match flow {
                                    FlowDemo::LoginManage => {
                                        view! { <LoginManageDemo /> }.into_any()
                                    }
                                    FlowDemo::Captcha => view! { <CaptchaDemo /> }.into_any(),
                                    FlowDemo::Register => view! { <RegisterDemo /> }.into_any(),
                                }
                            }
                            None => view! { <NotFoundContent /> }.into_any(),
                        }
                    }
                }
            }}
        </AppShell>
    }
}

fn set_flow_title(name: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(name);
    }
}
