//! Authenticate box: the entry surface of the login/register/recover flows.
//! The box renders one action per connector callback and reports the flow
//! result through `on_complete` once login, registration, or recovery
//! resolves. Adding a device does not complete the flow.

use crate::app_lib::i18n::I18nStrings;
use crate::components::{Button, Spinner};
use crate::features::auth::types::{AuthFlowResult, DeviceAlias};
use leptos::prelude::*;
use serde::Serialize;

/// Callback surface driven by the authenticate box. Connector failures are
/// not handled here; a rejected future propagates to the caller.
#[allow(async_fn_in_trait)]
pub trait AuthConnector: Clone + Send + Sync + 'static {
    /// Connection handed back on success; the showcase uses `()`.
    type Connection: Clone + Serialize + Send + Sync + 'static;

    async fn add_device(&self) -> DeviceAlias;
    async fn login(&self) -> AuthFlowResult<Self::Connection>;
    async fn register(&self) -> AuthFlowResult<Self::Connection>;
    async fn recover(&self) -> AuthFlowResult<Self::Connection>;
}

/// Page copy for one instantiation of the box.
#[derive(Clone, Copy)]
pub struct AuthBoxTemplates {
    pub title: &'static str,
    pub lead: &'static str,
}

#[component]
pub fn AuthenticateBox<A>(
    connector: A,
    templates: AuthBoxTemplates,
    strings: &'static I18nStrings,
    on_complete: Callback<AuthFlowResult<A::Connection>>,
) -> impl IntoView
where
    A: AuthConnector,
{
    let connector_for_login = connector.clone();
    let login_action = Action::new_local(move |_: &()| {
        let connector = connector_for_login.clone();
        async move { connector.login().await }
    });

    let connector_for_register = connector.clone();
    let register_action = Action::new_local(move |_: &()| {
        let connector = connector_for_register.clone();
        async move { connector.register().await }
    });

    let connector_for_recover = connector.clone();
    let recover_action = Action::new_local(move |_: &()| {
        let connector = connector_for_recover.clone();
        async move { connector.recover().await }
    });

    let connector_for_device = connector.clone();
    let add_device_action = Action::new_local(move |_: &()| {
        let connector = connector_for_device.clone();
        async move { connector.add_device().await }
    });

    let pending = Signal::derive(move || {
        login_action.pending().get()
            || register_action.pending().get()
            || recover_action.pending().get()
            || add_device_action.pending().get()
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            on_complete.run(result);
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            on_complete.run(result);
        }
    });

    Effect::new(move |_| {
        if let Some(result) = recover_action.value().get() {
            on_complete.run(result);
        }
    });

    view! {
        <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8">
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-slate-900">{templates.title}</h1>
                <p class="text-sm text-slate-500">{templates.lead}</p>
            </div>

            <div class="mt-6 space-y-3">
                <Button disabled=pending on:click=move |_| { login_action.dispatch(()); }>
                    {strings.auth_login}
                </Button>
                <Button disabled=pending on:click=move |_| { register_action.dispatch(()); }>
                    {strings.auth_register}
                </Button>
                <Button disabled=pending on:click=move |_| { recover_action.dispatch(()); }>
                    {strings.auth_recover}
                </Button>
                <button
                    type="button"
                    disabled=move || pending.get()
                    class="w-full rounded-lg border border-slate-200 bg-white px-5 py-2.5 text-sm font-medium text-slate-700 hover:bg-slate-50"
                    on:click=move |_| { add_device_action.dispatch(()); }
                >
                    {strings.auth_add_device}
                </button>
            </div>

            {move || pending.get().then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })}
        </div>
    }
}
