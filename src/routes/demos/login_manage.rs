//! Login/manage demo: drives the authenticate box with mock callbacks and
//! reports the resolved outcome in a success toast with a reload control.

use crate::app_lib::PrettyValue;
use crate::app_lib::format::pretty_result;
use crate::app_lib::i18n::EN;
use crate::components::use_toasts;
use crate::features::auth::authenticate_box::{AuthBoxTemplates, AuthenticateBox};
use crate::features::auth::mock::MockAuthConnector;
use crate::features::auth::types::AuthFlowResult;
use leptos::prelude::*;

/// Copy matching the manage entry point of a host application.
const MANAGE_TEMPLATES: AuthBoxTemplates = AuthBoxTemplates {
    title: "Manage your identity",
    lead: "Sign in to manage devices, or create and recover an identity.",
};

#[component]
pub fn LoginManageDemo() -> impl IntoView {
    let toasts = use_toasts();
    let connector = MockAuthConnector::new(toasts);

    let on_complete = Callback::new(move |result: AuthFlowResult<()>| {
        let detail = pretty_result(&result).unwrap_or_else(|err| PrettyValue::Text(err.to_string()));
        toasts.success("Authentication complete!", Some(detail), true);
    });

    view! {
        <div class="flex justify-center">
            <AuthenticateBox
                connector=connector
                templates=MANAGE_TEMPLATES
                strings=&EN
                on_complete=on_complete
            />
        </div>
    }
}
