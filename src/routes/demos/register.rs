//! Register demo: runs the registration flow end to end against the mock
//! connector and reports the minted identity in a success toast.

use crate::app_lib::PrettyValue;
use crate::app_lib::format::pretty_result;
use crate::app_lib::i18n::EN;
use crate::components::use_toasts;
use crate::features::auth::mock::MockRegistrationConnector;
use crate::features::auth::register::RegisterFlow;
use crate::features::auth::types::RegisterFlowResult;
use leptos::prelude::*;

#[component]
pub fn RegisterDemo() -> impl IntoView {
    let toasts = use_toasts();

    let on_complete = Callback::new(move |result: RegisterFlowResult<()>| {
        let detail = pretty_result(&result).unwrap_or_else(|err| PrettyValue::Text(err.to_string()));
        toasts.success("Identity successfully created!", Some(detail), true);
    });

    view! {
        <div class="flex justify-center">
            <RegisterFlow connector=MockRegistrationConnector strings=&EN on_complete=on_complete />
        </div>
    }
}
