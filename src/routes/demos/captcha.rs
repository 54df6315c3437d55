//! CAPTCHA demo: runs the prompt against the dummy challenge. Cancel and
//! continue only log, mirroring a host page that owns the surrounding flow.

use crate::app_lib::i18n::EN;
use crate::components::{Alert, AlertKind};
use crate::features::auth::captcha::CaptchaPrompt;
use crate::features::auth::mock::{MOCK_CHALLENGE_CHARS, MockCaptchaConnector};
use leptos::prelude::*;

#[component]
pub fn CaptchaDemo() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4">
            <div class="w-full max-w-md">
                <Alert
                    kind=AlertKind::Info
                    message=format!("This demo accepts the characters {MOCK_CHALLENGE_CHARS}.")
                />
            </div>
            <CaptchaPrompt connector=MockCaptchaConnector strings=&EN autofocus=false />
        </div>
    }
}
