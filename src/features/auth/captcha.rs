//! CAPTCHA prompt: fetches a challenge, collects characters, and verifies
//! them through a connector. A bad verdict discards the challenge and
//! requests a fresh one; an affirmative verdict hands control back through
//! `on_continue`. Cancel does nothing beyond notifying the connector.

use crate::app_lib::i18n::I18nStrings;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::types::{Challenge, ChallengeResult, ChallengeVerdict};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Callback surface driven by the CAPTCHA prompt.
#[allow(async_fn_in_trait)]
pub trait CaptchaConnector: Clone + Send + Sync + 'static {
    async fn request_challenge(&self) -> Challenge;
    async fn verify_challenge_chars(&self, result: ChallengeResult) -> ChallengeVerdict;
    fn cancel(&self);
    fn on_continue(&self);
}

#[component]
pub fn CaptchaPrompt<C>(
    connector: C,
    strings: &'static I18nStrings,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView
where
    C: CaptchaConnector,
{
    let challenge = RwSignal::new(None::<Challenge>);
    let (chars, set_chars) = signal(String::new());
    let (bad_challenge, set_bad_challenge) = signal(false);

    let connector_for_request = connector.clone();
    let request_action = Action::new_local(move |_: &()| {
        let connector = connector_for_request.clone();
        async move { connector.request_challenge().await }
    });

    let connector_for_verify = connector.clone();
    let verify_action = Action::new_local(move |result: &ChallengeResult| {
        let connector = connector_for_verify.clone();
        let result = result.clone();
        async move { connector.verify_challenge_chars(result).await }
    });

    // Fetch the first challenge once on mount.
    Effect::new(move |_| {
        if challenge.get().is_none()
            && request_action.value().get().is_none()
            && !request_action.pending().get()
        {
            request_action.dispatch(());
        }
    });

    Effect::new(move |_| {
        if let Some(fresh) = request_action.value().get() {
            challenge.set(Some(fresh));
        }
    });

    let connector_for_continue = connector.clone();
    Effect::new(move |_| {
        if let Some(verdict) = verify_action.value().get() {
            match verdict {
                ChallengeVerdict::Yes => connector_for_continue.on_continue(),
                ChallengeVerdict::BadChallenge => {
                    set_bad_challenge.set(true);
                    set_chars.set(String::new());
                    challenge.set(None);
                    request_action.dispatch(());
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let Some(current) = challenge.get_untracked() else {
            return;
        };
        let submitted = chars.get_untracked();
        if submitted.trim().is_empty() {
            return;
        }

        set_bad_challenge.set(false);
        verify_action.dispatch(ChallengeResult {
            key: current.challenge_key,
            chars: submitted,
        });
    };

    let pending = Signal::derive(move || {
        request_action.pending().get() || verify_action.pending().get()
    });

    let connector_for_cancel = connector;
    view! {
        <form
            class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8"
            on:submit=on_submit
        >
            <p class="text-sm font-medium text-slate-700">{strings.captcha_instruction}</p>

            <div class="mt-4 flex justify-center rounded-lg border border-slate-200 bg-slate-50 p-4">
                {move || match challenge.get() {
                    Some(challenge) => {
                        view! {
                            <img
                                class="h-16"
                                alt="CAPTCHA challenge"
                                src=format!("data:image/png;base64,{}", challenge.png_base64)
                            />
                        }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>

            <input
                id="captcha-chars"
                type="text"
                class="mt-4 w-full rounded-lg border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                placeholder=strings.captcha_placeholder
                autocomplete="off"
                autofocus=autofocus
                prop:value=move || chars.get()
                on:input=move |event| set_chars.set(event_target_value(&event))
            />

            <Show when=move || bad_challenge.get()>
                <div class="mt-3">
                    <Alert kind=AlertKind::Error message=strings.captcha_bad_challenge.to_string() />
                </div>
            </Show>

            <div class="mt-4 flex items-center gap-3">
                <Button button_type="submit" disabled=pending>
                    {strings.captcha_submit}
                </Button>
                <button
                    type="button"
                    class="w-full rounded-lg border border-slate-200 bg-white px-5 py-2.5 text-sm font-medium text-slate-700 hover:bg-slate-50"
                    on:click=move |_| connector_for_cancel.cancel()
                >
                    {strings.captcha_cancel}
                </button>
            </div>

            {move || {
                verify_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })
            }}
        </form>
    }
}
