//! Registration flow: drives the CAPTCHA prompt against a registration
//! connector. Challenge creation backs the prompt's challenge requests and
//! registration backs verification; the final outcome is delivered through
//! `on_complete` once the prompt continues.

use crate::app_lib::i18n::I18nStrings;
use crate::features::auth::captcha::{CaptchaConnector, CaptchaPrompt};
use crate::features::auth::types::{
    Challenge, ChallengeResult, ChallengeVerdict, RegisterFlowResult,
};
use leptos::logging;
use leptos::prelude::*;
use serde::Serialize;

/// Callback surface driven by the registration flow.
#[allow(async_fn_in_trait)]
pub trait RegistrationConnector: Clone + Send + Sync + 'static {
    /// Connection handed back on success; the showcase uses `()`.
    type Connection: Clone + Serialize + Send + Sync + 'static;

    async fn create_challenge(&self) -> Challenge;
    async fn register(
        &self,
        result: ChallengeResult,
    ) -> RegisterFlowResult<Self::Connection>;
}

/// Adapts a registration connector to the CAPTCHA prompt: a bad-challenge
/// outcome maps to the bad-challenge verdict, success is stored and delivered
/// once the prompt continues.
#[derive(Clone)]
struct RegisterCaptcha<R: RegistrationConnector> {
    connector: R,
    outcome: RwSignal<Option<RegisterFlowResult<R::Connection>>>,
    on_complete: Callback<RegisterFlowResult<R::Connection>>,
}

impl<R: RegistrationConnector> CaptchaConnector for RegisterCaptcha<R> {
    async fn request_challenge(&self) -> Challenge {
        self.connector.create_challenge().await
    }

    async fn verify_challenge_chars(&self, result: ChallengeResult) -> ChallengeVerdict {
        match self.connector.register(result).await {
            RegisterFlowResult::BadChallenge => ChallengeVerdict::BadChallenge,
            success => {
                self.outcome.set(Some(success));
                ChallengeVerdict::Yes
            }
        }
    }

    fn cancel(&self) {
        logging::log!("registration canceled");
    }

    fn on_continue(&self) {
        if let Some(outcome) = self.outcome.get_untracked() {
            self.on_complete.run(outcome);
        }
    }
}

#[component]
pub fn RegisterFlow<R>(
    connector: R,
    strings: &'static I18nStrings,
    on_complete: Callback<RegisterFlowResult<R::Connection>>,
) -> impl IntoView
where
    R: RegistrationConnector,
{
    let outcome = RwSignal::new(None);
    let captcha = RegisterCaptcha {
        connector,
        outcome,
        on_complete,
    };

    view! { <CaptchaPrompt connector=captcha strings=strings /> }
}
