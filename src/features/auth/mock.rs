//! Mock connectors backing the showcase demos. Responses are synthesized
//! locally after an artificial delay; nothing here talks to a backend. The
//! fixed challenge solution and user numbers are display fixtures only.

use crate::components::Toasts;
use crate::features::auth::authenticate_box::AuthConnector;
use crate::features::auth::captcha::CaptchaConnector;
use crate::features::auth::register::RegistrationConnector;
use crate::features::auth::types::{
    AuthFlowResult, Challenge, ChallengeResult, ChallengeVerdict, DeviceAlias, RegisterFlowResult,
};
use gloo_timers::future::TimeoutFuture;
use leptos::logging;

/// Characters that solve the mock challenge.
pub const MOCK_CHALLENGE_CHARS: &str = "8wJ6Q";
/// User number returned by the authenticate-box mocks.
pub const MOCK_USER_NUMBER: u64 = 1234;
/// User number minted by the mock registration.
pub const REGISTERED_USER_NUMBER: u64 = 12356;

const AUTH_DELAY_MS: u32 = 400;
const CAPTCHA_DELAY_MS: u32 = 1_000;
const REGISTER_DELAY_MS: u32 = 2_000;

// 1x1 transparent PNG; the accepted answer is MOCK_CHALLENGE_CHARS regardless
// of what the image shows.
const DUMMY_CHALLENGE_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// The fixed challenge shown by every demo.
pub fn dummy_challenge() -> Challenge {
    Challenge {
        png_base64: DUMMY_CHALLENGE_PNG.to_string(),
        challenge_key: "dummy-challenge-key".to_string(),
    }
}

/// Checks submitted characters against the fixed mock solution.
pub fn verify_mock_chars(chars: &str) -> ChallengeVerdict {
    if chars == MOCK_CHALLENGE_CHARS {
        ChallengeVerdict::Yes
    } else {
        ChallengeVerdict::BadChallenge
    }
}

/// Outcome of the mock registration for the submitted characters.
pub fn mock_register_result(chars: &str) -> RegisterFlowResult<()> {
    if chars != MOCK_CHALLENGE_CHARS {
        return RegisterFlowResult::BadChallenge;
    }

    RegisterFlowResult::LoginSuccess {
        user_number: REGISTERED_USER_NUMBER,
        connection: None,
    }
}

fn canned_success() -> AuthFlowResult<()> {
    AuthFlowResult::Ok {
        user_number: MOCK_USER_NUMBER,
        connection: None,
    }
}

async fn simulate_latency(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Authenticate-box connector returning canned successes. Each callback shows
/// an info toast naming the action that fired.
#[derive(Clone, Copy)]
pub struct MockAuthConnector {
    toasts: Toasts,
}

impl MockAuthConnector {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl AuthConnector for MockAuthConnector {
    type Connection = ();

    async fn add_device(&self) -> DeviceAlias {
        self.toasts.info("Added device");
        simulate_latency(AUTH_DELAY_MS).await;
        DeviceAlias {
            alias: "My Device".to_string(),
        }
    }

    async fn login(&self) -> AuthFlowResult<()> {
        self.toasts.info("Logged in");
        simulate_latency(AUTH_DELAY_MS).await;
        canned_success()
    }

    async fn register(&self) -> AuthFlowResult<()> {
        self.toasts.info("Registered");
        simulate_latency(AUTH_DELAY_MS).await;
        canned_success()
    }

    async fn recover(&self) -> AuthFlowResult<()> {
        self.toasts.info("Recovered");
        simulate_latency(AUTH_DELAY_MS).await;
        canned_success()
    }
}

/// CAPTCHA connector resolving the dummy challenge and checking the fixed
/// answer. Cancel and continue only log.
#[derive(Clone, Copy)]
pub struct MockCaptchaConnector;

impl CaptchaConnector for MockCaptchaConnector {
    async fn request_challenge(&self) -> Challenge {
        simulate_latency(CAPTCHA_DELAY_MS).await;
        dummy_challenge()
    }

    async fn verify_challenge_chars(&self, result: ChallengeResult) -> ChallengeVerdict {
        simulate_latency(CAPTCHA_DELAY_MS).await;
        verify_mock_chars(&result.chars)
    }

    fn cancel(&self) {
        logging::log!("canceled");
    }

    fn on_continue(&self) {
        logging::log!("Done");
    }
}

/// Registration connector minting a fixed user number.
#[derive(Clone, Copy)]
pub struct MockRegistrationConnector;

impl RegistrationConnector for MockRegistrationConnector {
    type Connection = ();

    async fn create_challenge(&self) -> Challenge {
        simulate_latency(REGISTER_DELAY_MS).await;
        dummy_challenge()
    }

    async fn register(&self, result: ChallengeResult) -> RegisterFlowResult<()> {
        simulate_latency(REGISTER_DELAY_MS).await;
        mock_register_result(&result.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::{canned_success, mock_register_result, verify_mock_chars};
    use crate::features::auth::types::{AuthFlowResult, ChallengeVerdict, RegisterFlowResult};

    #[test]
    fn correct_chars_pass_verification() {
        assert_eq!(verify_mock_chars("8wJ6Q"), ChallengeVerdict::Yes);
    }

    #[test]
    fn any_other_chars_yield_bad_challenge() {
        for chars in ["", "8wj6q", "8wJ6Q ", "abcde", "8wJ6"] {
            assert_eq!(verify_mock_chars(chars), ChallengeVerdict::BadChallenge);
        }
    }

    #[test]
    fn registration_mints_the_fixed_user_number() {
        match mock_register_result("8wJ6Q") {
            RegisterFlowResult::LoginSuccess {
                user_number,
                connection,
            } => {
                assert_eq!(user_number, 12356);
                assert!(connection.is_none());
            }
            RegisterFlowResult::BadChallenge => panic!("expected loginSuccess"),
        }
    }

    #[test]
    fn registration_rejects_wrong_chars() {
        assert!(matches!(
            mock_register_result("nope"),
            RegisterFlowResult::BadChallenge
        ));
        assert!(matches!(
            mock_register_result(""),
            RegisterFlowResult::BadChallenge
        ));
    }

    #[test]
    fn canned_success_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(canned_success()).expect("serializable");

        assert_eq!(value["tag"], "ok");
        assert_eq!(value["userNumber"], 1234);
        assert!(value["connection"].is_null());
    }

    #[test]
    fn register_success_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(mock_register_result("8wJ6Q")).expect("serializable");

        assert_eq!(value["kind"], "loginSuccess");
        assert_eq!(value["userNumber"], 12356);
    }

    #[test]
    fn auth_flow_result_is_tagged_ok() {
        let value =
            serde_json::to_value(AuthFlowResult::<()>::Ok {
                user_number: 1,
                connection: None,
            })
            .expect("serializable");

        assert_eq!(value["tag"], "ok");
    }
}
