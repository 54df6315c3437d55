//! Result and challenge types shared by the authentication flows. Serialized
//! tag and field names are part of the display contract: the pretty printer
//! shows them verbatim in toasts.

use serde::Serialize;

/// End state of an authenticate-box flow, generic over the connection handed
/// back to the caller.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "tag", rename_all = "camelCase")]
pub enum AuthFlowResult<C> {
    #[serde(rename_all = "camelCase")]
    Ok {
        user_number: u64,
        connection: Option<C>,
    },
}

/// Outcome of a registration flow.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RegisterFlowResult<C> {
    #[serde(rename_all = "camelCase")]
    LoginSuccess {
        user_number: u64,
        connection: Option<C>,
    },
    BadChallenge,
}

/// Alias of a freshly added device.
#[derive(Clone, Debug, Serialize)]
pub struct DeviceAlias {
    pub alias: String,
}

/// CAPTCHA challenge presented during registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub png_base64: String,
    pub challenge_key: String,
}

/// User answer to a challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeResult {
    pub key: String,
    pub chars: String,
}

/// Verdict on submitted challenge characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeVerdict {
    Yes,
    BadChallenge,
}
