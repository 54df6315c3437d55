//! Static UI copy parameterizing the authentication flows. The showcase ships
//! a single English table; a host application would substitute its own
//! localized strings when instantiating the flow components.

/// Copy consumed by the flow components.
pub struct I18nStrings {
    pub auth_login: &'static str,
    pub auth_register: &'static str,
    pub auth_recover: &'static str,
    pub auth_add_device: &'static str,
    pub captcha_instruction: &'static str,
    pub captcha_placeholder: &'static str,
    pub captcha_submit: &'static str,
    pub captcha_bad_challenge: &'static str,
    pub captcha_cancel: &'static str,
}

/// English strings used by the demo pages.
pub static EN: I18nStrings = I18nStrings {
    auth_login: "Sign in",
    auth_register: "Create new",
    auth_recover: "Recover",
    auth_add_device: "Add device",
    captcha_instruction: "Type the characters you see",
    captcha_placeholder: "Characters",
    captcha_submit: "Next",
    captcha_bad_challenge: "The characters you entered are incorrect, please try again.",
    captcha_cancel: "Cancel",
};
