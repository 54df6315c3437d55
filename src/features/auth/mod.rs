//! Authentication flow components and their callback surfaces. The flows own
//! no authentication logic themselves: a connector decides how login,
//! registration, recovery, and challenge verification actually complete. The
//! showcase wires them to mock connectors that synthesize responses locally
//! after a delay; a host application would supply connectors backed by its
//! real identity stack.

pub(crate) mod authenticate_box;
pub(crate) mod captcha;
pub(crate) mod mock;
pub(crate) mod register;
pub(crate) mod types;
