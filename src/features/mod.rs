//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while flow orchestration stays in dedicated feature areas.

pub(crate) mod auth;
