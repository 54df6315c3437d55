//! Shared frontend utilities for configuration, errors, result formatting, and
//! navigation. The showcase talks to no backend; everything here supports the
//! demo pages, which synthesize flow responses locally after a delay.
//!
//! Centralizing these helpers keeps the flow demos focused on wiring: build a
//! page, trigger a flow, format the outcome, reload on demand.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod i18n;
pub(crate) mod navigation;

pub(crate) use errors::AppError;
pub(crate) use format::PrettyValue;
