//! Generic reporting for failed API calls.
//!
//! The detailed error goes to the console; the user only sees the configured
//! generic message as an error toast.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt;

use crate::config::UiConfig;
use crate::util::toast::{self, Toast, ToastKind};

/// Toast shown for any failed API call.
pub fn api_error_toast(config: &UiConfig) -> Toast {
    Toast::new(config.api_error_message.as_str(), ToastKind::Error)
}

/// Log `error` and tell the user something went wrong.
pub fn handle_api_error<E: fmt::Display + ?Sized>(error: &E) {
    handle_api_error_with(&UiConfig::current(), error);
}

pub fn handle_api_error_with<E: fmt::Display + ?Sized>(config: &UiConfig, error: &E) {
    log::error!("API error: {error}");
    toast::notify_toast(config, &api_error_toast(config));
}
