use super::*;

use crate::error::UiError;

#[test]
fn api_error_toast_is_generic_error() {
    let notice = api_error_toast(&UiConfig::default());
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.message, "An error occurred. Please try again.");
    assert_eq!(notice.class_name(), "toast error");
}

#[test]
fn api_error_toast_follows_config() {
    let config = UiConfig { api_error_message: "Server unavailable".to_owned(), ..UiConfig::default() };
    assert_eq!(api_error_toast(&config).message, "Server unavailable");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_api_error_accepts_any_display() {
    handle_api_error("request failed: 500");
    handle_api_error(&UiError::NoBody);
    handle_api_error_with(&UiConfig::default(), &404_u16);
}
