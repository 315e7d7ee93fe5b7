//! Page-level configuration for the helpers.
//!
//! DESIGN
//! ======
//! Defaults match the markup and backend routes the portal ships with, so a
//! page without a config block behaves exactly like one with an empty object.
//! A page can override fields with a JSON `<script>` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::cell::RefCell;

use serde::Deserialize;

use crate::error::UiError;

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portal-ui-config";

thread_local! {
    static CURRENT: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Id of the element toasts are appended to.
    pub toast_container_id: String,
    /// How long a toast stays fully visible, in milliseconds.
    pub toast_display_ms: u32,
    /// Length of the `slideOut` exit animation, in milliseconds.
    pub toast_exit_ms: u32,
    pub auth_check_endpoint: String,
    /// Message shown by [`crate::util::report::handle_api_error`].
    pub api_error_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_container_id: "toast-container".to_owned(),
            toast_display_ms: 3000,
            toast_exit_ms: 300,
            auth_check_endpoint: "/api/auth/check".to_owned(),
            api_error_message: "An error occurred. Please try again.".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Make this the config used by helpers that take no explicit config.
    pub fn install(self) {
        CURRENT.with(|current| *current.borrow_mut() = self);
    }

    /// The installed config, or defaults if none was installed.
    pub fn current() -> Self {
        CURRENT.with(|current| current.borrow().clone())
    }

    /// Read the config block from the current page.
    ///
    /// Falls back to defaults when the block is absent or malformed.
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let text = crate::util::dom::document()
                .ok()
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match text {
                Some(text) => Self::from_json(&text).unwrap_or_else(|e| {
                    log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
