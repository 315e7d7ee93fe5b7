//! Transient toast notifications.
//!
//! A toast is a `div.toast.<kind>` appended to the page's toast container. It
//! stays for `toast_display_ms`, plays the `slideOut` animation for
//! `toast_exit_ms`, then removes itself. Each toast owns its own timer pair, so
//! overlapping toasts never interfere.
//!
//! ERROR HANDLING
//! ==============
//! A page without a container silently drops the toast. Any other DOM failure
//! is logged and swallowed; notifying never fails from the caller's side.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::UiConfig;
use crate::error::UiError;

/// Longest delay a browser timer honors; larger values fire immediately.
pub const MAX_TIMER_MS: u32 = 0x7FFF_FFFF;

/// Visual flavor of a toast; doubles as its CSS modifier class.
///
/// Pages may style kinds beyond the built-in four, so any other name is kept
/// verbatim in [`ToastKind::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
    Other(String),
}

impl ToastKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "info" => Self::Info,
            "warning" => Self::Warning,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ToastKind {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<ToastKind> for String {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for ToastKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { message: message.into(), kind }
    }

    /// Class attribute for the toast node.
    pub fn class_name(&self) -> String {
        format!("toast {}", self.kind)
    }
}

/// Timer offsets for one toast, relative to insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    /// When the exit animation starts.
    pub exit_at_ms: u32,
    /// When the node is removed from the container.
    pub remove_at_ms: u32,
}

impl ToastTimeline {
    /// Both durations are clamped to [`MAX_TIMER_MS`] so neither timer fires early.
    pub fn from_config(config: &UiConfig) -> Self {
        let display_ms = config.toast_display_ms.min(MAX_TIMER_MS);
        let exit_ms = config.toast_exit_ms.min(MAX_TIMER_MS);
        Self {
            exit_at_ms: display_ms,
            remove_at_ms: display_ms + exit_ms,
        }
    }

    /// Length of the exit animation.
    pub fn exit_ms(&self) -> u32 {
        self.remove_at_ms - self.exit_at_ms
    }
}

/// Show a toast using the installed page config.
pub fn notify(message: &str, kind: ToastKind) {
    notify_with(&UiConfig::current(), message, kind);
}

/// Show a toast using an explicit config.
pub fn notify_with(config: &UiConfig, message: &str, kind: ToastKind) {
    notify_toast(config, &Toast::new(message, kind));
}

/// Show an already built toast.
pub fn notify_toast(config: &UiConfig, toast: &Toast) {
    match mount(config, toast) {
        Ok(true) => {}
        Ok(false) => log::debug!("no #{} on page; dropped toast: {}", config.toast_container_id, toast.message),
        Err(e) => log::warn!("toast not shown: {e}"),
    }
}

/// Append the toast node and arm its timers. `Ok(false)` means no container.
#[cfg(feature = "hydrate")]
fn mount(config: &UiConfig, toast: &Toast) -> Result<bool, UiError> {
    use gloo_timers::callback::Timeout;

    use crate::util::{dom, style};

    let doc = dom::document()?;
    let Some(container) = doc.get_element_by_id(&config.toast_container_id) else {
        return Ok(false);
    };

    let node = dom::create_html_element(&doc, "div")?;
    node.set_class_name(&toast.class_name());
    node.set_text_content(Some(&toast.message));
    container.append_child(&node).map_err(|e| UiError::from_js(&e))?;

    let timeline = ToastTimeline::from_config(config);
    let exit_ms = timeline.exit_ms();
    Timeout::new(timeline.exit_at_ms, move || {
        if let Err(e) = dom::set_styles(&node, &[("animation", &style::slide_out_animation(exit_ms))]) {
            log::debug!("toast exit animation skipped: {e}");
        }
        Timeout::new(exit_ms, move || node.remove()).forget();
    })
    .forget();

    Ok(true)
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unnecessary_wraps)]
fn mount(_config: &UiConfig, _toast: &Toast) -> Result<bool, UiError> {
    Ok(false)
}
