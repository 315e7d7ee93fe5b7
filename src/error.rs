//! Error taxonomy for DOM and config plumbing.
//!
//! Public helpers never return these; they log and degrade instead. The enum
//! exists so internal steps can use `?` and the single log site can say what
//! went wrong.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no window object")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("document has no head")]
    NoHead,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl UiError {
    /// Wrap a thrown JS value.
    pub(crate) fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
