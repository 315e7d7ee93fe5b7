//! Thin lookups over `web_sys` that turn missing globals into [`UiError`]s.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlHeadElement};

use crate::error::UiError;

pub fn document() -> Result<Document, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)?.document().ok_or(UiError::NoDocument)
}

pub fn body(doc: &Document) -> Result<HtmlElement, UiError> {
    doc.body().ok_or(UiError::NoBody)
}

pub fn head(doc: &Document) -> Result<HtmlHeadElement, UiError> {
    doc.head().ok_or(UiError::NoHead)
}

/// Create an element and narrow it to `HtmlElement` so inline styles can be set.
pub fn create_html_element(doc: &Document, tag: &str) -> Result<HtmlElement, UiError> {
    doc.create_element(tag)
        .map_err(|e| UiError::from_js(&e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Dom(format!("<{tag}> is not an HtmlElement")))
}

/// Apply CSS property/value pairs as inline styles.
pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), UiError> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value).map_err(|e| UiError::from_js(&e))?;
    }
    Ok(())
}
