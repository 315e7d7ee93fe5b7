//! Keyframes used by the toast exit animation.
//!
//! Injected once from the module-load entry point. Calling
//! [`inject_slide_out_style`] again appends a duplicate rule; the browser
//! tolerates that, so there is no guard.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Name of the keyframes rule referenced by toast nodes.
pub const SLIDE_OUT: &str = "slideOut";

pub const SLIDE_OUT_KEYFRAMES: &str = "
    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
";

/// CSS `animation` value that plays the exit keyframes over `exit_ms`.
pub fn slide_out_animation(exit_ms: u32) -> String {
    format!("{SLIDE_OUT} {}s", f64::from(exit_ms) / 1000.0)
}

/// Append a `<style>` element with the `slideOut` keyframes to `<head>`.
pub fn inject_slide_out_style() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = append_style(SLIDE_OUT_KEYFRAMES) {
            log::warn!("slideOut style not injected: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn append_style(css: &str) -> Result<(), crate::error::UiError> {
    use crate::error::UiError;
    use crate::util::dom;

    let doc = dom::document()?;
    let style = doc.create_element("style").map_err(|e| UiError::from_js(&e))?;
    style.set_text_content(Some(css));
    dom::head(&doc)?.append_child(&style).map_err(|e| UiError::from_js(&e))?;
    Ok(())
}
