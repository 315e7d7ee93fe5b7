//! Full-screen loading spinner.
//!
//! DESIGN
//! ======
//! The caller owns the single overlay slot through [`LoadingOverlay`] instead
//! of the page sharing a global. `show` and `hide` are idempotent, so nested
//! "busy" sections can call them freely.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Class on the overlay node.
pub const LOADING_CLASS: &str = "loading";

/// Inline styles for the spinner: a centered ring with a colored top arc.
pub const SPINNER_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "50%"),
    ("left", "50%"),
    ("transform", "translate(-50%, -50%)"),
    ("z-index", "9999"),
    ("width", "50px"),
    ("height", "50px"),
    ("border", "5px solid #e0e0e0"),
    ("border-top-color", "#1a237e"),
    ("border-radius", "50%"),
    ("animation", "spin 0.8s linear infinite"),
];

#[cfg(feature = "hydrate")]
type OverlayNode = web_sys::HtmlElement;

/// Stand-in node when there is no DOM to attach to.
#[cfg(not(feature = "hydrate"))]
#[derive(Debug)]
struct OverlayNode;

/// Holds at most one mounted spinner.
#[derive(Debug, Default)]
pub struct LoadingOverlay {
    node: Option<OverlayNode>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.node.is_some()
    }

    /// Mount the spinner unless one is already up.
    ///
    /// Returns `true` only when this call mounted a node.
    pub fn show(&mut self) -> bool {
        if self.node.is_some() {
            return false;
        }
        match mount() {
            Ok(node) => {
                self.node = Some(node);
                true
            }
            Err(e) => {
                log::warn!("loading overlay not shown: {e}");
                false
            }
        }
    }

    /// Remove the spinner if one is up.
    ///
    /// Returns `true` only when this call removed a node.
    pub fn hide(&mut self) -> bool {
        let Some(node) = self.node.take() else {
            return false;
        };
        unmount(&node);
        true
    }
}

#[cfg(feature = "hydrate")]
fn mount() -> Result<OverlayNode, crate::error::UiError> {
    use crate::error::UiError;
    use crate::util::dom;

    let doc = dom::document()?;
    let node = dom::create_html_element(&doc, "div")?;
    node.set_class_name(LOADING_CLASS);
    dom::set_styles(&node, SPINNER_STYLES)?;
    dom::body(&doc)?.append_child(&node).map_err(|e| UiError::from_js(&e))?;
    Ok(node)
}

#[cfg(feature = "hydrate")]
fn unmount(node: &OverlayNode) {
    node.remove();
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unnecessary_wraps)]
fn mount() -> Result<OverlayNode, crate::error::UiError> {
    Ok(OverlayNode)
}

#[cfg(not(feature = "hydrate"))]
fn unmount(_node: &OverlayNode) {}
