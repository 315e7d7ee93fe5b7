//! Browser-side presentation helpers for the portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page scripts call into this crate for toasts, the loading spinner, date
//! display, form validation, debouncing, and the session probe. Everything that
//! touches the DOM or the network is gated behind the `hydrate` feature; native
//! builds keep the pure logic and turn browser calls into no-ops so tests run
//! without a browser.


pub mod config;
pub mod error;
pub mod net;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod bindings;

pub use config::UiConfig;
pub use error::UiError;

/// Module-load entry point for the WASM bundle.
///
/// Installs panic/log plumbing, loads page config, and injects the toast exit
/// keyframes into `<head>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    UiConfig::from_page().install();
    util::style::inject_slide_out_style();
}
