//! `wasm-bindgen` exports for page scripts.
//!
//! Names match the functions the portal's inline scripts already call, so the
//! WASM bundle is a drop-in for them. The loading overlay slot lives here in a
//! thread-local because the page script, not Rust, is the caller that would
//! otherwise own it.

use std::cell::RefCell;

use js_sys::{Array, Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::net::api;
use crate::util::debounce;
use crate::util::format;
use crate::util::loading::LoadingOverlay;
use crate::util::report;
use crate::util::toast::{self, ToastKind};
use crate::util::validate;

thread_local! {
    static LOADING: RefCell<LoadingOverlay> = RefCell::new(LoadingOverlay::new());
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    toast::notify(message, kind.map(ToastKind::from).unwrap_or_default());
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() {
    LOADING.with(|overlay| {
        overlay.borrow_mut().show();
    });
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    LOADING.with(|overlay| {
        overlay.borrow_mut().hide();
    });
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(input: Option<String>) -> String {
    format::format_date(input.as_deref())
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time(input: Option<String>) -> String {
    format::format_date_time(input.as_deref())
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(email: &str) -> bool {
    validate::validate_email(email)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone(phone: &str) -> bool {
    validate::validate_phone(phone)
}

/// JS shim that collects a call's arguments into one array for the Rust side.
const PACK_ARGS: &str = "return function(...args) { receiver(args); };";

/// Debounced wrapper around a JS function; the last call's arguments are forwarded.
///
/// # Errors
///
/// Throws if the argument-packing shim cannot be built.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_js(func: Function, wait: u32) -> Result<Function, JsValue> {
    let wrapped = debounce::debounce(
        move |args: Array| {
            if let Err(e) = func.apply(&JsValue::NULL, &args) {
                log::warn!("debounced callback threw: {e:?}");
            }
        },
        wait,
    );
    let receiver = Closure::<dyn Fn(Array)>::new(wrapped).into_js_value();
    Function::new_with_args("receiver", PACK_ARGS)
        .call1(&JsValue::NULL, &receiver)?
        .dyn_into::<Function>()
}

/// Resolves to a boolean; never rejects.
#[wasm_bindgen(js_name = checkAuth)]
pub fn check_auth() -> Promise {
    future_to_promise(async { Ok(JsValue::from_bool(api::check_auth().await)) })
}

#[wasm_bindgen(js_name = handleApiError)]
pub fn handle_api_error(error: JsValue) {
    let detail = error.as_string().unwrap_or_else(|| format!("{error:?}"));
    report::handle_api_error(detail.as_str());
}
