//! REST helpers for the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Outside the browser the probe resolves `false`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are folded into `false` rather than surfaced, so a page
//! can treat "offline" and "signed out" the same way. No timeout is applied
//! beyond what the browser's fetch does.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::UiConfig;

/// True for 2xx statuses.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Await a status probe and reduce it to signed-in / not signed-in.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn resolve_probe<F>(probe: F) -> bool
where
    F: Future<Output = Result<u16, String>>,
{
    match probe.await {
        Ok(status) => is_success_status(status),
        Err(e) => {
            log::debug!("auth check failed: {e}");
            false
        }
    }
}

/// Ask the backend whether the current session is authenticated.
pub async fn check_auth() -> bool {
    check_auth_with(&UiConfig::current()).await
}

/// [`check_auth`] against `config.auth_check_endpoint`.
pub async fn check_auth_with(config: &UiConfig) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = config.auth_check_endpoint.as_str();
        resolve_probe(async {
            gloo_net::http::Request::get(endpoint)
                .send()
                .await
                .map(|resp| resp.status())
                .map_err(|e| e.to_string())
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        false
    }
}
