use super::*;

use futures::executor::block_on;

#[test]
fn success_status_is_2xx_only() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(302));
    assert!(!is_success_status(401));
    assert!(!is_success_status(500));
}

#[test]
fn probe_ok_status_resolves_true() {
    assert!(block_on(resolve_probe(async { Ok(200) })));
}

#[test]
fn probe_unauthorized_resolves_false() {
    assert!(!block_on(resolve_probe(async { Ok(401) })));
}

#[test]
fn probe_transport_failure_resolves_false() {
    assert!(!block_on(resolve_probe(async { Err("network unreachable".to_owned()) })));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn check_auth_is_false_outside_browser() {
    assert!(!block_on(check_auth()));
    assert!(!block_on(check_auth_with(&UiConfig::default())));
}
