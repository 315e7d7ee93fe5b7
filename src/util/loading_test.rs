use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn starts_hidden() {
    assert!(!LoadingOverlay::new().is_visible());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn double_show_mounts_once() {
    let mut overlay = LoadingOverlay::new();
    assert!(overlay.show());
    assert!(!overlay.show());
    assert!(overlay.is_visible());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hide_removes_then_second_hide_is_noop() {
    let mut overlay = LoadingOverlay::new();
    overlay.show();
    overlay.show();
    assert!(overlay.hide());
    assert!(!overlay.is_visible());
    assert!(!overlay.hide());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hide_before_show_is_noop() {
    let mut overlay = LoadingOverlay::new();
    assert!(!overlay.hide());
    assert!(overlay.show());
}

#[test]
fn spinner_is_centered_and_on_top() {
    let style = |name: &str| SPINNER_STYLES.iter().find(|(n, _)| *n == name).map(|(_, v)| *v);
    assert_eq!(style("position"), Some("fixed"));
    assert_eq!(style("transform"), Some("translate(-50%, -50%)"));
    assert_eq!(style("z-index"), Some("9999"));
    assert_eq!(style("animation"), Some("spin 0.8s linear infinite"));
}
