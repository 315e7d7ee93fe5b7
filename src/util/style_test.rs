use super::*;

#[test]
fn keyframes_define_slide_out_from_visible_to_offscreen() {
    assert!(SLIDE_OUT_KEYFRAMES.contains("@keyframes slideOut"));
    assert!(SLIDE_OUT_KEYFRAMES.contains("translateX(0)"));
    assert!(SLIDE_OUT_KEYFRAMES.contains("translateX(100%)"));
    assert!(SLIDE_OUT_KEYFRAMES.contains("opacity: 0"));
}

#[test]
fn slide_out_animation_uses_seconds() {
    assert_eq!(slide_out_animation(300), "slideOut 0.3s");
    assert_eq!(slide_out_animation(1500), "slideOut 1.5s");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn inject_is_noop_outside_browser() {
    inject_slide_out_style();
    inject_slide_out_style();
}
