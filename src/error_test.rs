use super::*;

#[test]
fn dom_error_carries_detail() {
    let err = UiError::Dom("append failed".to_owned());
    assert_eq!(err.to_string(), "dom operation failed: append failed");
}

#[test]
fn config_error_converts_from_serde() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = UiError::from(parse);
    assert!(matches!(err, UiError::Config(_)));
    assert!(err.to_string().starts_with("invalid ui config: "));
}
