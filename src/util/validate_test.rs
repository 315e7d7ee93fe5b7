use super::*;

#[test]
fn email_accepts_simple_address() {
    assert!(validate_email("a@b.co"));
    assert!(validate_email("first.last+tag@mail.example.org"));
}

#[test]
fn email_requires_dot_in_domain() {
    assert!(!validate_email("a@b"));
}

#[test]
fn email_rejects_whitespace_and_extra_at() {
    assert!(!validate_email("a b@c.com"));
    assert!(!validate_email("a@b@c.com"));
    assert!(!validate_email(" a@b.co"));
    assert!(!validate_email(""));
}

#[test]
fn email_is_loose_about_dots() {
    assert!(validate_email("a@b..c"));
}

#[test]
fn phone_accepts_common_us_shapes() {
    assert!(validate_phone("555-123-4567"));
    assert!(validate_phone("(555) 123-4567"));
    assert!(validate_phone("555.123.4567"));
    assert!(validate_phone("5551234567"));
    assert!(validate_phone("+555 123 456789"));
}

#[test]
fn phone_rejects_non_digits_and_bad_lengths() {
    assert!(!validate_phone("abc"));
    assert!(!validate_phone("555-123-456"));
    assert!(!validate_phone("555-123-4567890"));
    assert!(!validate_phone("555--123-4567"));
    assert!(!validate_phone(""));
}
