use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_email_shape("jane@x.com"));
    assert!(is_email_shape("a@b.c"));
    assert!(is_email_shape("first.last+tag@mail.example.org"));
}

#[test]
fn accepts_what_the_loose_pattern_accepts() {
    assert!(is_email_shape("a@b@c.d"));
    assert!(is_email_shape("@a@b.c"));
    assert!(is_email_shape("a@b..c"));
    assert!(is_email_shape("ü@ö.é"));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_email_shape(""));
    assert!(!is_email_shape("jane"));
    assert!(!is_email_shape("@x.com"));
    assert!(!is_email_shape("jane@"));
    assert!(!is_email_shape("jane@x"));
    assert!(!is_email_shape("jane@.com"));
    assert!(!is_email_shape("jane@x."));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_email_shape("jane doe@x.com"));
    assert!(!is_email_shape(" jane@x.com"));
    assert!(!is_email_shape("jane@x.com\n"));
}

#[test]
fn whitespace_follows_browser_pattern_rules() {
    assert!(!is_email_shape("a\u{FEFF}@b.c"));
    assert!(!is_email_shape("a@b\u{3000}.c"));
    assert!(!is_email_shape("a@b.c\u{A0}"));
    assert!(is_email_shape("a\u{85}@b.c"));
}
