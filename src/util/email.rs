//! Minimal email shape check used by the registration form.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// Whether `value` looks like `text@text.text`.
///
/// Equivalent to the anchored pattern `^\S+@\S+\.\S+$`: no whitespace
/// anywhere, a non-empty local part, and a `.` with at least one character on
/// each side somewhere after the `@`.
pub fn is_email_shape(value: &str) -> bool {
    if value.is_empty() || value.chars().any(is_pattern_whitespace) {
        return false;
    }
    // The earliest usable `@` leaves the widest span for the domain.
    let Some(at) = value.char_indices().skip(1).find(|&(_, c)| c == '@').map(|(i, _)| i) else {
        return false;
    };
    let domain = &value[at + 1..];
    domain
        .char_indices()
        .skip(1)
        .any(|(i, c)| c == '.' && i + 1 < domain.len())
}

/// Characters matched by `\s` in an ECMAScript pattern.
///
/// Differs from `char::is_whitespace`: U+FEFF is included, U+0085 is not.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}
