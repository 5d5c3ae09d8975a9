//! Numeric literal scanning.
//!
//! Variants are tried in priority order: float, hex, binary, octal, decimal int.
//! `_` digit-group separators are accepted anywhere inside a digit run.

use super::tokens::NumberKind;

/// Try to match a numeric literal at the start of `rest`.
///
/// Returns the matched byte length and the variant. A trailing dot with no fractional
/// digit is *not* part of a float: `3.` scans as the int `3` (the dot becomes separate
/// punctuation).
pub(super) fn scan_number(rest: &str) -> Option<(usize, NumberKind)> {
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_digit) {
        return None;
    }

    if let Some(len) = scan_float(bytes) {
        return Some((len, NumberKind::Float));
    }
    if let Some(len) = scan_radix(bytes, b'x', |b| b.is_ascii_hexdigit()) {
        return Some((len, NumberKind::Hex));
    }
    if let Some(len) = scan_radix(bytes, b'b', |b| matches!(b, b'0' | b'1')) {
        return Some((len, NumberKind::Binary));
    }
    if let Some(len) = scan_radix(bytes, b'o', |b| matches!(b, b'0'..=b'7')) {
        return Some((len, NumberKind::Octal));
    }
    Some((digit_run(bytes, 0), NumberKind::Int))
}

/// `\d[\d_]* . \d[\d_]*` -- both sides of the dot need at least one digit.
fn scan_float(bytes: &[u8]) -> Option<usize> {
    let int_len = digit_run(bytes, 0);
    if bytes.get(int_len) != Some(&b'.') {
        return None;
    }
    let frac_start = int_len + 1;
    if !bytes.get(frac_start).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some(digit_run(bytes, frac_start))
}

/// `0<marker>` prefix followed by at least one radix digit, then digits/underscores.
fn scan_radix(bytes: &[u8], marker: u8, is_digit: impl Fn(&u8) -> bool) -> Option<usize> {
    if bytes.first() != Some(&b'0') || bytes.get(1) != Some(&marker) {
        return None;
    }
    if !bytes.get(2).is_some_and(&is_digit) {
        return None;
    }
    let mut len = 3;
    while bytes.get(len).is_some_and(|b| is_digit(b) || *b == b'_') {
        len += 1;
    }
    Some(len)
}

/// Run of digits and `_` starting at `from` (first byte must be a digit, checked by caller).
fn digit_run(bytes: &[u8], from: usize) -> usize {
    let mut len = from;
    while bytes.get(len).is_some_and(|b| b.is_ascii_digit() || *b == b'_') {
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminates_bases() {
        assert_eq!(scan_number("0x1A3"), Some((5, NumberKind::Hex)));
        assert_eq!(scan_number("0b101"), Some((5, NumberKind::Binary)));
        assert_eq!(scan_number("0o17"), Some((4, NumberKind::Octal)));
        assert_eq!(scan_number("42"), Some((2, NumberKind::Int)));
        assert_eq!(scan_number("3.14"), Some((4, NumberKind::Float)));
    }

    #[test]
    fn trailing_dot_is_not_a_float() {
        assert_eq!(scan_number("3."), Some((1, NumberKind::Int)));
        assert_eq!(scan_number("3.x"), Some((1, NumberKind::Int)));
    }

    #[test]
    fn group_separators_are_accepted() {
        assert_eq!(scan_number("1_000_000"), Some((9, NumberKind::Int)));
        assert_eq!(scan_number("1_0.5_0"), Some((7, NumberKind::Float)));
        assert_eq!(scan_number("0xDE_AD"), Some((7, NumberKind::Hex)));
    }

    #[test]
    fn bare_radix_prefix_falls_back_to_int() {
        // `0x` with no digits is the int `0` followed by the word `x`.
        assert_eq!(scan_number("0x"), Some((1, NumberKind::Int)));
        assert_eq!(scan_number("0bz"), Some((1, NumberKind::Int)));
    }

    #[test]
    fn non_digits_do_not_match() {
        assert_eq!(scan_number("abc"), None);
        assert_eq!(scan_number(".5"), None);
        assert_eq!(scan_number(""), None);
    }
}
