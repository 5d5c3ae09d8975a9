//! String literal scanning.
//!
//! Variants are tried in priority order: formatted (`f"..."`/`f'...'`), raw double
//! (`r"..."`), raw single (`r'...'`), plain double, plain single. Formatted and plain
//! variants accept backslash-escaped characters inside; raw strings take no escapes, so
//! the first matching quote always closes them. An unterminated string does not match
//! at all and falls through to later lexer tiers; in the worst case the stray quote
//! becomes a bad-character token. That fall-through is deliberate: there is no
//! recoverable "unterminated string" token at the lexical layer.

use super::tokens::StringFlavor;

/// Try to match a string literal at the start of `rest`.
///
/// Returns the matched byte length (prefix and both quotes included) and the variant.
pub(super) fn scan_string(rest: &str) -> Option<(usize, StringFlavor)> {
    for quote in ['"', '\''] {
        if let Some(len) = prefixed(rest, 'f', quote, true) {
            return Some((len, StringFlavor::Formatted));
        }
    }
    for quote in ['"', '\''] {
        if let Some(len) = prefixed(rest, 'r', quote, false) {
            return Some((len, StringFlavor::Raw));
        }
    }
    for quote in ['"', '\''] {
        if let Some(len) = quoted(rest, quote, true) {
            return Some((len, StringFlavor::Plain));
        }
    }
    None
}

/// `<prefix><quote>...<quote>`.
fn prefixed(rest: &str, prefix: char, quote: char, escapes: bool) -> Option<usize> {
    let body = rest.strip_prefix(prefix)?;
    let len = quoted(body, quote, escapes)?;
    Some(prefix.len_utf8() + len)
}

/// `<quote>...<quote>`; `None` when unterminated.
fn quoted(rest: &str, quote: char, escapes: bool) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == quote => {}
        _ => return None,
    }
    let mut escaped = false;
    for (at, c) in chars {
        if escaped {
            escaped = false;
        } else if escapes && c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(at + c.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_both_quote_styles() {
        assert_eq!(scan_string(r#""hello" x"#), Some((7, StringFlavor::Plain)));
        assert_eq!(scan_string("'hi' x"), Some((4, StringFlavor::Plain)));
    }

    #[test]
    fn formatted_prefix_wins_over_plain() {
        let (len, flavor) = scan_string(r#"f"a{b}" rest"#).unwrap();
        assert_eq!(flavor, StringFlavor::Formatted);
        assert_eq!(len, 7);
    }

    #[test]
    fn raw_strings_match_with_prefix() {
        assert_eq!(scan_string(r#"r"a\b" x"#), Some((6, StringFlavor::Raw)));
        assert_eq!(scan_string("r'a' x"), Some((4, StringFlavor::Raw)));
    }

    #[test]
    fn raw_strings_take_no_escapes() {
        // The backslash does not protect the quote; the raw string ends there.
        assert_eq!(scan_string(r#"r"a\" x"#), Some((5, StringFlavor::Raw)));
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        assert_eq!(scan_string(r#""a\"b" x"#), Some((6, StringFlavor::Plain)));
    }

    #[test]
    fn unterminated_string_does_not_match() {
        assert_eq!(scan_string(r#""never closed"#), None);
        assert_eq!(scan_string(r#"f"nope"#), None);
        assert_eq!(scan_string(r#""dangling escape \"#), None);
    }

    #[test]
    fn mismatched_quotes_do_not_terminate() {
        assert_eq!(scan_string(r#""a' more"#), None);
    }
}
