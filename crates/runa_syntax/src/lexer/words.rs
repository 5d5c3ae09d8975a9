//! Word scanning: keywords, boolean literals, and (multi-word) identifiers.
//!
//! Runa identifiers may span several space-separated words (`total count`). The scan is
//! greedy but never folds in a word that has vocabulary meaning of its own: single-word
//! keywords, `true`/`false`, and words that begin a registered phrase all stop the
//! extension, so statement keywords and operators always reach the parser as their own
//! tokens. Multi-word phrases themselves are recognized by earlier lexer tiers.

use runa_core::lang::keywords::{self, KeywordId};
use runa_core::lang::{is_word_continue, is_word_start, operators};

/// Outcome of scanning a word at the start of the input.
pub(super) enum WordScan {
    Keyword(KeywordId, usize),
    Bool(usize),
    Ident(usize),
}

/// Try to match a keyword, boolean literal, or (multi-word) identifier at the start of
/// `rest`. Returns the matched byte length.
pub(super) fn scan_word_token(rest: &str) -> Option<WordScan> {
    let first = word_len(rest)?;
    let word = &rest[..first];

    if word == "true" || word == "false" {
        return Some(WordScan::Bool(first));
    }
    if let Some(id) = keywords::from_str(word) {
        return Some(WordScan::Keyword(id, first));
    }

    // Greedy multi-word extension across single-line gaps of spaces/tabs.
    let mut len = first;
    loop {
        let gap = gap_len(&rest[len..]);
        if gap == 0 {
            break;
        }
        let tail = &rest[len + gap..];
        let Some(next) = word_len(tail) else { break };
        if !is_plain_word(&tail[..next]) || begins_phrase(tail) {
            break;
        }
        len += gap + next;
    }
    Some(WordScan::Ident(len))
}

/// Length of a single identifier word at the start of `rest`, if any.
fn word_len(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    if !chars.next().is_some_and(is_word_start) {
        return None;
    }
    Some(
        rest.chars()
            .take_while(|&c| is_word_continue(c))
            .map(char::len_utf8)
            .sum(),
    )
}

/// Length of the run of spaces/tabs at the start of `rest` (never crosses a newline).
fn gap_len(rest: &str) -> usize {
    rest.chars().take_while(|&c| c == ' ' || c == '\t').count()
}

/// A word with no vocabulary meaning of its own.
fn is_plain_word(word: &str) -> bool {
    word != "true" && word != "false" && keywords::from_str(word).is_none()
}

/// Does a registered operator or keyword phrase start here?
fn begins_phrase(rest: &str) -> bool {
    operators::phrase_at(rest).is_some() || keywords::phrase_at(rest).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident_len(rest: &str) -> usize {
        match scan_word_token(rest) {
            Some(WordScan::Ident(len)) => len,
            _ => panic!("expected identifier in {rest:?}"),
        }
    }

    #[test]
    fn multi_word_identifiers_extend_greedily() {
        assert_eq!(ident_len("total count"), "total count".len());
        assert_eq!(ident_len("user account balance = 3"), "user account balance".len());
    }

    #[test]
    fn extension_stops_at_keywords() {
        // `be` binds in a Let statement and must stay its own token.
        assert_eq!(ident_len("x be 5"), 1);
        assert_eq!(ident_len("counter to 10"), "counter".len());
    }

    #[test]
    fn extension_stops_before_operator_phrases() {
        assert_eq!(ident_len("x is greater than y"), 1);
        assert_eq!(ident_len("items followed by more"), "items".len());
    }

    #[test]
    fn extension_never_crosses_newlines() {
        assert_eq!(ident_len("alpha\nbeta"), "alpha".len());
    }

    #[test]
    fn keywords_and_booleans_classify_directly() {
        assert!(matches!(
            scan_word_token("Let x"),
            Some(WordScan::Keyword(KeywordId::Let, 3))
        ));
        assert!(matches!(scan_word_token("true"), Some(WordScan::Bool(4))));
        assert!(matches!(scan_word_token("false rest"), Some(WordScan::Bool(5))));
    }

    #[test]
    fn non_words_do_not_match() {
        assert!(scan_word_token("42").is_none());
        assert!(scan_word_token("+x").is_none());
    }
}
