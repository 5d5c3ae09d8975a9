//! Lexer for the Runa programming language.
//!
//! Handles tokenization including:
//! - Keywords, multi-word keyword phrases (`Process called`, `For each`)
//! - Natural-language operator phrases (`is greater than`, `divided by`) with
//!   longest-match resolution
//! - Multi-word identifiers (`total count`)
//! - String literals (formatted/raw/plain), numeric literals in several bases
//! - `Note:` line and block comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, StringFlavor, NumberKind)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning
//! - `words` - Keyword/identifier word scanning
//!
//! ## Contract
//!
//! The lexer never fails: every character of the requested range lands in exactly one
//! token (whitespace, newlines, and comments are tokens, not skipped ranges), malformed
//! input degrades to single-character [`TokenKind::Bad`] tokens, and every call to
//! [`Lexer::advance`] moves strictly forward. Tokenization is restartable from any
//! offset: no token depends on text before the range start, so an editor can re-lex an
//! edited region without rescanning the whole buffer.

mod numbers;
mod strings;
pub mod tokens;
mod words;

pub use tokens::{NumberKind, StringFlavor, Token, TokenKind};

use crate::span::Span;
use runa_core::lang::{keywords, operators, punctuation};
use words::WordScan;

/// Restartable token cursor over a source range.
///
/// Call [`advance`](Lexer::advance) to move to the next token; the current token stays
/// available through [`current`](Lexer::current) until the next call. The cursor owns no
/// source text and keeps no state other than its offset, so independent buffers can be
/// lexed concurrently without synchronization.
pub struct Lexer<'a> {
    source: &'a str,
    end: usize,
    offset: usize,
    current: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the whole buffer.
    pub fn new(source: &'a str) -> Self {
        Self::with_range(source, 0, source.len())
    }

    /// Create a lexer over `[start, end)`. Both offsets must lie on character
    /// boundaries within the buffer.
    pub fn with_range(source: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.len());
        debug_assert!(source.is_char_boundary(start) && source.is_char_boundary(end));
        Self {
            source,
            end,
            offset: start,
            current: None,
        }
    }

    /// Produce the next token in source order, or `None` at the end of the range.
    pub fn advance(&mut self) -> Option<Token> {
        if self.offset >= self.end {
            self.current = None;
            return None;
        }
        let rest = &self.source[self.offset..self.end];
        let (kind, len) = scan(rest);
        let token = Token::new(kind, Span::new(self.offset, self.offset + len));
        self.offset = token.span.end;
        self.current = Some(token);
        Some(token)
    }

    /// The token produced by the most recent [`advance`](Lexer::advance), if any.
    pub fn current(&self) -> Option<Token> {
        self.current
    }

    /// Kind of the current token.
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current.map(|t| t.kind)
    }

    /// Start offset of the current token.
    pub fn current_start(&self) -> Option<usize> {
        self.current.map(|t| t.span.start)
    }

    /// End offset of the current token.
    pub fn current_end(&self) -> Option<usize> {
        self.current.map(|t| t.span.end)
    }

    /// `true` once the cursor has reached the end of the requested range.
    pub fn at_end(&self) -> bool {
        self.offset >= self.end
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}

/// Convenience function to lex a source string into a token vector.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

// ============================================================================
// Classification
// ============================================================================
// Tiers, first match wins; longest match within a tier:
//   comment > string > number > operator phrase > keyword phrase
//   > word (keyword / bool / identifier) > math symbols > punctuation
//   > newline > whitespace > bad character

/// Classify the token at the start of `rest` (`rest` is non-empty).
fn scan(rest: &str) -> (TokenKind, usize) {
    if let Some(len) = scan_comment(rest) {
        return (TokenKind::Comment, len);
    }
    if let Some((len, flavor)) = strings::scan_string(rest) {
        return (TokenKind::Str(flavor), len);
    }
    if let Some((len, kind)) = numbers::scan_number(rest) {
        return (TokenKind::Number(kind), len);
    }
    if let Some((id, len)) = operators::phrase_at(rest) {
        return (TokenKind::NaturalOp(id), len);
    }
    if let Some((id, len)) = keywords::phrase_at(rest) {
        return (TokenKind::Keyword(id), len);
    }
    match words::scan_word_token(rest) {
        Some(WordScan::Keyword(id, len)) => return (TokenKind::Keyword(id), len),
        Some(WordScan::Bool(len)) => return (TokenKind::Bool, len),
        Some(WordScan::Ident(len)) => return (TokenKind::Ident, len),
        None => {}
    }

    let run = symbol_run(rest);
    if run > 0 {
        return (TokenKind::MathSymbol, run);
    }
    let Some(c) = rest.chars().next() else {
        // advance() never calls scan() with an empty rest
        return (TokenKind::Bad, 1);
    };
    if let Some(id) = punctuation::from_char(c) {
        return (TokenKind::Punct(id), 1);
    }
    if rest.starts_with("\r\n") {
        return (TokenKind::Newline, 2);
    }
    if c == '\n' {
        return (TokenKind::Newline, 1);
    }
    let ws = whitespace_run(rest);
    if ws > 0 {
        return (TokenKind::Whitespace, ws);
    }
    (TokenKind::Bad, c.len_utf8())
}

/// `Note:` comments. A blank remainder on the opening line starts a block comment that
/// runs through the line containing `:End Note` (or to the end of the range when
/// unterminated, which is not a lexical error). Anything after the marker makes it a
/// line comment ending before the newline.
fn scan_comment(rest: &str) -> Option<usize> {
    let after = rest.strip_prefix("Note:")?;
    let marker_len = rest.len() - after.len();
    let first_line = after.lines().next().unwrap_or("");

    if !first_line.trim().is_empty() {
        return Some(marker_len + line_len(after));
    }

    // Block comment: the body starts after the opening line's newline.
    let Some(nl) = after.find('\n') else {
        // `Note:` with nothing behind it at the end of the range.
        return Some(rest.len());
    };
    let mut at = marker_len + nl + 1;
    while at < rest.len() {
        let line = &rest[at..];
        let len = line_len(line);
        if line[..len].contains(":End Note") {
            return Some(at + len);
        }
        at += len + line_terminator_len(&line[len..]);
    }
    Some(rest.len())
}

/// Bytes up to (not including) the next `\n`.
fn line_len(text: &str) -> usize {
    text.find('\n').unwrap_or(text.len())
}

fn line_terminator_len(text: &str) -> usize {
    if text.starts_with('\n') { 1 } else { 0 }
}

/// Maximal run of mathematical symbol characters.
fn symbol_run(rest: &str) -> usize {
    rest.chars()
        .take_while(|&c| operators::is_math_symbol(c))
        .map(char::len_utf8)
        .sum()
}

/// Maximal run of spaces/tabs; a `\r` joins the run only when it is not the start of a
/// `\r\n` newline.
fn whitespace_run(rest: &str) -> usize {
    let mut len = 0;
    let mut chars = rest.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        match c {
            ' ' | '\t' => len = at + 1,
            '\r' if chars.peek().map(|(_, n)| *n) != Some('\n') => len = at + 1,
            _ => break,
        }
    }
    len
}

// ============================================================================
// TESTS
// ============================================================================
