//! Token types for the Runa lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words and multi-word keyword phrases
//! - `NaturalOp(NaturalOpId)` for natural-language operator phrases
//! - `Punct(PunctId)` for punctuation tokens
//!
//! ## Notes
//! - Tokens are `Copy` and never own source text: `kind` plus byte offsets is the whole
//!   token, and [`Token::text`] recovers the spelling from the buffer on demand.
//! - ID-bearing tokens avoid stringly-typed checks in the parser and tooling. Use
//!   `crate::token_helpers` for ergonomic token matching at call sites.

use crate::span::Span;
use runa_core::lang::keywords::KeywordId;
use runa_core::lang::operators::NaturalOpId;
use runa_core::lang::punctuation::PunctId;

/// Which string literal variant matched.
///
/// The lexer tries formatted, then raw, then plain, so an `f"..."` prefix is never
/// mis-read as an identifier `f` followed by a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFlavor {
    /// `f"..."` / `f'...'`
    Formatted,
    /// `r"..."` / `r'...'`
    Raw,
    /// `"..."` / `'...'`
    Plain,
}

/// Which numeric literal variant matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `3.14` (a dot with no fractional digit does not float-match)
    Float,
    /// `0x1A3`
    Hex,
    /// `0b101`
    Binary,
    /// `0o17`
    Octal,
    /// `42`, `1_000_000`
    Int,
}

/// Kind of token produced by the lexer.
///
/// This is the closed classification set; the lexer never fails, so malformed input
/// degrades to [`TokenKind::Bad`] (exactly one character) and scanning continues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Comment,
    Str(StringFlavor),
    Number(NumberKind),
    /// Lowercase `true` / `false`.
    Bool,
    Ident,
    Keyword(KeywordId),
    NaturalOp(NaturalOpId),
    /// Maximal run of `+ - * / % < > = !`.
    MathSymbol,
    Punct(PunctId),
    /// Spaces and tabs; never newlines.
    Whitespace,
    /// `\n` or `\r\n`.
    Newline,
    /// Single unrecognized character.
    Bad,
}

/// A token: a classification plus byte offsets into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token. Zero-length tokens are forbidden.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        debug_assert!(span.start < span.end, "zero-length token at {span}");
        Self { kind, span }
    }

    /// The token's spelling, borrowed from the buffer it was lexed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}
