//! Runa language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords (single
//! words and multi-word phrases), natural-language operator phrases, punctuation, and the
//! mathematical symbol set.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser, and
//! tooling. Callers work with **stable IDs** (e.g. `KeywordId`, `NaturalOpId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no tree types, no IO, no side effects.
//! - The lexer enforces tokenization rules; registries only provide spellings and metadata
//!   for shared use (classification, diagnostics, highlighting).
//!
//! ## Examples
//! ```rust
//! use runa_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "Let");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;

/// Return `true` if `c` can start an identifier word (ASCII-only).
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Return `true` if `c` can continue an identifier word (ASCII-only).
pub fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
