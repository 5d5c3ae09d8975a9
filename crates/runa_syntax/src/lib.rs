//! Syntax frontend for the Runa language: restartable lexer, recovering statement
//! parser, loss-less syntax tree, diagnostics.
//!
//! This crate is designed for editor-grade use: lexing and parsing never fail,
//! every byte of the input lands in exactly one token, and the tree reproduces
//! the source verbatim. Malformed input degrades to bad-character tokens and
//! flat expression nodes instead of errors.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not resolve names, check
//!   types, or evaluate anything.
//! - Vocabulary identity (keywords/operators/punctuation) comes from
//!   `runa_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use runa_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("Let x be 5\n");
//! let tree = parser::parse_tokens(&tokens);
//! assert_eq!(tree.child_nodes().count(), 1);
//! ```
//!
//! ## See also
//! - `runa_core::lang` for registry-backed language vocabulary.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token_helpers;
pub mod tree;
