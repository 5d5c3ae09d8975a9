//! Statement parser for the Runa programming language.
//!
//! Converts a token stream into a shallow syntax tree: one node per top-level statement,
//! with flat expression nodes spanning everything up to the next statement boundary.
//! The parser is a single-pass, non-backtracking dispatcher over enumerated token kinds
//! (never raw token text) and recovers from malformed input by closing the current node
//! at the boundary instead of aborting -- it never fails, because it backs live editing
//! of arbitrary, partially-typed source text.
//!
//! ## Examples
//!
//! ```rust
//! use runa_syntax::parser;
//! use runa_syntax::tree::SyntaxKind;
//!
//! let root = parser::parse("Let x be 5\n");
//! assert_eq!(root.kind(), SyntaxKind::Root);
//! assert_eq!(root.child_nodes().count(), 1);
//! ```

use crate::lexer::{self, Token, TokenKind};
use crate::tree::{SyntaxKind, SyntaxNode, TreeBuilder};
use runa_core::lang::keywords::KeywordId;
use runa_core::lang::punctuation::PunctId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
