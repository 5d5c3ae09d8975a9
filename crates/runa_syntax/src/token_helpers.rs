//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it
//! easy to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use runa_core::lang::keywords::{self, KeywordId};
use runa_core::lang::operators::NaturalOpId;
use runa_core::lang::punctuation::PunctId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is a natural-language operator token.
    pub fn natural_op_id(&self) -> Option<NaturalOpId> {
        match self {
            TokenKind::NaturalOp(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given natural-language operator.
    pub fn is_natural_op(&self, id: NaturalOpId) -> bool {
        matches!(self, TokenKind::NaturalOp(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punct_id(&self) -> Option<PunctId> {
        match self {
            TokenKind::Punct(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punct(&self, id: PunctId) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == id)
    }

    /// Return `true` if this token is trivia the parser attaches but never dispatches on.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Return `true` if this keyword token opens a statement recognized by the parser.
    pub fn starts_statement(&self) -> bool {
        self.keyword_id().is_some_and(keywords::starts_statement)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.natural_op_id()`.
    pub fn natural_op_id(&self) -> Option<NaturalOpId> {
        self.kind.natural_op_id()
    }

    /// Convenience wrapper for `self.kind.punct_id()`.
    pub fn punct_id(&self) -> Option<PunctId> {
        self.kind.punct_id()
    }
}
