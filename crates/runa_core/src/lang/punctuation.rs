//! Punctuation vocabulary.
//!
//! This module defines the canonical set of single-character punctuation tokens used by
//! the lexer: delimiters, separators, and the access dot. Multi-character symbol runs
//! (`==`, `<=`, ...) are handled by the math-symbol tier instead, see
//! [`super::operators::MATH_SYMBOLS`].
//!
//! ## Examples
//! ```rust
//! use runa_core::lang::punctuation::{self, PunctId};
//!
//! assert_eq!(punctuation::from_char(':'), Some(PunctId::Colon));
//! assert_eq!(punctuation::as_char(PunctId::LParen), '(');
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `:`.
    Separator,
    /// Access markers like `.`.
    Access,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Dot,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctInfo {
    pub id: PunctId,
    pub canonical: char,
    pub category: PunctCategory,
}

const fn punct(id: PunctId, canonical: char, category: PunctCategory) -> PunctInfo {
    PunctInfo { id, canonical, category }
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctInfo] = &[
    punct(PunctId::LParen, '(', PunctCategory::Delimiter),
    punct(PunctId::RParen, ')', PunctCategory::Delimiter),
    punct(PunctId::LBracket, '[', PunctCategory::Delimiter),
    punct(PunctId::RBracket, ']', PunctCategory::Delimiter),
    punct(PunctId::LBrace, '{', PunctCategory::Delimiter),
    punct(PunctId::RBrace, '}', PunctCategory::Delimiter),
    punct(PunctId::Colon, ':', PunctCategory::Separator),
    punct(PunctId::Comma, ',', PunctCategory::Separator),
    punct(PunctId::Dot, '.', PunctCategory::Access),
];

/// Canonical character.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_char(id: PunctId) -> char {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctId) -> &'static PunctInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Look up a punctuation character.
pub fn from_char(c: char) -> Option<PunctId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_registry() {
        for p in PUNCTUATION {
            assert_eq!(from_char(p.canonical), Some(p.id));
            assert_eq!(as_char(p.id), p.canonical);
        }
    }

    #[test]
    fn symbols_outside_the_set_are_unknown() {
        assert_eq!(from_char(';'), None);
        assert_eq!(from_char('+'), None);
    }
}
