//! Natural-language operator vocabulary.
//!
//! Runa spells most operators as fixed English phrases (`is greater than`, `divided by`,
//! `followed by`). This module defines the canonical phrase set with stable IDs
//! ([`NaturalOpId`]) plus the mathematical symbol character set consumed by the lexer's
//! symbol-run tier.
//!
//! ## Notes
//! - Phrase lookup ([`phrase_at`]) is **longest-match**: `is greater than or equal to`
//!   always wins over its prefix `is greater than`.
//! - A phrase only matches on a whole-word boundary, so `plus` never matches inside
//!   `plush`.
//!
//! ## Examples
//! ```rust
//! use runa_core::lang::operators::{self, NaturalOpId};
//!
//! let (id, len) = operators::phrase_at("is greater than or equal to y").unwrap();
//! assert_eq!(id, NaturalOpId::IsGreaterThanOrEqualTo);
//! assert_eq!(len, "is greater than or equal to".len());
//! ```

/// Stable identifier for every natural-language operator phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalOpId {
    // Arithmetic
    Plus,
    Minus,
    MultipliedBy,
    DividedBy,
    Modulo,

    // Comparison
    Equals,
    DoesNotEqual,
    IsGreaterThan,
    IsLessThan,
    IsGreaterThanOrEqualTo,
    IsLessThanOrEqualTo,

    // Membership
    Contains,
    IsIn,

    // Sequence
    FollowedBy,
    JoinedWith,
}

/// Broad grouping for documentation and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalOpCategory {
    Arithmetic,
    Comparison,
    Membership,
    Sequence,
}

/// Metadata for a natural-language operator phrase.
#[derive(Debug, Clone, Copy)]
pub struct NaturalOpInfo {
    pub id: NaturalOpId,
    pub phrase: &'static str,
    pub category: NaturalOpCategory,
}

const fn op(id: NaturalOpId, phrase: &'static str, category: NaturalOpCategory) -> NaturalOpInfo {
    NaturalOpInfo { id, phrase, category }
}

/// Registry of all natural-language operator phrases.
pub const NATURAL_OPS: &[NaturalOpInfo] = &[
    op(NaturalOpId::Plus, "plus", NaturalOpCategory::Arithmetic),
    op(NaturalOpId::Minus, "minus", NaturalOpCategory::Arithmetic),
    op(NaturalOpId::MultipliedBy, "multiplied by", NaturalOpCategory::Arithmetic),
    op(NaturalOpId::DividedBy, "divided by", NaturalOpCategory::Arithmetic),
    op(NaturalOpId::Modulo, "modulo", NaturalOpCategory::Arithmetic),
    op(NaturalOpId::Equals, "equals", NaturalOpCategory::Comparison),
    op(NaturalOpId::DoesNotEqual, "does not equal", NaturalOpCategory::Comparison),
    op(NaturalOpId::IsGreaterThan, "is greater than", NaturalOpCategory::Comparison),
    op(NaturalOpId::IsLessThan, "is less than", NaturalOpCategory::Comparison),
    op(
        NaturalOpId::IsGreaterThanOrEqualTo,
        "is greater than or equal to",
        NaturalOpCategory::Comparison,
    ),
    op(
        NaturalOpId::IsLessThanOrEqualTo,
        "is less than or equal to",
        NaturalOpCategory::Comparison,
    ),
    op(NaturalOpId::Contains, "contains", NaturalOpCategory::Membership),
    op(NaturalOpId::IsIn, "is in", NaturalOpCategory::Membership),
    op(NaturalOpId::FollowedBy, "followed by", NaturalOpCategory::Sequence),
    op(NaturalOpId::JoinedWith, "joined with", NaturalOpCategory::Sequence),
];

/// Characters that form mathematical symbol runs (`<=`, `==`, `+`, ...).
pub const MATH_SYMBOLS: &[char] = &['+', '-', '*', '/', '%', '<', '>', '=', '!'];

/// Return `true` if `c` belongs to the mathematical symbol set.
pub fn is_math_symbol(c: char) -> bool {
    MATH_SYMBOLS.contains(&c)
}

/// Canonical phrase for an operator id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: NaturalOpId) -> &'static str {
    info_for(id).phrase
}

/// Full metadata for an operator id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: NaturalOpId) -> &'static NaturalOpInfo {
    NATURAL_OPS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Find the longest operator phrase matching at the start of `text`.
///
/// The character following the phrase (if any) must not continue an identifier word.
/// Returns the id and the matched length in bytes.
pub fn phrase_at(text: &str) -> Option<(NaturalOpId, usize)> {
    let mut best: Option<(NaturalOpId, usize)> = None;
    for o in NATURAL_OPS {
        if text.starts_with(o.phrase)
            && !text[o.phrase.len()..]
                .chars()
                .next()
                .is_some_and(super::is_word_continue)
            && best.is_none_or(|(_, len)| o.phrase.len() > len)
        {
            best = Some((o.id, o.phrase.len()));
        }
    }
    best
}
