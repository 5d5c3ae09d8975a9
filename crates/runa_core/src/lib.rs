//! Provide the canonical language vocabulary for Runa tooling.
//!
//! This crate is intentionally small and dependency-free. It contains the const registries
//! that both the lexer and the parser treat as the single source of truth for spellings:
//! reserved keywords (single words and multi-word phrases), natural-language operator
//! phrases, punctuation, and the mathematical symbol set.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, and no syntax
//!   tree types. Registries are plain `const` tables, safe to read from any thread.
//! - Callers work with stable IDs (e.g. [`lang::keywords::KeywordId`]) and look up spellings
//!   via the registry tables, so no stringly-typed checks leak into downstream code.

pub mod lang;
