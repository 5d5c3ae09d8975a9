//! Define the reserved keyword vocabulary for the Runa language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus const metadata tables that record canonical spellings, accepted
//! aliases, and categories. It covers both single-word keywords ([`KEYWORDS`]) and
//! multi-word keyword phrases ([`PHRASES`]) such as `Process called` and `For each`,
//! which the lexer must recognize as one token when the words are contiguous.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are
//!   defined (e.g. binder words like `be` accept the capitalized spelling too).
//! - This registry is intentionally **pure** (no tree types/IO/side effects).
//! - Phrase lookup ([`phrase_at`]) is longest-match and only succeeds on a whole-word
//!   boundary, so a phrase never steals the prefix of a longer identifier.

/// Stable identifier for every reserved keyword, including multi-word phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statement openers
    Let,
    Define,
    Set,
    Process,
    If,
    For,
    While,
    Display,
    Return,

    // Control flow (reserved, not yet dispatched by the statement parser)
    Otherwise,
    Unless,
    When,
    Match,
    Loop,
    Yield,
    Break,
    Continue,
    Throw,
    Assert,
    Delete,
    Try,
    Catch,
    Finally,

    // Declarations / modules
    Type,
    Import,
    Export,
    External,
    Protocol,

    // Modifiers
    New,
    Static,
    Public,
    Private,
    Async,
    With,

    // Concurrency / effects
    Await,
    Send,
    Receive,
    Spawn,

    // Connectives
    As,
    From,
    To,
    By,
    In,
    Of,

    // Binders (lowercase in source; consumed by specific statement forms)
    Be,
    Called,
    Constant,
    Returns,

    // Word operators (capitalized reserved spellings)
    And,
    Or,
    Not,
    Is,
    Plus,
    Minus,
    Times,
    Multiplied,
    Divided,
    Modulo,
    Power,
    Equal,
    Greater,
    Less,
    Than,
    Contains,

    // Literals
    True,
    False,
    None,
    Null,
    Nil,

    // Multi-word phrases
    ProcessCalled,
    ForEach,
    ThatTakes,
    ToThePowerOf,
    IsEqualTo,
    IsNotEqualTo,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Statement,
    ControlFlow,
    Declaration,
    Modifier,
    Connective,
    Binder,
    Operator,
    Literal,
}

/// Metadata for a keyword or keyword phrase.
///
/// `canonical` is the spelling the language reference uses; `aliases` are additional
/// spellings accepted by the lexer (mostly capitalization variants of binder words).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
}

const fn kw(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
    }
}

/// Registry of all single-word keywords.
///
/// The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Statement openers
    kw(KeywordId::Let, "Let", &[], KeywordCategory::Statement),
    kw(KeywordId::Define, "Define", &[], KeywordCategory::Statement),
    kw(KeywordId::Set, "Set", &[], KeywordCategory::Statement),
    kw(KeywordId::Process, "Process", &[], KeywordCategory::Statement),
    kw(KeywordId::If, "If", &[], KeywordCategory::Statement),
    kw(KeywordId::For, "For", &[], KeywordCategory::Statement),
    kw(KeywordId::While, "While", &[], KeywordCategory::Statement),
    kw(KeywordId::Display, "Display", &[], KeywordCategory::Statement),
    kw(KeywordId::Return, "Return", &[], KeywordCategory::Statement),
    // Control flow
    kw(KeywordId::Otherwise, "Otherwise", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Unless, "Unless", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::When, "When", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Match, "Match", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Loop, "Loop", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Yield, "Yield", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Break, "Break", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Continue, "Continue", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Throw, "Throw", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Assert, "Assert", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Delete, "Delete", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Try, "Try", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Catch, "Catch", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Finally, "Finally", &[], KeywordCategory::ControlFlow),
    // Declarations / modules
    kw(KeywordId::Type, "Type", &[], KeywordCategory::Declaration),
    kw(KeywordId::Import, "Import", &[], KeywordCategory::Declaration),
    kw(KeywordId::Export, "Export", &[], KeywordCategory::Declaration),
    kw(KeywordId::External, "External", &[], KeywordCategory::Declaration),
    kw(KeywordId::Protocol, "Protocol", &[], KeywordCategory::Declaration),
    // Modifiers
    kw(KeywordId::New, "New", &[], KeywordCategory::Modifier),
    kw(KeywordId::Static, "Static", &[], KeywordCategory::Modifier),
    kw(KeywordId::Public, "Public", &[], KeywordCategory::Modifier),
    kw(KeywordId::Private, "Private", &[], KeywordCategory::Modifier),
    kw(KeywordId::Async, "Async", &[], KeywordCategory::Modifier),
    kw(KeywordId::With, "With", &[], KeywordCategory::Modifier),
    // Concurrency / effects
    kw(KeywordId::Await, "Await", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Send, "Send", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Receive, "Receive", &[], KeywordCategory::ControlFlow),
    kw(KeywordId::Spawn, "Spawn", &[], KeywordCategory::ControlFlow),
    // Connectives
    kw(KeywordId::As, "as", &["As"], KeywordCategory::Connective),
    kw(KeywordId::From, "From", &[], KeywordCategory::Connective),
    kw(KeywordId::To, "to", &["To"], KeywordCategory::Connective),
    kw(KeywordId::By, "By", &[], KeywordCategory::Connective),
    kw(KeywordId::In, "in", &["In"], KeywordCategory::Connective),
    kw(KeywordId::Of, "Of", &[], KeywordCategory::Connective),
    // Binders
    kw(KeywordId::Be, "be", &["Be"], KeywordCategory::Binder),
    kw(KeywordId::Called, "called", &["Called"], KeywordCategory::Binder),
    kw(KeywordId::Constant, "constant", &["Constant"], KeywordCategory::Binder),
    kw(KeywordId::Returns, "returns", &["Returns"], KeywordCategory::Binder),
    // Word operators
    kw(KeywordId::And, "And", &[], KeywordCategory::Operator),
    kw(KeywordId::Or, "Or", &[], KeywordCategory::Operator),
    kw(KeywordId::Not, "Not", &[], KeywordCategory::Operator),
    kw(KeywordId::Is, "Is", &[], KeywordCategory::Operator),
    kw(KeywordId::Plus, "Plus", &[], KeywordCategory::Operator),
    kw(KeywordId::Minus, "Minus", &[], KeywordCategory::Operator),
    kw(KeywordId::Times, "Times", &[], KeywordCategory::Operator),
    kw(KeywordId::Multiplied, "Multiplied", &[], KeywordCategory::Operator),
    kw(KeywordId::Divided, "Divided", &[], KeywordCategory::Operator),
    kw(KeywordId::Modulo, "Modulo", &[], KeywordCategory::Operator),
    kw(KeywordId::Power, "Power", &[], KeywordCategory::Operator),
    kw(KeywordId::Equal, "Equal", &[], KeywordCategory::Operator),
    kw(KeywordId::Greater, "Greater", &[], KeywordCategory::Operator),
    kw(KeywordId::Less, "Less", &[], KeywordCategory::Operator),
    kw(KeywordId::Than, "Than", &[], KeywordCategory::Operator),
    kw(KeywordId::Contains, "Contains", &[], KeywordCategory::Operator),
    // Literals
    kw(KeywordId::True, "True", &[], KeywordCategory::Literal),
    kw(KeywordId::False, "False", &[], KeywordCategory::Literal),
    kw(KeywordId::None, "None", &[], KeywordCategory::Literal),
    kw(KeywordId::Null, "Null", &[], KeywordCategory::Literal),
    kw(KeywordId::Nil, "Nil", &[], KeywordCategory::Literal),
];

/// Registry of multi-word keyword phrases, longest spellings first.
///
/// The lexer tries these before single-word classification so that a contiguous phrase
/// always becomes one token.
pub const PHRASES: &[KeywordInfo] = &[
    kw(
        KeywordId::IsNotEqualTo,
        "is not equal to",
        &[],
        KeywordCategory::Operator,
    ),
    kw(KeywordId::ToThePowerOf, "to the power of", &[], KeywordCategory::Operator),
    kw(KeywordId::IsEqualTo, "is equal to", &[], KeywordCategory::Operator),
    kw(
        KeywordId::ProcessCalled,
        "Process called",
        &[],
        KeywordCategory::Statement,
    ),
    kw(KeywordId::ThatTakes, "that takes", &[], KeywordCategory::Binder),
    kw(KeywordId::ForEach, "For each", &[], KeywordCategory::Statement),
];

/// Canonical spelling for a keyword id (single word or phrase).
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata for a keyword id, searching both tables.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .chain(PHRASES.iter())
        .find(|k| k.id == id)
        .expect("keyword info missing")
}

/// Look up a single-word spelling (canonical or alias).
///
/// Matching is **case-sensitive**, except where aliases are explicitly defined.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical == s || k.aliases.contains(&s))
        .map(|k| k.id)
}

/// Find the longest keyword phrase matching at the start of `text`.
///
/// A phrase only matches on a whole-word boundary: the character following the phrase
/// (if any) must not continue an identifier word. Returns the id and the matched length
/// in bytes.
pub fn phrase_at(text: &str) -> Option<(KeywordId, usize)> {
    let mut best: Option<(KeywordId, usize)> = None;
    for p in PHRASES {
        if text.starts_with(p.canonical)
            && !text[p.canonical.len()..]
                .chars()
                .next()
                .is_some_and(super::is_word_continue)
            && best.is_none_or(|(_, len)| p.canonical.len() > len)
        {
            best = Some((p.id, p.canonical.len()));
        }
    }
    best
}

/// Return `true` if `id` opens a statement recognized by the statement parser.
///
/// This is the boundary set the parser uses for recovery: consumption of the current
/// construct stops when one of these keywords begins a new line of input.
pub fn starts_statement(id: KeywordId) -> bool {
    matches!(
        id,
        KeywordId::Let
            | KeywordId::Define
            | KeywordId::Set
            | KeywordId::Process
            | KeywordId::ProcessCalled
            | KeywordId::If
            | KeywordId::For
            | KeywordId::ForEach
            | KeywordId::While
            | KeywordId::Display
            | KeywordId::Return
    )
}
