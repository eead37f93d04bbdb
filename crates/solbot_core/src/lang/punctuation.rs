//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters, separators, the member-access period, and the two arrows.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - This module is vocabulary only (spellings and token-kind names). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use solbot_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("=>"), Some(PunctuationId::DoubleArrow));
//! assert_eq!(punctuation::name(PunctuationId::Semicolon), "SEMICOLON");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators / markers
    Semicolon,
    Comma,
    Colon,
    Question,

    // Access
    Period,

    // Arrows
    DoubleArrow,
    RightArrow,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub name: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators / markers
    info(PunctuationId::Semicolon, ";", "SEMICOLON"),
    info(PunctuationId::Comma, ",", "COMMA"),
    info(PunctuationId::Colon, ":", "COLON"),
    info(PunctuationId::Question, "?", "QUESTION"),
    // Access
    info(PunctuationId::Period, ".", "PERIOD"),
    // Arrows
    info(PunctuationId::DoubleArrow, "=>", "DOUBLE_ARROW"),
    info(PunctuationId::RightArrow, "->", "RIGHT_ARROW"),
    // Delimiters
    info(PunctuationId::LParen, "(", "LPAREN"),
    info(PunctuationId::RParen, ")", "RPAREN"),
    info(PunctuationId::LBracket, "[", "LBRACKET"),
    info(PunctuationId::RBracket, "]", "RBRACKET"),
    info(PunctuationId::LBrace, "{", "LBRACE"),
    info(PunctuationId::RBrace, "}", "RBRACE"),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Stable token-kind name (e.g. `"LPAREN"`).
pub fn name(id: PunctuationId) -> &'static str {
    info_for(id).name
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(PunctuationId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, canonical: &'static str, name: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical, name }
}
