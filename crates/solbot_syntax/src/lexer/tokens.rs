//! Token types for the Solidity lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `ElementaryType(ElementaryTypeId)` for value-type keywords such as `uint256`
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - `Display` prints the stable token-kind name (`SEMICOLON`, `UINT_256`, `ASSIGN_SHL`), which is what
//!   diagnostics and token dumps show.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use solbot_core::lang::keywords::{self, KeywordId};
use solbot_core::lang::operators::{self, OperatorId};
use solbot_core::lang::punctuation::{self, PunctuationId};
use solbot_core::lang::types::ElementaryTypeId;

use crate::ast::{Position, Span};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Terminal ==========
    Eof,
    /// Unrecoverable scan error; the token literal carries the message.
    Illegal,

    // ========== Identifiers and Literals ==========
    Identifier,
    DecimalNumber,
    HexNumber,
    StringLiteral,

    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    ElementaryType(ElementaryTypeId),
    Punctuation(PunctuationId),
    Operator(OperatorId),
}

impl TokenKind {
    /// Return `true` for `Eof` and `Illegal`, the only kinds that can end a scan.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Illegal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Illegal => f.write_str("ILLEGAL"),
            TokenKind::Identifier => f.write_str("IDENTIFIER"),
            TokenKind::DecimalNumber => f.write_str("DECIMAL_NUMBER"),
            TokenKind::HexNumber => f.write_str("HEX_NUMBER"),
            TokenKind::StringLiteral => f.write_str("STRING_LITERAL"),
            TokenKind::Keyword(id) => f.write_str(keywords::name(*id)),
            TokenKind::ElementaryType(id) => f.write_str(&id.token_name()),
            TokenKind::Punctuation(id) => f.write_str(punctuation::name(*id)),
            TokenKind::Operator(id) => f.write_str(operators::name(*id)),
        }
    }
}

/// A token with its kind, matched text and start offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text; for `Illegal`, the error message.
    pub literal: String,
    pub pos: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            pos,
        }
    }

    /// End-of-input marker at `pos`.
    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, "", pos)
    }

    /// Offset just past the matched text; terminal tokens are zero-width.
    pub fn end(&self) -> Position {
        if self.kind.is_terminal() {
            self.pos
        } else {
            self.pos.advance(self.literal.len())
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.pos.offset(), self.end().offset())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.kind)?;
        if !self.literal.is_empty() {
            write!(f, " {}", self.literal)?;
        }
        Ok(())
    }
}

/// Resolve an identifier-shaped spelling to its token kind.
///
/// Elementary type names win over keywords; anything unreserved is an identifier.
pub fn lookup_ident(spelling: &str) -> TokenKind {
    if let Some(ty) = solbot_core::lang::types::from_str(spelling) {
        return TokenKind::ElementaryType(ty);
    }
    match keywords::from_str(spelling) {
        Some(id) => TokenKind::Keyword(id),
        None => TokenKind::Identifier,
    }
}
