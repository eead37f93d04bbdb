//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use solbot_core::lang::keywords::KeywordId;
use solbot_core::lang::operators::OperatorId;
use solbot_core::lang::punctuation::PunctuationId;
use solbot_core::lang::types::ElementaryTypeId;

use crate::lexer::{Token, TokenKind};

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

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the elementary type id, if this is a value-type keyword.
    pub fn elementary_type_id(&self) -> Option<ElementaryTypeId> {
        match self {
            TokenKind::ElementaryType(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this token can begin a declaration the parser recognizes.
    ///
    /// ## Notes
    /// - Elementary types are excluded: they also appear inside constructs the parser skips
    ///   (`using X for uint256;`, `mapping(address => uint256)`), and stopping there would cascade.
    pub fn starts_declaration(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(
                KeywordId::Function
                    | KeywordId::Contract
                    | KeywordId::Library
                    | KeywordId::Interface
                    | KeywordId::Abstract
            )
        )
    }

    /// Return `true` if this token opens a contract-like definition.
    pub fn starts_contract(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordId::Contract | KeywordId::Library | KeywordId::Interface | KeywordId::Abstract)
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.is_punctuation(id)`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }
}
