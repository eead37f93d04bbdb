//! Solidity vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation, and elementary type names.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer/parser/tooling.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings and token-kind names via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   hover text, token dumps).
//!
//! ## Examples
//! ```rust
//! use solbot_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Function), "function");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod types;
