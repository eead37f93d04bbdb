//! Shared syntax frontend for Solidity: lexer, token stream, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the `solbot` CLI and the language server.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or check types.
//! - Vocabulary identity (keywords/operators/punctuation/elementary types) comes from `solbot_core::lang` registries.
//! - Parsing never fails as a whole: malformed input yields a partial [`ast::File`] plus diagnostics.
//!
//! ## Examples
//! ```rust
//! use solbot_syntax::ast::Node;
//! use solbot_syntax::parser;
//!
//! let result = parser::parse_file("uint256 x;");
//! assert!(result.diagnostics.is_empty());
//! assert_eq!(result.file.declarations.len(), 1);
//! assert_eq!(result.file.declarations[0].end().offset(), 10);
//! ```
//!
//! ## See also
//! - `solbot_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use config::{LexerMode, ParseConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
