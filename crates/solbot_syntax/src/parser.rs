//! Parser for Solidity
//!
//! Recursive-descent parser with exactly one token of lookahead. It pulls tokens from any
//! `Iterator<Item = Token>` (the inline [`Lexer`] or the threaded [`TokenStream`]) and builds a
//! [`File`] of top-level declarations plus an ordered list of [`Diagnostic`]s.
//!
//! ## Notes
//! - The parser never aborts: a failed declaration records one diagnostic, yields no node, and
//!   recovery skips to the end of the construct.
//! - Constructs outside the modeled grammar are skipped and reported once as a warning.
//!
//! ## Examples
//!
//! ```rust
//! use solbot_syntax::ast::Declaration;
//! use solbot_syntax::parser;
//!
//! let result = parser::parse_file("function deposit(uint256 amount) public { total += amount; }");
//! assert!(result.diagnostics.is_empty());
//! assert!(matches!(result.file.declarations[0], Declaration::Function(_)));
//! ```

use crate::ast::*;
use crate::config::{LexerMode, ParseConfig};
use crate::diagnostics::Diagnostic;
use crate::lexer::{Lexer, Token, TokenKind, TokenStream};
use solbot_core::lang::keywords::KeywordId;
use solbot_core::lang::punctuation::PunctuationId;
use solbot_core::lang::types::ElementaryTypeId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
