#![forbid(unsafe_code)]
//! solbot: a Solidity syntax front end
//!
//! This crate ships the tooling around the shared syntax frontend: a command-line tool that lexes, parses and checks
//! `.sol` files, and a language server that publishes parse diagnostics and answers hover, go-to-definition and
//! document-symbol requests.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation. The vocabulary registries use `.expect("... info missing")` for their table lookups.

pub mod cli;
pub mod lsp;
pub mod version;

pub use solbot_syntax::ast;
pub use solbot_syntax::diagnostics;
pub use solbot_syntax::lexer;
pub use solbot_syntax::parser;

pub use solbot_syntax::{LexerMode, ParseConfig};
