//! Provide the canonical Solidity vocabulary shared by the solbot lexer, parser, CLI, and language server.
//!
//! This crate is intentionally small and dependency-free. It contains const registries that describe every
//! reserved word, operator, punctuation mark, and elementary type name the front end understands.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Registry entries carry a stable upper-snake token-kind name (`ASSIGN_SHL`, `SEMICOLON`, ...). Those names form
//!   a closed contract for tools that print or match on token kinds.

pub mod lang;
