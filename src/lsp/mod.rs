//! solbot Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (lexical errors, syntax errors, skipped regions)
//! - Hover information (declaration and parameter signatures, doc comments)
//! - Go-to-definition
//! - Document symbols (contracts with their members)

pub mod backend;
pub mod diagnostics;
pub mod symbols;

pub use backend::SolbotLanguageServer;
