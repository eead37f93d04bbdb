//! CLI module for solbot
//!
//! This module provides the command-line interface over the syntax frontend.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream, one token per line
//! - `parse <file> [--json]` - Print the parsed declarations
//! - `check <file>` - Render diagnostics and fail on syntax errors
//!
//! ## Global flags
//!
//! - `--threaded` - Run the lexer on its own thread behind a bounded channel
//! - `--no-skip-warnings` - Do not report skipped regions as warnings
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::SOLBOT_VERSION;
use crate::{LexerMode, ParseConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Solidity syntax front end
#[derive(Parser, Debug)]
#[command(name = "solbot")]
#[command(version = SOLBOT_VERSION)]
#[command(about = "Lex, parse and check Solidity source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Run the lexer on its own thread behind a bounded channel
    #[arg(long, global = true)]
    pub threaded: bool,

    /// Do not report skipped regions as warnings
    #[arg(long = "no-skip-warnings", global = true)]
    pub no_skip_warnings: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream, one token per line
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a file and print its declarations
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print declarations and diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report diagnostics; fails if the file has syntax errors
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Parser configuration selected by the global flags.
    pub fn parse_config(&self) -> ParseConfig {
        let mode = if self.threaded {
            LexerMode::Threaded
        } else {
            LexerMode::Inline
        };
        ParseConfig::new()
            .with_lexer_mode(mode)
            .with_report_skipped(!self.no_skip_warnings)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.parse_config();
    tracing::debug!(?config, "parsed command line");

    match cli.command {
        Command::Lex { file } => commands::lex_file(&file.to_string_lossy(), &config),
        Command::Parse { file, json } => commands::parse_file(&file.to_string_lossy(), &config, json),
        Command::Check { file } => commands::check_file(&file.to_string_lossy(), &config),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["solbot", "lex", "Vault.sol"]).unwrap();
        assert!(matches!(cli.command, Command::Lex { .. }));
    }

    #[test]
    fn test_cli_parse_json_flag() {
        let cli = Cli::try_parse_from(["solbot", "parse", "Vault.sol", "--json"]).unwrap();
        if let Command::Parse { file, json } = cli.command {
            assert_eq!(file, PathBuf::from("Vault.sol"));
            assert!(json);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["solbot", "check", "Vault.sol"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["solbot"]).is_err());
        assert!(Cli::try_parse_from(["solbot", "Vault.sol"]).is_err());
    }

    #[test]
    fn test_global_flags_map_onto_config() {
        let cli = Cli::try_parse_from(["solbot", "check", "Vault.sol", "--threaded", "--no-skip-warnings"]).unwrap();
        let config = cli.parse_config();
        assert_eq!(config.lexer_mode, LexerMode::Threaded);
        assert!(!config.report_skipped);

        let cli = Cli::try_parse_from(["solbot", "lex", "Vault.sol"]).unwrap();
        assert_eq!(cli.parse_config(), ParseConfig::default());
    }
}
