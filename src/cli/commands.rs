//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use serde_json::{Value, json};

use crate::ast::{Declaration, Node};
use crate::diagnostics::Diagnostic;
use crate::lexer::{self, Token, TokenKind, TokenStream};
use crate::parser::{self, ParseResult};
use crate::{LexerMode, ParseConfig};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while lexing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// lex
// ============================================================================

/// Lex and display tokens.
///
/// Fails with exit code 1 when the scan stops at an illegal token; the tokens before it are still printed.
pub fn lex_file(file_path: &str, config: &ParseConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = collect_tokens(&source, config);

    for tok in &tokens {
        println!("{}", tok);
    }

    match tokens.last() {
        Some(last) if last.kind == TokenKind::Illegal => Err(CliError::failure(format!(
            "{}: lexical error at offset {}: {}",
            file_path, last.pos, last.literal
        ))),
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Run the lexer in the configured mode and collect every token, terminal included.
fn collect_tokens(source: &str, config: &ParseConfig) -> Vec<Token> {
    match config.lexer_mode {
        LexerMode::Inline => lexer::lex(source).collect(),
        LexerMode::Threaded => match TokenStream::with_capacity(source, config.lookahead_capacity) {
            Ok(stream) => stream.collect(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn lexer thread; lexing inline");
                lexer::lex(source).collect()
            }
        },
    }
}

// ============================================================================
// parse
// ============================================================================

/// Parse and display the declarations, either as a debug tree or as JSON.
pub fn parse_file(file_path: &str, config: &ParseConfig, as_json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let result = parser::parse_file_with_config(&source, config);

    if as_json {
        let value = parse_result_to_json(file_path, &result);
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError::failure(format!("Error serializing parse result: {}", e)))?;
        println!("{}", text);
    } else {
        println!("{:#?}", result.file);
        for diag in &result.diagnostics {
            eprintln!("{}", render_diagnostic(file_path, &source, diag));
        }
    }

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// JSON summary of a parse: declaration names, kinds and ranges, then diagnostics.
pub fn parse_result_to_json(file_path: &str, result: &ParseResult) -> Value {
    json!({
        "file": file_path,
        "declarations": result.file.declarations.iter().map(declaration_to_json).collect::<Vec<_>>(),
        "diagnostics": result.diagnostics.iter().map(diagnostic_to_json).collect::<Vec<_>>(),
    })
}

fn declaration_to_json(decl: &Declaration) -> Value {
    let mut value = json!({
        "kind": decl.kind_str(),
        "name": decl.name().name,
        "start": decl.start().offset(),
        "end": decl.end().offset(),
    });
    if let Declaration::Contract(contract) = decl {
        value["members"] = contract.members.iter().map(declaration_to_json).collect();
    }
    value
}

fn diagnostic_to_json(diag: &Diagnostic) -> Value {
    json!({
        "severity": diag.severity.to_string(),
        "kind": diag.kind.to_string(),
        "message": diag.message,
        "start": diag.span.start,
        "end": diag.span.end,
        "hints": diag.hints,
    })
}

// ============================================================================
// check
// ============================================================================

/// Check a file for syntax errors.
///
/// Warnings are printed but do not fail the command.
pub fn check_file(file_path: &str, config: &ParseConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let result = parser::parse_file_with_config(&source, config);

    let warnings: Vec<&Diagnostic> = result.diagnostics.iter().filter(|d| !d.is_error()).collect();
    for diag in &warnings {
        eprintln!("{}", render_diagnostic(file_path, &source, diag));
    }

    if !result.has_errors() {
        println!(
            "✓ No syntax errors ({} declaration(s), {} warning(s))",
            result.file.declarations.len(),
            warnings.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let mut msg = String::new();
    for diag in result.diagnostics.iter().filter(|d| d.is_error()) {
        msg.push_str(&render_diagnostic(file_path, &source, diag));
        msg.push('\n');
    }
    Err(CliError::failure(msg.trim_end()))
}

/// Render one diagnostic with source context.
pub fn render_diagnostic(file_path: &str, source: &str, diag: &Diagnostic) -> String {
    let report = miette::Report::new(diag.clone())
        .with_source_code(miette::NamedSource::new(file_path, source.to_string()));
    format!("{:?}", report)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("solbot_cli_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here.sol").unwrap_err();
        assert!(err.message.starts_with("Cannot access file '/definitely/not/here.sol'"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_read_source_reads_contents() {
        let path = write_temp("read.sol", "uint256 x;");
        let source = read_source(&path.to_string_lossy()).unwrap();
        assert_eq!(source, "uint256 x;");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_collect_tokens_threaded_matches_inline() {
        let source = "contract C { uint256 x = 0x1f; }";
        let inline = collect_tokens(source, &ParseConfig::default());
        let threaded = collect_tokens(source, &ParseConfig::new().with_lexer_mode(LexerMode::Threaded));
        assert_eq!(inline, threaded);
        assert_eq!(inline.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_lex_file_fails_on_illegal_character() {
        let path = write_temp("illegal.sol", "uint256 x = #;");
        let err = lex_file(&path.to_string_lossy(), &ParseConfig::default()).unwrap_err();
        assert!(err.message.contains("lexical error at offset 12"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_parse_result_json_shape() {
        let result = parser::parse_file("contract C { uint256 x; }\nuint256 ;");
        let value = parse_result_to_json("C.sol", &result);

        assert_eq!(value["file"], "C.sol");
        let decls = value["declarations"].as_array().unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0]["kind"], "contract");
        assert_eq!(decls[0]["name"], "C");
        assert_eq!(decls[0]["start"], 0);
        assert_eq!(decls[0]["end"], 25);
        assert_eq!(decls[0]["members"][0]["name"], "x");
        assert_eq!(decls[0]["members"][0]["kind"], "variable");

        let diags = value["diagnostics"].as_array().unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0]["severity"], "error");
        assert_eq!(diags[0]["start"], 34);
    }

    #[test]
    fn test_check_file_passes_with_warnings_only() {
        let path = write_temp("warn.sol", "pragma solidity ^0.8.0;\nuint256 x;");
        let code = check_file(&path.to_string_lossy(), &ParseConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_check_file_fails_on_errors() {
        let path = write_temp("err.sol", "uint256 ;");
        let err = check_file(&path.to_string_lossy(), &ParseConfig::default()).unwrap_err();
        assert!(err.message.contains("expected IDENTIFIER, got SEMICOLON instead"));
        let _ = fs::remove_file(path);
    }
}
