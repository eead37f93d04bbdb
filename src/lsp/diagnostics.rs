//! Convert solbot parse diagnostics to LSP diagnostics

use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString, Position, Range, Url,
};

use crate::diagnostics::{Diagnostic as ParseDiagnostic, Severity};

/// Convert a byte offset to LSP Position (0-based line and character)
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset.
///
/// Returns `None` when the line does not exist. A character past the end of its line clamps to the line end.
pub fn position_to_offset(source: &str, position: Position) -> Option<usize> {
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if line == position.line && (col == position.character || c == '\n') {
            return Some(i);
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    (line == position.line).then_some(source.len())
}

/// Convert a span to LSP Range
pub fn span_to_range(source: &str, start: usize, end: usize) -> Range {
    let start_pos = offset_to_position(source, start);
    let end_pos = offset_to_position(source, end.max(start + 1));
    Range::new(start_pos, end_pos)
}

/// Convert Severity to LSP DiagnosticSeverity
fn severity_to_lsp(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    }
}

/// Convert a parse diagnostic to LSP Diagnostic
pub fn parse_diagnostic_to_lsp(error: &ParseDiagnostic, source: &str, uri: &Url) -> Diagnostic {
    let range = span_to_range(source, error.span.start, error.span.end);

    // Build the message with hints
    let mut message = error.message.clone();
    for hint in &error.hints {
        message.push_str("\n\nhint: ");
        message.push_str(hint);
    }

    // Hints also go to related information (shows in Problems panel)
    let related_information: Vec<DiagnosticRelatedInformation> = error
        .hints
        .iter()
        .map(|hint| DiagnosticRelatedInformation {
            location: Location {
                uri: uri.clone(),
                range,
            },
            message: format!("hint: {}", hint),
        })
        .collect();

    Diagnostic {
        range,
        severity: Some(severity_to_lsp(error.severity)),
        code: Some(NumberOrString::String(error.code_str().to_string())),
        code_description: None,
        source: Some("solbot".to_string()),
        message,
        related_information: if related_information.is_empty() {
            None
        } else {
            Some(related_information)
        },
        tags: None,
        data: None,
    }
}
