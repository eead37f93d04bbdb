//! Diagnostics produced while lexing and parsing.
//!
//! Diagnostics are plain data: the parser records them in order and keeps going. Outer surfaces
//! render them either through [`miette`] (the CLI) or by converting spans to editor ranges (the
//! language server).

use std::fmt;

use miette::LabeledSpan;

use crate::ast::Span;

/// A lexical or syntactic problem with location information
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub hints: Vec<String>,
}

impl Diagnostic {
    /// An unrecoverable scan error; the parse attempt ends here.
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: DiagnosticKind::Lexical,
            severity: Severity::Error,
            hints: Vec::new(),
        }
    }

    /// A failed expectation in the grammar.
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: DiagnosticKind::Syntax,
            severity: Severity::Error,
            hints: Vec::new(),
        }
    }

    /// A run of tokens the parser does not model and skipped over.
    pub fn skipped(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: DiagnosticKind::Syntax,
            severity: Severity::Warning,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Stable diagnostic code, e.g. `solbot::syntax`.
    pub fn code_str(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::Lexical => "solbot::lexical",
            DiagnosticKind::Syntax => "solbot::syntax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
        };
        Some(Box::new(std::iter::once(LabeledSpan::at(
            self.span.start..self.span.end,
            label,
        ))))
    }
}
