//! Lexer for Solidity
//!
//! Handles tokenization including:
//! - Keywords, elementary type names and identifiers
//! - Decimal and hexadecimal number literals (with fractions and exponents)
//! - String literals
//! - Operators and punctuation, scanned with maximal munch
//! - `//` and `/* */` comments (recorded, not emitted)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `munch` - Operator tries for maximal munch
//! - `stream` - Threaded token stream over a bounded channel
//!
//! ## Notes
//! - The lexer is lazy: it is an [`Iterator`] producing one token per call.
//! - Every scan ends in exactly one terminal token, `Eof` or `Illegal`; after that the iterator is fused.

mod munch;
mod stream;
pub mod tokens;

pub use stream::TokenStream;
pub use tokens::{Token, TokenKind, lookup_ident};

use std::iter::FusedIterator;

use solbot_core::lang::punctuation::PunctuationId;

use crate::ast::{Comment, Position};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
//
// [SourceUnit] → letter/_ → [Identifier] → emit → [SourceUnit]
//      │       → digit    → [Number]     → emit → [SourceUnit]
//      │       → EOF / unrecognised char → emit terminal → [Done]
//      └──────→ punctuation / operator / string → emit → [SourceUnit]
// ============================================================================

/// Scanner state; one routine per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SourceUnit,
    Identifier,
    Number,
    Done,
}

/// Outcome of running one state routine.
enum Step {
    Emit(Token, State),
    Switch(State),
}

const DECIMAL_DIGITS: &str = "0123456789";
const DIGIT_RUN: &str = "0123456789_";
const HEX_DIGIT_RUN: &str = "0123456789abcdefABCDEF_";

/// Lexer for Solidity source code.
///
/// `start` marks the beginning of the token being scanned, `pos` the next unread byte.
pub struct Lexer<'src> {
    input: &'src str,
    start: usize,
    pos: usize,
    width: usize,
    state: State,
    comments: Vec<Comment>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            state: State::SourceUnit,
            comments: Vec::new(),
        }
    }

    /// Comments skipped so far, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn into_comments(self) -> Vec<Comment> {
        self.comments
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Consume the next char. At end of input returns `None` and sets the width to 0 so
    /// a following `backup` is a no-op.
    fn read_char(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the last char read. Valid once per `read_char`.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    /// Drop the pending text without emitting it.
    fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Consume the next char if it is in `valid`.
    fn accept(&mut self, valid: &str) -> bool {
        match self.peek() {
            Some(c) if valid.contains(c) => {
                self.read_char();
                true
            }
            _ => false,
        }
    }

    /// Consume a run of chars from `valid`.
    fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    /// Emit the pending text as a token of `kind` and continue in `next`.
    fn emit(&mut self, kind: TokenKind, next: State) -> Step {
        let token = Token::new(kind, &self.input[self.start..self.pos], Position(self.start));
        tracing::trace!(kind = %token.kind, pos = self.start, "token");
        self.start = self.pos;
        Step::Emit(token, next)
    }

    /// Emit a terminal `Illegal` token carrying `message` and stop scanning.
    fn errorf(&mut self, message: String) -> Step {
        tracing::debug!(pos = self.start, %message, "lexical error");
        let token = Token::new(TokenKind::Illegal, message, Position(self.start));
        self.start = self.pos;
        Step::Emit(token, State::Done)
    }

    // ========================================================================
    // State routines
    // ========================================================================

    fn lex_source_unit(&mut self) -> Step {
        loop {
            let Some(c) = self.read_char() else {
                return self.emit(TokenKind::Eof, State::Done);
            };

            match c {
                ' ' | '\t' | '\r' | '\n' => self.ignore(),
                '/' if self.peek() == Some('/') => self.line_comment(),
                '/' if self.peek() == Some('*') => {
                    if !self.block_comment() {
                        return self.errorf("Unterminated block comment".to_string());
                    }
                }
                '"' | '\'' => return self.lex_string(c),
                c if is_ident_start(c) => return Step::Switch(State::Identifier),
                c if c.is_ascii_digit() => {
                    self.backup();
                    return Step::Switch(State::Number);
                }
                c => {
                    if let Some(id) = single_punctuation(c) {
                        return self.emit(TokenKind::Punctuation(id), State::SourceUnit);
                    }
                    if let Some(root) = munch::root(c) {
                        return self.lex_munch(root);
                    }
                    return self.errorf(format!("Unrecognised character in source unit: '{c}'"));
                }
            }
        }
    }

    /// Identifier-shaped word; the first char has already been consumed.
    fn lex_identifier(&mut self) -> Step {
        while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
            self.read_char();
        }
        let kind = lookup_ident(&self.input[self.start..self.pos]);
        self.emit(kind, State::SourceUnit)
    }

    fn lex_number(&mut self) -> Step {
        self.accept("+-");

        let mut kind = TokenKind::DecimalNumber;
        let mut digits = DIGIT_RUN;
        if self.accept("0") && self.accept("x") {
            kind = TokenKind::HexNumber;
            digits = HEX_DIGIT_RUN;
        }
        self.accept_run(digits);

        if kind == TokenKind::DecimalNumber
            && self.peek() == Some('.')
            && self.peek_second().is_some_and(|c| c.is_ascii_digit())
        {
            self.read_char();
            self.accept_run(DIGIT_RUN);
        }

        if self.accept("eE") {
            self.accept("+-");
            self.accept_run(DECIMAL_DIGITS);
        }

        self.emit(kind, State::SourceUnit)
    }

    /// Quoted string; the opening quote has already been consumed.
    fn lex_string(&mut self, quote: char) -> Step {
        loop {
            match self.read_char() {
                None | Some('\n') => return self.errorf("Unterminated string literal".to_string()),
                Some('\\') => {
                    if self.read_char().is_none() {
                        return self.errorf("Unterminated string literal".to_string());
                    }
                }
                Some(c) if c == quote => return self.emit(TokenKind::StringLiteral, State::SourceUnit),
                Some(_) => {}
            }
        }
    }

    /// Follow the munch trie from `root` as far as the input allows.
    fn lex_munch(&mut self, root: &'static munch::Munch) -> Step {
        let mut node = root;
        while let Some(next) = self.peek().and_then(|c| munch::step(node, c)) {
            self.read_char();
            node = next;
        }
        self.emit(node.kind, State::SourceUnit)
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// `//` up to (not including) the end of the line.
    fn line_comment(&mut self) {
        while matches!(self.peek(), Some(c) if c != '\n') {
            self.read_char();
        }
        self.record_comment();
    }

    /// `/* ... */`; returns `false` if the input ends first.
    fn block_comment(&mut self) -> bool {
        self.read_char();
        match self.input[self.pos..].find("*/") {
            Some(offset) => {
                self.pos += offset + 2;
                self.record_comment();
                true
            }
            None => false,
        }
    }

    fn record_comment(&mut self) {
        self.comments.push(Comment {
            slash: Position(self.start),
            text: self.input[self.start..self.pos].to_string(),
        });
        self.ignore();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let step = match self.state {
                State::SourceUnit => self.lex_source_unit(),
                State::Identifier => self.lex_identifier(),
                State::Number => self.lex_number(),
                State::Done => return None,
            };
            match step {
                Step::Emit(token, next) => {
                    self.state = next;
                    return Some(token);
                }
                Step::Switch(next) => self.state = next,
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Punctuation that is always a single character.
fn single_punctuation(c: char) -> Option<PunctuationId> {
    match c {
        ';' => Some(PunctuationId::Semicolon),
        ',' => Some(PunctuationId::Comma),
        ':' => Some(PunctuationId::Colon),
        '?' => Some(PunctuationId::Question),
        '.' => Some(PunctuationId::Period),
        '(' => Some(PunctuationId::LParen),
        ')' => Some(PunctuationId::RParen),
        '[' => Some(PunctuationId::LBracket),
        ']' => Some(PunctuationId::RBracket),
        '{' => Some(PunctuationId::LBrace),
        '}' => Some(PunctuationId::RBrace),
        _ => None,
    }
}

/// Create a lexer over `source`.
///
/// Tokens are produced lazily as the returned iterator is advanced.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex `source` to completion, returning every token (terminal included) and the comments.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Comment>) {
    let mut lexer = lex(source);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.into_comments())
}
