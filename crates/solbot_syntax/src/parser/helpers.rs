/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Advancing the `current`/`peek` window (`next_token`, `pull`)
/// - Matching / expecting the lookahead token (`peek_is`, `expect_peek`)
/// - Recording diagnostics (`peek_error`)
/// - Error recovery (`skip_construct`)
impl<I: Iterator<Item = Token>> Parser<I> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Shift the lookahead window by one token.
    fn next_token(&mut self) {
        let next = self.pull();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Fetch the next token from the source.
    ///
    /// ## Notes
    /// - `Illegal` is recorded as a lexical diagnostic and replaced by `Eof` at the same position.
    /// - After the terminal token (or an exhausted source) this keeps returning `Eof`.
    fn pull(&mut self) -> Token {
        if self.finished {
            return Token::eof(self.eof_pos);
        }
        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::Illegal => {
                self.finished = true;
                self.lexical_failure = true;
                self.eof_pos = token.pos;
                let span = token.span();
                self.diagnostics.push(Diagnostic::lexical(token.literal, span));
                Token::eof(self.eof_pos)
            }
            Some(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                self.eof_pos = token.pos;
                token
            }
            Some(token) => {
                self.eof_pos = token.end();
                token
            }
            None => {
                self.finished = true;
                Token::eof(self.eof_pos)
            }
        }
    }

    /// Return `true` if the lookahead token is exactly `kind`.
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn peek_is_punct(&self, id: PunctuationId) -> bool {
        self.peek.kind.is_punctuation(id)
    }

    fn peek_keyword(&self) -> Option<KeywordId> {
        self.peek.kind.keyword_id()
    }

    /// Advance if the lookahead is `kind`; otherwise record a diagnostic and fail without consuming.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    /// Record `expected <KIND>, got <KIND> instead (at offset <n>)` at the lookahead token.
    ///
    /// ## Notes
    /// - Suppressed for the synthetic `Eof` that follows a lexical error, which was already reported.
    /// - An identical diagnostic at the same span is not recorded twice.
    fn peek_error(&mut self, expected: TokenKind) {
        if self.lexical_failure && self.peek.kind == TokenKind::Eof {
            return;
        }
        let message = format!(
            "expected {expected}, got {} instead (at offset {})",
            self.peek.kind, self.peek.pos
        );
        let span = self.peek.span();
        if self
            .diagnostics
            .last()
            .is_some_and(|d| d.span == span && d.message == message)
        {
            return;
        }
        tracing::trace!(%message, "syntax error");
        self.diagnostics.push(Diagnostic::syntax(message, span));
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Consume the rest of the construct `current` belongs to.
    ///
    /// Braces are tracked; the region ends on
    /// - a `;` outside braces,
    /// - the `}` that closes the outermost brace, or a stray `}`,
    /// - `Eof` next,
    /// - a declaration starter next, outside braces,
    /// - (in a contract) the contract's closing `}` next.
    ///
    /// With `statement_tail`, a closing outermost `}` does not end the region while the
    /// lookahead still continues the statement (`import {A} from "./A.sol";`).
    ///
    /// `current` is left on the last token of the region.
    fn skip_construct(&mut self, scope: Scope, statement_tail: bool) {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Punctuation(PunctuationId::LBrace) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    if depth == 0 && !(statement_tail && self.peek_continues_statement()) {
                        return;
                    }
                }
                TokenKind::Punctuation(PunctuationId::Semicolon) if depth == 0 => return,
                _ => {}
            }

            if self.peek.kind == TokenKind::Eof {
                return;
            }
            if depth == 0 {
                if self.peek.kind.starts_declaration() {
                    return;
                }
                if scope == Scope::Contract && self.peek_is_punct(PunctuationId::RBrace) {
                    return;
                }
            }
            self.next_token();
        }
    }

    /// Tokens that can follow a brace group inside one statement: `from` and the path in
    /// `import {A} from "a.sol";`, `for` in `using {f} for T;`, or the terminating `;`.
    fn peek_continues_statement(&self) -> bool {
        matches!(
            self.peek.kind,
            TokenKind::Identifier
                | TokenKind::StringLiteral
                | TokenKind::Keyword(KeywordId::For)
                | TokenKind::Punctuation(PunctuationId::Semicolon)
        )
    }

    /// Skip a construct the parser does not model, reporting it once as a warning.
    fn skip_region(&mut self, scope: Scope) {
        let first = self.current.clone();
        self.skip_construct(scope, true);
        tracing::trace!(kind = %first.kind, pos = %first.pos, "skipped region");

        if self.report_skipped {
            let span = Span::new(first.pos.offset(), self.current.end().offset());
            let message = format!(
                "expected declaration, got {} instead (at offset {})",
                first.kind, first.pos
            );
            self.diagnostics.push(
                Diagnostic::skipped(message, span)
                    .with_hint("only state variables, functions and contract definitions are parsed; this region was skipped"),
            );
        }
    }
}
