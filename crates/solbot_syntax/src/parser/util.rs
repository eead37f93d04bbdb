/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”: identifier and type-name parsing, and the balanced skips used for
/// initializers and inheritance arguments.
impl<I: Iterator<Item = Token>> Parser<I> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Bind `current` (an identifier token) as an [`Identifier`].
    fn identifier(&self) -> Identifier {
        Identifier {
            name_pos: self.current.pos,
            name: self.current.literal.clone(),
        }
    }

    /// Bind `current` (an elementary type token) as an [`ElementaryType`], taking a following
    /// `payable` when the type is `address`.
    fn parse_elementary_type(&mut self) -> ElementaryType {
        let value_pos = self.current.pos;
        let kind = self.current.kind;
        let value = self.current.literal.clone();

        let mut payable = None;
        if kind.elementary_type_id() == Some(ElementaryTypeId::Address)
            && self.peek.kind.is_keyword(KeywordId::Payable)
        {
            self.next_token();
            payable = Some(self.current.pos);
        }

        ElementaryType {
            value_pos,
            kind,
            value,
            payable,
        }
    }

    /// Parameter type: an elementary type or a user-defined name, with any `[...]` suffixes.
    ///
    /// The lookahead holds the first token of the type; on success `current` is its last token.
    fn parse_type_name(&mut self) -> Option<TypeName> {
        let base = match self.peek.kind {
            TokenKind::ElementaryType(_) => {
                self.next_token();
                TypeName::Elementary(self.parse_elementary_type())
            }
            TokenKind::Identifier => {
                self.next_token();
                TypeName::UserDefined(self.identifier())
            }
            _ => {
                self.peek_error(TokenKind::Identifier);
                return None;
            }
        };
        self.parse_array_suffixes(base)
    }

    /// Wrap `ty` in one [`TypeName::Array`] per `[]` or `[<length>]` that follows it.
    fn parse_array_suffixes(&mut self, mut ty: TypeName) -> Option<TypeName> {
        while self.peek_is_punct(PunctuationId::LBracket) {
            self.next_token();
            let length = match self.peek.kind {
                TokenKind::DecimalNumber | TokenKind::HexNumber | TokenKind::Identifier => {
                    self.next_token();
                    Some(self.current.literal.clone())
                }
                _ => None,
            };
            self.expect_peek(TokenKind::Punctuation(PunctuationId::RBracket))?;
            ty = TypeName::Array {
                base: Box::new(ty),
                length,
                closing: self.current.pos,
            };
        }

        Some(ty)
    }

    /// Consume up to and including the `;` that ends a variable declaration.
    ///
    /// Braces in the initializer are balanced. `Eof`, or a `}` that would close the enclosing
    /// scope, is reported as a missing `;` and left unconsumed.
    fn skip_to_semicolon(&mut self) -> Option<Position> {
        let mut depth = 0usize;
        loop {
            match self.peek.kind {
                TokenKind::Eof => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::Semicolon));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::RBrace) if depth == 0 => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::Semicolon));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::Semicolon) if depth == 0 => {
                    self.next_token();
                    return Some(self.current.pos);
                }
                TokenKind::Punctuation(PunctuationId::LBrace) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RBrace) => depth -= 1,
                _ => {}
            }
            self.next_token();
        }
    }

    /// Skip a balanced `( ... )`; `current` is `(` on entry and the matching `)` on return.
    fn skip_parenthesized(&mut self) -> Option<()> {
        let mut depth = 1usize;
        loop {
            match self.peek.kind {
                TokenKind::Eof => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::RParen));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::LParen) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        self.next_token();
                        return Some(());
                    }
                }
                _ => {}
            }
            self.next_token();
        }
    }
}
