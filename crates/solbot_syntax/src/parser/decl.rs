/// Declaration parsing.
///
/// This chunk parses the declarations the tree models:
/// - state variables (`uint256 public total;`)
/// - functions (`function f(uint256 a) public { ... }`)
/// - contract definitions (`abstract contract C is B { ... }`)
///
/// Every routine starts with `current` on the declaration's first token and returns `None`
/// after recording a diagnostic if the declaration is malformed.
impl<I: Iterator<Item = Token>> Parser<I> {
    // ========================================================================
    // Dispatch
    // ========================================================================

    fn parse_declaration(&mut self, scope: Scope) -> Option<Declaration> {
        let decl = match self.current.kind {
            TokenKind::ElementaryType(_) => self.parse_variable_declaration().map(Declaration::Variable),
            TokenKind::Keyword(KeywordId::Function) => self.parse_function_declaration().map(Declaration::Function),
            kind if kind.starts_contract() && scope == Scope::File => {
                self.parse_contract_definition().map(Declaration::Contract)
            }
            _ => {
                self.skip_region(scope);
                return None;
            }
        };

        if decl.is_none() {
            self.skip_construct(scope, false);
        }
        decl
    }

    // ========================================================================
    // Variables
    // ========================================================================

    /// `<type> [payable] {[<length>]} {attribute} <identifier> [= <initializer>] ;`
    fn parse_variable_declaration(&mut self) -> Option<VariableDeclaration> {
        let base = TypeName::Elementary(self.parse_elementary_type());
        let ty = self.parse_array_suffixes(base)?;

        let mut visibility = None;
        let mut mutability = None;
        while let Some(id) = self.peek_keyword() {
            match id {
                KeywordId::Public | KeywordId::Private | KeywordId::Internal => {
                    visibility = Visibility::from_keyword(id);
                }
                KeywordId::Constant | KeywordId::Immutable => mutability = Mutability::from_keyword(id),
                KeywordId::Override => {}
                _ => break,
            }
            self.next_token();
        }

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.identifier();
        let semicolon = self.skip_to_semicolon()?;

        Some(VariableDeclaration {
            ty,
            visibility,
            mutability,
            name,
            semicolon,
        })
    }

    // ========================================================================
    // Functions
    // ========================================================================

    /// `function <identifier> ( <params> ) {attribute} (; | { ... })`
    fn parse_function_declaration(&mut self) -> Option<FunctionDeclaration> {
        let func_pos = self.current.pos;

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.identifier();

        self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen))?;
        let params = self.parse_param_list()?;

        let (visibility, mutability, body) = self.parse_function_tail()?;

        Some(FunctionDeclaration {
            name,
            ty: FunctionType {
                func_pos,
                params,
                visibility,
                mutability,
                body,
            },
        })
    }

    /// Parameters between the parentheses; `current` is `(` on entry and `)` on return.
    fn parse_param_list(&mut self) -> Option<ParamList> {
        let opening = self.current.pos;
        let mut params = Vec::new();

        if !self.peek_is_punct(PunctuationId::RParen) {
            loop {
                params.push(self.parse_param()?);
                if self.peek_is_punct(PunctuationId::Comma) {
                    self.next_token();
                    continue;
                }
                break;
            }
        }
        self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;

        Some(ParamList {
            opening,
            closing: self.current.pos,
            params,
        })
    }

    /// `<type> [memory|storage|calldata] <identifier>`
    fn parse_param(&mut self) -> Option<Param> {
        let ty = self.parse_type_name()?;

        let location = self.peek_keyword().and_then(DataLocation::from_keyword);
        if location.is_some() {
            self.next_token();
        }

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.identifier();

        Some(Param { ty, location, name })
    }

    /// Attributes after the parameter list and the terminating `;` or body.
    ///
    /// ## Notes
    /// - Visibility and mutability are recorded; modifiers, `virtual`, `override` and
    ///   `returns (...)` are consumed and dropped. Keywords inside parentheses are ignored.
    /// - A `;` outside parentheses ends a bodiless declaration; a `{` opens the body, whose
    ///   matching `}` ends the declaration.
    fn parse_function_tail(&mut self) -> Option<(Option<Visibility>, Option<Mutability>, FunctionBody)> {
        let mut visibility = None;
        let mut mutability = None;
        let mut parens = 0usize;

        loop {
            match self.peek.kind {
                TokenKind::Eof => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::LBrace));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::RBrace) if parens == 0 => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::LBrace));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::Semicolon) if parens == 0 => {
                    self.next_token();
                    let body = FunctionBody::Semicolon(self.current.pos);
                    return Some((visibility, mutability, body));
                }
                TokenKind::Punctuation(PunctuationId::LBrace) if parens == 0 => {
                    self.next_token();
                    let body = FunctionBody::Block(self.parse_block()?);
                    return Some((visibility, mutability, body));
                }
                TokenKind::Punctuation(PunctuationId::LParen) => parens += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => parens = parens.saturating_sub(1),
                TokenKind::Keyword(id) if parens == 0 => {
                    if let Some(v) = Visibility::from_keyword(id) {
                        visibility = Some(v);
                    } else if let Some(m) = Mutability::from_keyword(id).filter(|m| m.applies_to_functions()) {
                        mutability = Some(m);
                    }
                }
                _ => {}
            }
            self.next_token();
        }
    }

    /// Braced block; `current` is `{` on entry and the matching `}` on return.
    fn parse_block(&mut self) -> Option<Block> {
        let opening = self.current.pos;
        let mut depth = 1usize;

        loop {
            match self.peek.kind {
                TokenKind::Eof => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::RBrace));
                    return None;
                }
                TokenKind::Punctuation(PunctuationId::LBrace) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RBrace) => {
                    depth -= 1;
                    if depth == 0 {
                        self.next_token();
                        return Some(Block {
                            opening,
                            closing: self.current.pos,
                        });
                    }
                }
                _ => {}
            }
            self.next_token();
        }
    }

    // ========================================================================
    // Contracts
    // ========================================================================

    /// `[abstract] contract|library|interface <identifier> [is <base> {, <base>}] { <members> }`
    fn parse_contract_definition(&mut self) -> Option<ContractDefinition> {
        let mut abstract_pos = None;
        if self.current.kind.is_keyword(KeywordId::Abstract) {
            abstract_pos = Some(self.current.pos);
            self.expect_peek(TokenKind::Keyword(KeywordId::Contract))?;
        }

        let keyword_pos = self.current.pos;
        let kind = self
            .current
            .kind
            .keyword_id()
            .and_then(ContractKind::from_keyword)?;

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.identifier();

        let mut bases = Vec::new();
        if self.peek.kind.is_keyword(KeywordId::Is) {
            self.next_token();
            loop {
                self.expect_peek(TokenKind::Identifier)?;
                bases.push(self.identifier());
                if self.peek_is_punct(PunctuationId::LParen) {
                    self.next_token();
                    self.skip_parenthesized()?;
                }
                if !self.peek_is_punct(PunctuationId::Comma) {
                    break;
                }
                self.next_token();
            }
        }

        self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace))?;
        let opening = self.current.pos;

        let mut members = Vec::new();
        loop {
            match self.peek.kind {
                TokenKind::Punctuation(PunctuationId::RBrace) => {
                    self.next_token();
                    break;
                }
                TokenKind::Eof => {
                    self.peek_error(TokenKind::Punctuation(PunctuationId::RBrace));
                    return None;
                }
                _ => {
                    self.next_token();
                    if let Some(member) = self.parse_declaration(Scope::Contract) {
                        members.push(member);
                    }
                }
            }
        }

        Some(ContractDefinition {
            kind,
            abstract_pos,
            keyword_pos,
            name,
            bases,
            opening,
            closing: self.current.pos,
            members,
        })
    }
}
