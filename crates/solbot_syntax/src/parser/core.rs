/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Where a declaration is being parsed; contracts only nest at file scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    File,
    Contract,
}

/// Parser state.
///
/// ## Notes
/// - `current` is the token being examined and `peek` the single token of lookahead.
/// - Every declaration routine leaves `current` on the last token it consumed.
/// - Once the source is exhausted or yields `Illegal`, the parser keeps seeing `Eof`.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    current: Token,
    peek: Token,
    diagnostics: Vec<Diagnostic>,
    report_skipped: bool,
    /// The token source has delivered its terminal token.
    finished: bool,
    /// The scan ended on `Illegal`; the synthetic `Eof` that follows is not worth a second diagnostic.
    lexical_failure: bool,
    eof_pos: Position,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a parser over a token source and prime `current` and `peek`.
    ///
    /// ## Parameters
    /// - `tokens`: Token source, normally a [`Lexer`] or a [`TokenStream`].
    /// - `config`: Parse configuration; only `report_skipped` is read here.
    pub fn new(tokens: I, config: &ParseConfig) -> Self {
        let mut parser = Self {
            tokens,
            current: Token::eof(Position(0)),
            peek: Token::eof(Position(0)),
            diagnostics: Vec::new(),
            report_skipped: config.report_skipped,
            finished: false,
            lexical_failure: false,
            eof_pos: Position(0),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse every top-level declaration.
    ///
    /// Returns the file together with the diagnostics in the order they were recorded.
    pub fn parse_file(mut self) -> (File, Vec<Diagnostic>) {
        let mut declarations = Vec::new();

        while self.current.kind != TokenKind::Eof {
            if let Some(decl) = self.parse_declaration(Scope::File) {
                declarations.push(decl);
            }
            self.next_token();
        }

        tracing::debug!(
            declarations = declarations.len(),
            diagnostics = self.diagnostics.len(),
            "parsed file"
        );
        (File { declarations }, self.diagnostics)
    }
}
