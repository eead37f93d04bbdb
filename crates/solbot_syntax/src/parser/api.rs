/// Output of a parse: the tree, its diagnostics, and the comments the lexer skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub file: File,
    pub diagnostics: Vec<Diagnostic>,
    pub comments: Vec<Comment>,
}

impl ParseResult {
    /// Return `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The doc comment (`///` lines or a `/** */` block) directly above `offset`, if any.
    ///
    /// ## Notes
    /// - Consecutive `///` lines are joined; only whitespace may separate the comment from `offset`.
    pub fn doc_comment_before(&self, source: &str, offset: usize) -> Option<String> {
        let mut bodies = Vec::new();
        let mut boundary = offset;
        for comment in self.comments.iter().rev().skip_while(|c| c.start().offset() >= offset) {
            let gap = source.get(comment.end().offset()..boundary)?;
            if !comment.is_doc() || !gap.trim().is_empty() {
                break;
            }
            bodies.push(comment.body());
            boundary = comment.start().offset();
        }
        if bodies.is_empty() {
            return None;
        }
        bodies.reverse();
        Some(bodies.join("\n"))
    }
}

/// Parse Solidity source with the default [`ParseConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: Source text of one file.
///
/// ## Returns
/// - The [`ParseResult`]; it always carries a [`File`], possibly partial, plus diagnostics.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_file(source: &str) -> ParseResult {
    parse_file_with_config(source, &ParseConfig::default())
}

/// Parse Solidity source with an explicit configuration.
///
/// ## Notes
/// - In [`LexerMode::Threaded`], a failure to spawn the lexer thread falls back to inline lexing.
#[tracing::instrument(skip_all, fields(source_len = source.len(), mode = ?config.lexer_mode))]
pub fn parse_file_with_config(source: &str, config: &ParseConfig) -> ParseResult {
    match config.lexer_mode {
        LexerMode::Inline => parse_inline(source, config),
        LexerMode::Threaded => match TokenStream::with_capacity(source, config.lookahead_capacity) {
            Ok(mut stream) => {
                let (file, diagnostics) = Parser::new(stream.by_ref(), config).parse_file();
                let comments = stream.finish();
                ParseResult {
                    file,
                    diagnostics,
                    comments,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn lexer thread; lexing inline");
                parse_inline(source, config)
            }
        },
    }
}

fn parse_inline(source: &str, config: &ParseConfig) -> ParseResult {
    let mut lexer = Lexer::new(source);
    let (file, diagnostics) = Parser::new(lexer.by_ref(), config).parse_file();
    ParseResult {
        file,
        diagnostics,
        comments: lexer.into_comments(),
    }
}
