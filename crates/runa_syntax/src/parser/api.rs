/// Parse Runa source text into a syntax tree rooted at [`SyntaxKind::Root`].
///
/// This is the main public entrypoint for parsing. It never fails: malformed input
/// produces bad-character tokens and flat expression nodes, not errors.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> SyntaxNode {
    parse_tokens(&lexer::lex(source))
}

/// Parse a pre-lexed token stream.
///
/// The stream must be contiguous (as produced by [`lexer::lex`] or a [`lexer::Lexer`]
/// drained over one range); the resulting tree owns every token of the stream.
pub fn parse_tokens(tokens: &[Token]) -> SyntaxNode {
    Parser::new(tokens).parse()
}
