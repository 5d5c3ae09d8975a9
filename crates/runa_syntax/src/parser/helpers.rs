/// Token-stream helpers and boundary detection.
///
/// This chunk contains the low-level primitives used throughout parsing: peeking and
/// consuming tokens, attaching trivia, and the statement-boundary test that drives
/// error recovery.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Kind of the current token, or `None` at the end of the stream.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Attach the current token to the innermost open node and step past it.
    fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(*token);
            self.pos += 1;
        }
    }

    /// Return `true` if the current token is whitespace or a comment.
    fn at_trivia(&self) -> bool {
        self.peek_kind().is_some_and(|k| k.is_trivia())
    }

    /// Attach any run of whitespace/comment tokens to the innermost open node.
    ///
    /// Trivia never influences dispatch, but it still belongs to the tree: token
    /// coverage of the source is an invariant of the whole frontend.
    fn bump_trivia(&mut self) {
        while self.at_trivia() {
            self.bump();
        }
    }

    /// Return `true` if the current token is a newline.
    fn at_newline(&self) -> bool {
        self.peek_kind() == Some(TokenKind::Newline)
    }

    /// Return `true` if the current token is the given keyword.
    fn at_keyword(&self, id: KeywordId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_keyword(id))
    }

    /// Return `true` if the current token is the given punctuation.
    fn at_punct(&self, id: PunctId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_punct(id))
    }

    /// If the current token is the given keyword, consume it and return `true`.
    fn eat_keyword(&mut self, id: KeywordId) -> bool {
        if self.at_keyword(id) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Statement boundary: end of stream, a newline, or the start of a new recognized
    /// statement keyword -- whichever comes first. This is the parser's recovery
    /// mechanism: consumption of the current construct always stops here, so an
    /// incomplete construct still closes instead of swallowing the rest of the file.
    fn at_boundary(&self) -> bool {
        match self.peek_kind() {
            None => true,
            Some(TokenKind::Newline) => true,
            Some(kind) => kind.starts_statement(),
        }
    }

    /// Consume the statement's trailing newline terminator, if present.
    fn eat_terminator(&mut self) {
        self.bump_trivia();
        if self.at_newline() {
            self.bump();
        }
    }

    /// Attach everything up to the statement boundary as raw leaves (used by statement
    /// forms whose tail grammar is intentionally unstructured).
    fn rest_of_line(&mut self) {
        while !self.at_boundary() {
            self.bump();
        }
    }
}
