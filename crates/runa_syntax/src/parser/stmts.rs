/// Statement parsing methods.
///
/// Each method opens a marker, consumes the leading keyword plus whatever of the
/// construct's internal grammar is present, and closes at the statement boundary. All
/// internal pieces are optional: a malformed or half-typed construct still produces a
/// closed node of the right kind.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Dispatch on the current (non-trivia, non-newline) token's kind.
    fn statement(&mut self) {
        match self.peek_kind().and_then(|k| k.keyword_id()) {
            Some(KeywordId::Let) => self.let_stmt(),
            Some(KeywordId::Define) => self.define_stmt(),
            Some(KeywordId::Set) => self.set_stmt(),
            Some(KeywordId::Process | KeywordId::ProcessCalled) => self.process_stmt(),
            Some(KeywordId::If) => self.conditional_stmt(SyntaxKind::IfStmt),
            Some(KeywordId::While) => self.conditional_stmt(SyntaxKind::WhileStmt),
            Some(KeywordId::For | KeywordId::ForEach) => self.for_stmt(),
            Some(KeywordId::Display) => self.display_stmt(),
            Some(KeywordId::Return) => self.return_stmt(),
            _ => self.expr_stmt(),
        }
    }

    /// `Let <identifier> be <expression>`
    fn let_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Let
        self.bump_trivia();
        if self.peek_kind() == Some(TokenKind::Ident) {
            self.bump();
        }
        self.bump_trivia();
        self.eat_keyword(KeywordId::Be);
        self.expr(false);
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::LetStmt);
    }

    /// `Define [constant] <identifier> as <expression>`
    fn define_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Define
        self.bump_trivia();
        if self.eat_keyword(KeywordId::Constant) {
            self.bump_trivia();
        }
        if self.peek_kind() == Some(TokenKind::Ident) {
            self.bump();
        }
        self.bump_trivia();
        self.eat_keyword(KeywordId::As);
        self.expr(false);
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::DefineStmt);
    }

    /// `Set <identifier> to <expression>`
    fn set_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Set
        self.bump_trivia();
        if self.peek_kind() == Some(TokenKind::Ident) {
            self.bump();
        }
        self.bump_trivia();
        self.eat_keyword(KeywordId::To);
        self.expr(false);
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::SetStmt);
    }

    /// `Process called "<name>" ...` -- the parameter/return grammar after the name is
    /// intentionally flattened; the lexer may deliver `Process called` as one phrase
    /// keyword or `Process` followed by `called`.
    fn process_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Process | Process called
        self.bump_trivia();
        if self.eat_keyword(KeywordId::Called) {
            self.bump_trivia();
        }
        if matches!(self.peek_kind(), Some(TokenKind::Str(_))) {
            self.bump();
        }
        self.rest_of_line();
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::ProcessStmt);
    }

    /// `If <condition>:` / `While <condition>:`
    fn conditional_stmt(&mut self, kind: SyntaxKind) {
        let m = self.builder.mark();
        self.bump(); // If | While
        self.expr(true);
        self.bump_trivia();
        if self.at_punct(PunctId::Colon) {
            self.bump();
        }
        self.eat_terminator();
        self.builder.done(m, kind);
    }

    /// `For ...` -- remainder of line, unstructured.
    fn for_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // For | For each
        self.rest_of_line();
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::ForStmt);
    }

    /// `Display <expression>`
    fn display_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Display
        self.expr(false);
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::DisplayStmt);
    }

    /// `Return [<expression>]`
    fn return_stmt(&mut self) {
        let m = self.builder.mark();
        self.bump(); // Return
        self.bump_trivia();
        if !self.at_boundary() {
            self.expr(false);
        }
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::ReturnStmt);
    }

    /// Anything that does not open a recognized statement.
    fn expr_stmt(&mut self) {
        let m = self.builder.mark();
        self.expr(false);
        self.eat_terminator();
        self.builder.done(m, SyntaxKind::ExprStmt);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Flat expression: every token from the current position up to the statement
    /// boundary becomes a leaf of one `Expr` node. There is no operator-precedence
    /// structure at this stage; downstream consumers rely on the node's span reaching
    /// exactly to the boundary. With `stop_at_colon`, a `:` also ends the expression
    /// (the `If`/`While` block-opening colon belongs to the statement, not the
    /// condition).
    fn expr(&mut self, stop_at_colon: bool) {
        self.bump_trivia();
        let m = self.builder.mark();
        while !self.at_boundary() && !(stop_at_colon && self.at_punct(PunctId::Colon)) {
            self.bump();
        }
        self.builder.done(m, SyntaxKind::Expr);
    }
}
