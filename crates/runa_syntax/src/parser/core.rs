/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop. Statement
/// parsing methods live in the other chunks of this module.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Parser state.
///
/// The parser walks the token stream exactly once and dispatches on the current token's
/// enumerated kind. There is no error path: malformed constructs close at the next
/// statement boundary with whatever children they consumed.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: TreeBuilder::new(),
        }
    }

    /// Parse the entire token stream into a root syntax node.
    ///
    /// Trivia and blank lines between statements attach directly to the root, so the
    /// root's statement children are exactly the [`SyntaxNode`]s. An empty or
    /// whitespace-only stream yields a root with zero statement children.
    pub fn parse(mut self) -> SyntaxNode {
        while !self.is_at_end() {
            if self.at_trivia() || self.at_newline() {
                self.bump();
                continue;
            }
            self.statement();
        }
        self.builder.finish(SyntaxKind::Root)
    }
}
