//! Syntax tree types and the mark/done tree builder.
//!
//! The statement parser produces a shallow tree: a [`SyntaxKind::Root`] node with one
//! child node per top-level statement, where each statement owns the tokens (and the
//! flat expression nodes) it consumed. Nodes are immutable once closed; construction
//! goes through [`TreeBuilder`], whose open/close discipline guarantees that a node's
//! kind and extent are only fixed when parsing of that construct completes -- and that
//! an abandoned construct is still closed with whatever children it accumulated.

use crate::lexer::Token;
use crate::span::Span;
use std::fmt::Write as _;

/// Kind of syntax node produced by the statement parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Root,
    LetStmt,
    DefineStmt,
    SetStmt,
    ProcessStmt,
    IfStmt,
    ForStmt,
    WhileStmt,
    DisplayStmt,
    ReturnStmt,
    /// A bare expression at statement position.
    ExprStmt,
    /// Flat expression: every token up to the next statement boundary.
    Expr,
}

/// One entry in a node's ordered child list: either a nested node or a consumed token.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(Token),
}

impl SyntaxElement {
    pub fn span(&self) -> Span {
        match self {
            SyntaxElement::Node(n) => n.span(),
            SyntaxElement::Token(t) => t.span,
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(n) => Some(n),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            SyntaxElement::Token(t) => Some(t),
            SyntaxElement::Node(_) => None,
        }
    }
}

/// A closed, immutable syntax node: a kind tag, the union span of its children, and the
/// children themselves in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Span,
    children: Vec<SyntaxElement>,
}

impl SyntaxNode {
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// All children (nodes and tokens) in source order.
    pub fn children(&self) -> impl Iterator<Item = &SyntaxElement> {
        self.children.iter()
    }

    /// Child nodes only, in source order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    /// Tokens directly owned by this node (not by nested nodes), in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// Indented textual dump of the tree, for inspection and tests.
    pub fn dump(&self, source: &str) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, source, 0);
        out
    }

    fn dump_into(&self, out: &mut String, source: &str, depth: usize) {
        let _ = writeln!(out, "{:indent$}{:?}@{}", "", self.kind, self.span, indent = depth * 2);
        for child in &self.children {
            match child {
                SyntaxElement::Node(n) => n.dump_into(out, source, depth + 1),
                SyntaxElement::Token(t) => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{:?}@{} {:?}",
                        "",
                        t.kind,
                        t.span,
                        t.text(source),
                        indent = (depth + 1) * 2
                    );
                }
            }
        }
    }
}

/// Handle for an open node. Returned by [`TreeBuilder::mark`] and consumed by
/// [`TreeBuilder::done`]; markers close in LIFO order.
#[must_use = "an opened marker must be closed with TreeBuilder::done"]
#[derive(Debug)]
pub struct Marker {
    frame: usize,
}

/// Builds a syntax tree through a mark/done protocol.
///
/// `mark()` opens a node, `token()` attaches a token to the innermost open node, and
/// `done(marker, kind)` closes the innermost node, binding its kind and the union span
/// of whatever it accumulated. Tokens attached outside any marker belong to the root
/// produced by [`finish`](TreeBuilder::finish).
#[derive(Debug, Default)]
pub struct TreeBuilder {
    frames: Vec<Vec<SyntaxElement>>,
    last_end: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            frames: vec![Vec::new()],
            last_end: 0,
        }
    }

    /// Open a node. The returned marker must be closed with [`done`](TreeBuilder::done).
    pub fn mark(&mut self) -> Marker {
        self.frames.push(Vec::new());
        Marker {
            frame: self.frames.len() - 1,
        }
    }

    /// Attach a token to the innermost open node.
    pub fn token(&mut self, token: Token) {
        self.last_end = token.span.end;
        self.push(SyntaxElement::Token(token));
    }

    /// Close the innermost open node, fixing its kind and extent.
    ///
    /// A node that accumulated no children gets a zero-width span at the current
    /// position.
    pub fn done(&mut self, marker: Marker, kind: SyntaxKind) {
        debug_assert_eq!(
            marker.frame,
            self.frames.len() - 1,
            "markers must close in LIFO order"
        );
        let children = self.frames.pop().unwrap_or_default();
        let span = children
            .iter()
            .map(SyntaxElement::span)
            .reduce(Span::merge)
            .unwrap_or(Span::new(self.last_end, self.last_end));
        self.push(SyntaxElement::Node(SyntaxNode { kind, span, children }));
    }

    /// Close the builder, wrapping everything accumulated at the top level into one
    /// root node. All markers must already be closed.
    pub fn finish(mut self, kind: SyntaxKind) -> SyntaxNode {
        debug_assert_eq!(self.frames.len(), 1, "unclosed marker at finish");
        let children = self.frames.pop().unwrap_or_default();
        let span = children
            .iter()
            .map(SyntaxElement::span)
            .reduce(Span::merge)
            .unwrap_or_default();
        SyntaxNode { kind, span, children }
    }

    fn push(&mut self, element: SyntaxElement) {
        match self.frames.last_mut() {
            Some(frame) => frame.push(element),
            // done() on the base frame is prevented by the marker discipline.
            None => self.frames.push(vec![element]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn tok(start: usize, end: usize) -> Token {
        Token::new(TokenKind::Ident, Span::new(start, end))
    }

    #[test]
    fn nodes_span_their_children() {
        let mut builder = TreeBuilder::new();
        let stmt = builder.mark();
        builder.token(tok(0, 3));
        let expr = builder.mark();
        builder.token(tok(4, 5));
        builder.token(tok(6, 9));
        builder.done(expr, SyntaxKind::Expr);
        builder.done(stmt, SyntaxKind::LetStmt);
        let root = builder.finish(SyntaxKind::Root);

        assert_eq!(root.span(), Span::new(0, 9));
        let stmt = root.child_nodes().next().unwrap();
        assert_eq!(stmt.kind(), SyntaxKind::LetStmt);
        assert_eq!(stmt.span(), Span::new(0, 9));
        let expr = stmt.child_nodes().next().unwrap();
        assert_eq!(expr.span(), Span::new(4, 9));
    }

    #[test]
    fn empty_node_closes_with_zero_width_span() {
        let mut builder = TreeBuilder::new();
        builder.token(tok(0, 2));
        let m = builder.mark();
        builder.done(m, SyntaxKind::Expr);
        let root = builder.finish(SyntaxKind::Root);
        let expr = root.child_nodes().next().unwrap();
        assert_eq!(expr.span(), Span::new(2, 2));
        assert!(expr.span().is_empty());
    }

    #[test]
    fn empty_builder_finishes_to_empty_root() {
        let root = TreeBuilder::new().finish(SyntaxKind::Root);
        assert_eq!(root.children().count(), 0);
        assert_eq!(root.span(), Span::default());
    }
}
