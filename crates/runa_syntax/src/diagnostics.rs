//! Diagnostics over a lexed/parsed unit.
//!
//! The lexer and parser themselves never fail: malformed input degrades to
//! bad-character tokens and flat expression nodes. Turning those artifacts into
//! user-visible reports is the consumer's job, and this module is that consumer:
//! [`collect`] walks a syntax tree and returns one structured, span-carrying
//! diagnostic per suspicious artifact.

use crate::lexer::TokenKind;
use crate::tree::{SyntaxElement, SyntaxNode};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A single diagnostic with a labeled source span.
///
/// Render with miette by attaching the source text to the report, e.g.
/// `miette::Report::new(diag).with_source_code(source.to_string())`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxDiagnostic {
    #[error("unrecognized character `{text}`")]
    #[diagnostic(
        code(runa::syntax::bad_character),
        help("this character is not part of any Runa token")
    )]
    BadCharacter {
        text: char,
        #[label("not valid here")]
        span: SourceSpan,
    },

    #[error("block comment is never closed")]
    #[diagnostic(
        code(runa::syntax::unterminated_note),
        help("close the block with a line containing `:End Note`")
    )]
    UnterminatedNote {
        #[label("comment opened here runs to the end of the file")]
        span: SourceSpan,
    },
}

/// Collect diagnostics for every suspicious token in the tree, in source order.
///
/// `source` must be the buffer the tree was parsed from.
pub fn collect(source: &str, root: &SyntaxNode) -> Vec<SyntaxDiagnostic> {
    let mut out = Vec::new();
    walk(source, root, &mut out);
    out
}

fn walk(source: &str, node: &SyntaxNode, out: &mut Vec<SyntaxDiagnostic>) {
    for child in node.children() {
        match child {
            SyntaxElement::Node(n) => walk(source, n, out),
            SyntaxElement::Token(t) => match t.kind {
                TokenKind::Bad => {
                    if let Some(text) = t.text(source).chars().next() {
                        out.push(SyntaxDiagnostic::BadCharacter {
                            text,
                            span: (t.span.start, t.span.len()).into(),
                        });
                    }
                }
                TokenKind::Comment => {
                    let text = t.text(source);
                    if is_unterminated_block(text) {
                        out.push(SyntaxDiagnostic::UnterminatedNote {
                            span: (t.span.start, "Note:".len()).into(),
                        });
                    }
                }
                _ => {}
            },
        }
    }
}

/// A block comment (blank opening line) that never reached its `:End Note` line.
fn is_unterminated_block(text: &str) -> bool {
    let Some(after) = text.strip_prefix("Note:") else {
        return false;
    };
    let first_line = after.lines().next().unwrap_or("");
    first_line.trim().is_empty() && !text.contains(":End Note")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn bad_characters_are_reported_with_spans() {
        let source = "Let x be ~\n";
        let diags = collect(source, &parser::parse(source));
        assert_eq!(diags.len(), 1);
        match &diags[0] {
            SyntaxDiagnostic::BadCharacter { text, span } => {
                assert_eq!(*text, '~');
                assert_eq!(span.offset(), source.find('~').unwrap());
            }
            other => panic!("unexpected diagnostic {other:?}"),
        }
    }

    #[test]
    fn unterminated_block_comment_is_reported() {
        let source = "Note:\nthis never closes\nLet x be 5\n";
        let diags = collect(source, &parser::parse(source));
        assert!(matches!(diags[0], SyntaxDiagnostic::UnterminatedNote { .. }));
    }

    #[test]
    fn clean_input_has_no_diagnostics() {
        let source = "Note: fine\nLet x be 5\nNote:\nblock body\n:End Note\n";
        assert!(collect(source, &parser::parse(source)).is_empty());
    }

    #[test]
    fn diagnostics_come_out_in_source_order() {
        let source = "~ x\nDisplay ` y\n";
        let diags = collect(source, &parser::parse(source));
        let offsets: Vec<_> = diags
            .iter()
            .map(|d| match d {
                SyntaxDiagnostic::BadCharacter { span, .. } => span.offset(),
                SyntaxDiagnostic::UnterminatedNote { span } => span.offset(),
            })
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(diags.len(), 2);
    }
}
