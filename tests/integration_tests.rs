//! End-to-end tests for the Runa syntax frontend
//!
//! These drive the public API the way an editor plugin would: lex a buffer,
//! parse it, inspect the tree, and collect diagnostics.

use runa_core::lang::keywords::KeywordId;
use runa_core::lang::operators::NaturalOpId;
use runa_syntax::lexer::{self, StringFlavor, TokenKind};
use runa_syntax::tree::SyntaxKind;
use runa_syntax::{diagnostics, parser};

const SAMPLE: &str = "\
Note: greeting demo
Let greeting be \"Hello, world\"
Let count be 0x2A
Set count to count plus 1
Process called \"greet\" that takes name:
Display f\"Hi {name}\"
Return count
If count is greater than 10:
Display greeting
Otherwise:
Display \"still counting\"
";

#[test]
fn sample_program_lexes_without_bad_tokens() {
    let tokens = lexer::lex(SAMPLE);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Bad));

    let rebuilt: String = tokens.iter().map(|t| t.text(SAMPLE)).collect();
    assert_eq!(rebuilt, SAMPLE);
}

#[test]
fn sample_program_classifies_the_interesting_tokens() {
    let tokens = lexer::lex(SAMPLE);
    let kind_of = |needle: &str| {
        tokens
            .iter()
            .find(|t| t.text(SAMPLE) == needle)
            .map(|t| t.kind)
    };

    assert_eq!(kind_of("Note: greeting demo"), Some(TokenKind::Comment));
    assert_eq!(
        kind_of("\"Hello, world\""),
        Some(TokenKind::Str(StringFlavor::Plain))
    );
    assert_eq!(
        kind_of("f\"Hi {name}\""),
        Some(TokenKind::Str(StringFlavor::Formatted))
    );
    assert_eq!(
        kind_of("Process called"),
        Some(TokenKind::Keyword(KeywordId::ProcessCalled))
    );
    assert_eq!(
        kind_of("that takes"),
        Some(TokenKind::Keyword(KeywordId::ThatTakes))
    );
    assert_eq!(
        kind_of("is greater than"),
        Some(TokenKind::NaturalOp(NaturalOpId::IsGreaterThan))
    );
    assert_eq!(kind_of("plus"), Some(TokenKind::NaturalOp(NaturalOpId::Plus)));
    assert!(matches!(
        kind_of("0x2A"),
        Some(TokenKind::Number(lexer::NumberKind::Hex))
    ));
}

#[test]
fn sample_program_parses_into_the_expected_statements() {
    let root = parser::parse(SAMPLE);
    let kinds: Vec<SyntaxKind> = root.child_nodes().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::LetStmt,
            SyntaxKind::LetStmt,
            SyntaxKind::SetStmt,
            SyntaxKind::ProcessStmt,
            SyntaxKind::DisplayStmt,
            SyntaxKind::ReturnStmt,
            SyntaxKind::IfStmt,
            SyntaxKind::DisplayStmt,
            SyntaxKind::ExprStmt,
            SyntaxKind::DisplayStmt,
        ]
    );
}

#[test]
fn sample_program_is_diagnostic_clean() {
    let root = parser::parse(SAMPLE);
    assert!(diagnostics::collect(SAMPLE, &root).is_empty());
}

#[test]
fn broken_program_recovers_and_reports() {
    let source = "Let x be ~\nDisplay x\n";
    let root = parser::parse(source);

    // The bad character stays inside the let statement's expression; the
    // display statement after the newline is unaffected.
    let kinds: Vec<SyntaxKind> = root.child_nodes().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::LetStmt, SyntaxKind::DisplayStmt]);

    let diags = diagnostics::collect(source, &root);
    assert_eq!(diags.len(), 1);
}

#[test]
fn tree_dump_lists_statements_with_spans() {
    let source = "Let x be 5\n";
    let dump = parser::parse(source).dump(source);
    assert!(dump.contains("Root"));
    assert!(dump.contains("LetStmt"));
    assert!(dump.contains("Expr"));
}

#[test]
fn crlf_input_terminates_statements() {
    let source = "Let x be 1\r\nDisplay x\r\n";
    let root = parser::parse(source);
    let kinds: Vec<SyntaxKind> = root.child_nodes().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::LetStmt, SyntaxKind::DisplayStmt]);
}

#[test]
fn block_comments_are_single_tokens() {
    let source = "Note:\nanything at all\neven Let x be 5\n:End Note\nDisplay 1\n";
    let root = parser::parse(source);
    let kinds: Vec<SyntaxKind> = root.child_nodes().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::DisplayStmt]);

    let tokens = lexer::lex(source);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert!(tokens[0].text(source).contains(":End Note"));
}
