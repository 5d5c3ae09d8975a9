#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SyntaxElement;
    use runa_core::lang::operators::NaturalOpId;

    fn stmt_kinds(source: &str) -> Vec<SyntaxKind> {
        parse(source).child_nodes().map(|n| n.kind()).collect()
    }

    /// Every token of the stream must end up somewhere in the tree, in source order.
    fn assert_covers(source: &str) {
        let root = parse(source);
        let mut texts = Vec::new();
        collect_texts(&root, source, &mut texts);
        assert_eq!(texts.concat(), source);
    }

    fn collect_texts<'a>(node: &SyntaxNode, source: &'a str, out: &mut Vec<&'a str>) {
        for child in node.children() {
            match child {
                SyntaxElement::Node(n) => collect_texts(n, source, out),
                SyntaxElement::Token(t) => out.push(t.text(source)),
            }
        }
    }

    #[test]
    fn two_let_statements_split_at_newline() {
        assert_eq!(
            stmt_kinds("Let x be 5\nLet y be 10"),
            vec![SyntaxKind::LetStmt, SyntaxKind::LetStmt]
        );
    }

    #[test]
    fn missing_binder_still_closes_the_statement() {
        // No `be` in the first statement; recovery still yields two LetStmt nodes.
        assert_eq!(
            stmt_kinds("Let x 5\nLet y be 10"),
            vec![SyntaxKind::LetStmt, SyntaxKind::LetStmt]
        );
        assert_covers("Let x 5\nLet y be 10");
    }

    #[test]
    fn statement_keyword_ends_the_previous_statement_mid_line() {
        // A new statement opener is a boundary even without a newline.
        assert_eq!(
            stmt_kinds("Let x be 5 Display x"),
            vec![SyntaxKind::LetStmt, SyntaxKind::DisplayStmt]
        );
    }

    #[test]
    fn statement_forms_dispatch_by_kind() {
        assert_eq!(stmt_kinds("Define constant limit as 10\n"), vec![SyntaxKind::DefineStmt]);
        assert_eq!(stmt_kinds("Set counter to 0\n"), vec![SyntaxKind::SetStmt]);
        assert_eq!(
            stmt_kinds("Process called \"add\" that takes a and b\n"),
            vec![SyntaxKind::ProcessStmt]
        );
        assert_eq!(stmt_kinds("While x is less than 10:\n"), vec![SyntaxKind::WhileStmt]);
        assert_eq!(stmt_kinds("For each item in list:\n"), vec![SyntaxKind::ForStmt]);
        assert_eq!(stmt_kinds("Return x plus 1\n"), vec![SyntaxKind::ReturnStmt]);
        assert_eq!(stmt_kinds("Return\n"), vec![SyntaxKind::ReturnStmt]);
        assert_eq!(stmt_kinds("x plus 1\n"), vec![SyntaxKind::ExprStmt]);
    }

    #[test]
    fn capitalized_binders_stay_their_own_tokens() {
        // `Constant`/`Called` are accepted in either case; the binder must not
        // fold into a multi-word identifier.
        let root = parse("Define Constant limit as 5\n");
        let def = root.child_nodes().next().unwrap();
        assert_eq!(def.kind(), SyntaxKind::DefineStmt);
        assert!(def.tokens().any(|t| t.keyword_id() == Some(KeywordId::Constant)));
        let source = "Define Constant limit as 5\n";
        let idents: Vec<_> = lexer::lex(source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .map(|t| t.text(source).to_string())
            .collect();
        assert_eq!(idents, vec!["limit"]);

        assert_eq!(
            stmt_kinds("Process Called \"greet\" Returns nothing\n"),
            vec![SyntaxKind::ProcessStmt]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_no_statements() {
        assert_eq!(stmt_kinds(""), vec![]);
        assert_eq!(stmt_kinds("   \n\n  \t\n"), vec![]);
        assert_eq!(stmt_kinds("Note: just a comment\n"), vec![]);
    }

    #[test]
    fn if_condition_stops_before_the_colon() {
        let root = parse("If x is greater than y:\n");
        let if_stmt = root.child_nodes().next().unwrap();
        assert_eq!(if_stmt.kind(), SyntaxKind::IfStmt);

        let cond = if_stmt.child_nodes().next().unwrap();
        assert_eq!(cond.kind(), SyntaxKind::Expr);
        // The colon belongs to the IfStmt, not the condition.
        assert!(cond.tokens().all(|t| t.punct_id().is_none()));
        assert!(if_stmt.tokens().any(|t| t.punct_id() == Some(PunctId::Colon)));
    }

    #[test]
    fn expression_span_reaches_the_boundary() {
        let source = "Let x be 5 plus y\n";
        let root = parse(source);
        let let_stmt = root.child_nodes().next().unwrap();
        let expr = let_stmt.child_nodes().next().unwrap();
        assert_eq!(expr.kind(), SyntaxKind::Expr);
        assert_eq!(expr.span().start, source.find('5').unwrap());
        assert_eq!(expr.span().end, source.len() - 1); // everything up to the newline
    }

    #[test]
    fn return_without_expression_has_no_expr_child() {
        let root = parse("Return\n");
        let ret = root.child_nodes().next().unwrap();
        assert_eq!(ret.kind(), SyntaxKind::ReturnStmt);
        assert_eq!(ret.child_nodes().count(), 0);
    }

    #[test]
    fn process_phrase_keyword_opens_a_process_statement() {
        // `Process called` arrives as one phrase token from the lexer.
        assert_eq!(
            stmt_kinds("Process called \"greet\" returns nothing\n"),
            vec![SyntaxKind::ProcessStmt]
        );
    }

    #[test]
    fn bad_characters_do_not_derail_statement_recovery() {
        let source = "Let x be @@ ~\nDisplay x\n";
        assert_eq!(
            stmt_kinds(source),
            vec![SyntaxKind::LetStmt, SyntaxKind::DisplayStmt]
        );
        assert_covers(source);
    }

    #[test]
    fn every_token_lands_in_the_tree() {
        assert_covers("Note: demo\nLet greeting be \"Hi\"\nIf x is greater than y:\nDisplay greeting\n");
        assert_covers("");
        assert_covers("@#$%^&*");
        assert_covers("Note:\nopen block with no close\nLet x");
    }

    #[test]
    fn end_to_end_scenario() {
        let source = "Note: demo\nLet greeting be \"Hi\"\nIf x is greater than y:\nDisplay greeting\n";
        let root = parse(source);

        // Line 1 is a comment leaf on the root.
        let comment = root
            .tokens()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token on root");
        assert_eq!(comment.text(source), "Note: demo");

        let stmts: Vec<_> = root.child_nodes().collect();
        assert_eq!(
            stmts.iter().map(|n| n.kind()).collect::<Vec<_>>(),
            vec![SyntaxKind::LetStmt, SyntaxKind::IfStmt, SyntaxKind::DisplayStmt]
        );

        // The let statement spans line 2.
        let line2 = source.find("Let").unwrap();
        assert_eq!(stmts[0].span().start, line2);

        // The if condition contains `is greater than` as a single operator token.
        let cond = stmts[1].child_nodes().next().expect("condition expr");
        assert!(
            cond.tokens()
                .any(|t| t.natural_op_id() == Some(NaturalOpId::IsGreaterThan))
        );
    }

    #[test]
    fn parse_tokens_matches_parse() {
        let source = "Set depth to 0b101\n";
        let tokens = lexer::lex(source);
        assert_eq!(parse_tokens(&tokens), parse(source));
    }
}
