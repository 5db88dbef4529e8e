use super::*;

fn kinds(source: &str) -> Vec<SyntaxKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_scan_declaration() {
    let source = "struct Point { int x; };";
    let tokens = tokenize(source);

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            SyntaxKind::StructKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenBrace,
            SyntaxKind::IntKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::Semicolon,
            SyntaxKind::CloseBrace,
            SyntaxKind::Semicolon,
        ]
    );
    assert_eq!(tokens[1].text(source), "Point");
    assert_eq!(tokens[4].text(source), "x");
}

#[test]
fn test_member_access_operators() {
    assert_eq!(
        kinds("p.x q->y"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::Dot,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Arrow,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_trailing_dot() {
    let source = "p.";
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, SyntaxKind::Dot);
    assert_eq!(tokens[1].span.start, 1);
    assert_eq!(tokens[1].span.end, 2);
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a // line comment\n/* block\ncomment */ b"),
        vec![SyntaxKind::Identifier, SyntaxKind::Identifier]
    );
}

#[test]
fn test_directive_only_at_line_start() {
    let source = "  #include <a.h>\nint x;";
    let tokens = tokenize(source);
    assert_eq!(tokens[0].kind, SyntaxKind::Directive);
    assert_eq!(tokens[0].text(source), "#include <a.h>\n");
    assert_eq!(tokens[1].kind, SyntaxKind::IntKeyword);

    // A '#' in the middle of a line is not a directive
    let tokens = tokenize("x # y");
    assert_eq!(tokens[1].kind, SyntaxKind::Unknown);
}

#[test]
fn test_directive_line_continuation() {
    let source = "#define A \\\n  1\nint y;";
    let tokens = tokenize(source);
    assert_eq!(tokens[0].kind, SyntaxKind::Directive);
    assert_eq!(tokens[1].kind, SyntaxKind::IntKeyword);
}

#[test]
fn test_literals() {
    assert_eq!(
        kinds(r#"1.5e+3 "str\"ing" 'c' 0x1F"#),
        vec![
            SyntaxKind::NumericLiteral,
            SyntaxKind::StringLiteral,
            SyntaxKind::CharLiteral,
            SyntaxKind::NumericLiteral,
        ]
    );
}

#[test]
fn test_unterminated_string_stops_at_newline() {
    let source = "\"abc\nint";
    let tokens = tokenize(source);
    assert_eq!(tokens[0].kind, SyntaxKind::StringLiteral);
    assert_eq!(tokens[0].text(source), "\"abc");
    assert_eq!(tokens[1].kind, SyntaxKind::IntKeyword);
}

#[test]
fn test_unknown_characters_make_progress() {
    assert_eq!(
        kinds("@ $ é"),
        vec![
            SyntaxKind::Unknown,
            SyntaxKind::Unknown,
            SyntaxKind::Identifier
        ]
    );
}

#[test]
fn test_keywords_are_not_identifiers() {
    assert_eq!(
        kinds("unsigned long structure"),
        vec![
            SyntaxKind::UnsignedKeyword,
            SyntaxKind::LongKeyword,
            SyntaxKind::Identifier
        ]
    );
}
