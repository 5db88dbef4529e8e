use super::*;

#[test]
fn test_collects_includes_in_order() {
    let source = "#include <stdio.h>\n#include \"point.h\"\nint main() {}\n";
    let processed = Preprocessor::new(source).process();

    assert_eq!(
        processed.included_paths,
        vec!["<stdio.h>".to_string(), "\"point.h\"".to_string()]
    );
    assert_eq!(processed.tokens[0].kind, SyntaxKind::IntKeyword);
}

#[test]
fn test_directives_removed_but_spans_preserved() {
    let source = "#define N 4\nint x;";
    let processed = Preprocessor::new(source).process();

    assert!(
        processed
            .tokens
            .iter()
            .all(|t| t.kind != SyntaxKind::Directive)
    );
    let x = processed.tokens[1];
    assert_eq!(x.text(source), "x");
    assert_eq!(x.span.start, 16);
}

#[test]
fn test_include_argument_forms() {
    assert_eq!(include_argument("#include <vector>"), Some("<vector>"));
    assert_eq!(include_argument("#  include   \"a/b.h\" // c"), Some("\"a/b.h\""));
    assert_eq!(include_argument("#include HEADER_NAME"), Some("HEADER_NAME"));
    assert_eq!(include_argument("#define X 1"), None);
    assert_eq!(include_argument("#includes <x>"), None);
    assert_eq!(include_argument("#include"), None);
}
