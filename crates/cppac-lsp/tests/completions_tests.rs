use super::*;
use crate::document_graph::DocumentGraph;
use crate::file_db::MemoryFileDb;
use cppac_common::HostPosition;

const CARET: char = '$';

/// Strip the `$` marker from `source` and return the caret it marks.
fn split_caret(source: &str) -> (String, HostPosition) {
    let mut line = 0;
    let mut column = 0;
    let mut text = String::with_capacity(source.len());
    let mut caret = None;
    for ch in source.chars() {
        if ch == CARET {
            caret = Some(HostPosition::new(line, column));
            continue;
        }
        text.push(ch);
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (text, caret.expect("source has a caret marker"))
}

fn engine(files: &[(&str, &str)]) -> CompletionEngine<MemoryFileDb> {
    let mut db = MemoryFileDb::new("/project");
    for (path, text) in files {
        db.set_text(path, *text);
    }
    CompletionEngine::new(DocumentGraph::with_defaults(db))
}

/// Completions at the `$` in `main.c`, with `others` available as includes.
fn complete_with(source: &str, others: &[(&str, &str)]) -> Vec<Suggestion> {
    let (text, caret) = split_caret(source);
    let mut files = vec![("main.c", text.as_str())];
    files.extend_from_slice(others);
    let mut engine = engine(&files);
    engine
        .get_suggestions("main.c", caret)
        .expect("completion succeeds")
}

fn complete(source: &str) -> Vec<Suggestion> {
    complete_with(source, &[])
}

fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.text.as_str()).collect()
}

fn sorted_texts(suggestions: &[Suggestion]) -> Vec<&str> {
    let mut out = texts(suggestions);
    out.sort_unstable();
    out
}

const POINT: &str = "struct Point { int x; int y; };\n";

#[test]
fn test_member_completion_after_dot() {
    let source = format!("{POINT}int main() {{\n    struct Point p;\n    p.$\n}}\n");
    let suggestions = complete(&source);

    assert_eq!(texts(&suggestions), vec!["x", "y"]);
    assert!(suggestions.iter().all(|s| s.partial_input_length == 0));
    assert!(suggestions.iter().all(|s| s.kind == CompletionKind::Identifier));
}

#[test]
fn test_member_completion_filters_by_typed_prefix() {
    let source = "struct S { int xs; int x; int y; };\nvoid f() {\n    S s;\n    s.x$\n}\n";
    let suggestions = complete(source);

    assert_eq!(texts(&suggestions), vec!["xs", "x"]);
    assert!(suggestions.iter().all(|s| s.partial_input_length == 1));
}

#[test]
fn test_member_completion_after_arrow() {
    let source = format!("{POINT}void f(Point *p) {{\n    p->$\n}}\n");
    assert_eq!(texts(&complete(&source)), vec!["x", "y"]);
}

#[test]
fn test_member_completion_through_member_chain() {
    let source = "struct Inner { int depth; };\n\
                  struct Outer { Inner inner; int width; };\n\
                  void f() {\n    Outer o;\n    o.inner.$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["depth"]);
}

#[test]
fn test_member_completion_for_unknown_type_is_empty() {
    let source = "void f() {\n    Unknown u;\n    u.$\n}\n";
    assert!(complete(source).is_empty());
}

#[test]
fn test_member_completion_for_undeclared_object_is_empty() {
    let source = format!("{POINT}void f() {{\n    q.$\n}}\n");
    assert!(complete(&source).is_empty());
}

#[test]
fn test_member_completion_on_call_result_is_empty() {
    let source = format!("{POINT}Point make();\nvoid f() {{\n    make().$\n}}\n");
    assert!(complete(&source).is_empty());
}

#[test]
fn test_member_completion_skips_forward_declaration() {
    let source = "struct Point;\nstruct Point { int x; };\nvoid f() {\n    Point p;\n    p.$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["x"]);
}

#[test]
fn test_member_completion_excludes_methods() {
    let source = "class Counter {\npublic:\n    int value;\n    void bump();\n};\n\
                  void f() {\n    Counter c;\n    c.$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["value"]);
}

#[test]
fn test_member_completion_through_anonymous_typedef() {
    let source = "typedef struct { int left; int right; } Pair;\nvoid f() {\n    Pair p;\n    p.$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["left", "right"]);
}

#[test]
fn test_member_completion_through_typedef_chain() {
    let source = format!(
        "{POINT}typedef struct Point Alias;\ntypedef Alias Alias2;\nvoid f() {{\n    Alias2 a;\n    a.$\n}}\n"
    );
    assert_eq!(texts(&complete(&source)), vec!["x", "y"]);
}

#[test]
fn test_member_completion_uses_included_struct() {
    let source = "#include \"point.h\"\nvoid f() {\n    Point p;\n    p.$\n}\n";
    let suggestions = complete_with(source, &[("point.h", POINT)]);
    assert_eq!(texts(&suggestions), vec!["x", "y"]);
}

#[test]
fn test_member_completion_across_include_cycle() {
    let a = "#include \"b.h\"\nstruct A { int from_a; };\n";
    let b = "#include \"a.h\"\nstruct B { int from_b; };\n";
    let source = "#include \"a.h\"\nvoid f() {\n    A a;\n    B b;\n    b.$\n}\n";

    let suggestions = complete_with(source, &[("a.h", a), ("b.h", b)]);
    assert_eq!(texts(&suggestions), vec!["from_b"]);

    let source = "#include \"a.h\"\nvoid f() {\n    A a;\n    a.$\n}\n";
    let suggestions = complete_with(source, &[("a.h", a), ("b.h", b)]);
    assert_eq!(texts(&suggestions), vec!["from_a"]);
}

#[test]
fn test_member_completion_ignores_missing_include() {
    let source = format!("#include \"missing.h\"\n{POINT}void f() {{\n    Point p;\n    p.$\n}}\n");
    assert_eq!(texts(&complete(&source)), vec!["x", "y"]);
}

#[test]
fn test_identifier_completion_filters_by_prefix() {
    let source = "void f() {\n    int alpha;\n    int Alpha;\n    int albeit;\n    al$\n}\n";
    let suggestions = complete(source);

    assert_eq!(sorted_texts(&suggestions), vec!["albeit", "alpha"]);
    assert!(suggestions.iter().all(|s| s.partial_input_length == 2));
}

#[test]
fn test_identifier_completion_reports_shadowed_name_once() {
    let source = "int count;\nvoid f() {\n    int count;\n    int cost;\n    co$\n}\n";
    assert_eq!(sorted_texts(&complete(source)), vec!["cost", "count"]);
}

#[test]
fn test_identifier_completion_sees_parameters() {
    let source = "void f(int width, int height) {\n    wi$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["width"]);
}

#[test]
fn test_identifier_completion_sees_enumerators() {
    let source = "enum Color { Red, Green };\nvoid f() {\n    Re$\n}\n";
    assert_eq!(texts(&complete(source)), vec!["Red"]);
}

#[test]
fn test_identifier_completion_does_not_see_sibling_scope() {
    let source = "void f() {\n    { int hidden; }\n    { hi$ }\n}\n";
    assert!(complete(source).is_empty());
}

#[test]
fn test_object_of_member_access_completes_as_identifier() {
    let source = format!("{POINT}void f() {{\n    Point pt;\n    int px;\n    pt$.x;\n}}\n");
    assert_eq!(sorted_texts(&complete(&source)), vec!["pt"]);
}

#[test]
fn test_position_outside_any_node_is_empty() {
    assert!(complete("int a;   $").is_empty());
}

#[test]
fn test_column_zero_is_invalid_position() {
    let mut engine = engine(&[("main.c", "int a;\n")]);
    let err = engine
        .get_suggestions("main.c", HostPosition::new(0, 0))
        .expect_err("column zero has no character before the caret");
    assert!(matches!(
        err,
        CompletionError::InvalidPosition { line: 0, column: 0 }
    ));
}

#[test]
fn test_missing_document_yields_no_suggestions() {
    let mut engine = engine(&[]);
    let suggestions = engine
        .get_suggestions("nowhere.c", HostPosition::new(0, 1))
        .expect("missing document is not an error");
    assert!(suggestions.is_empty());
}

#[test]
fn test_repeated_requests_are_identical() {
    let (text, caret) = split_caret("struct P { int a; int b; };\nvoid f() {\n    P p;\n    p.$\n}\n");
    let mut engine = engine(&[("main.c", text.as_str())]);

    let first = engine.get_suggestions("main.c", caret).expect("first");
    let second = engine.get_suggestions("main.c", caret).expect("second");
    assert_eq!(first, second);
    assert_eq!(texts(&first), vec!["a", "b"]);
}

#[test]
fn test_edit_of_included_header_is_picked_up() {
    let (text, caret) = split_caret("#include \"point.h\"\nvoid f() {\n    Point p;\n    p.$\n}\n");
    let mut engine = engine(&[("main.c", text.as_str()), ("point.h", "struct Point { int x; };\n")]);
    assert_eq!(
        texts(&engine.get_suggestions("main.c", caret).expect("before edit")),
        vec!["x"]
    );

    engine
        .graph_mut()
        .source_mut()
        .set_text("point.h", "struct Point { int x; int z; };\n");
    engine.on_edit("point.h").expect("header still exists");

    assert_eq!(
        texts(&engine.get_suggestions("main.c", caret).expect("after edit")),
        vec!["x", "z"]
    );
}

#[test]
fn test_classify_member_expression_after_operator() {
    let (text, caret) = split_caret(&format!("{POINT}void f() {{\n    Point p;\n    p.$\n}}\n"));
    let document = Document::parse("/project/main.c", text);
    let position = caret.to_internal().expect("caret is past column zero");

    match classify(&document, position) {
        Some(CompletionTarget::Property { partial, .. }) => assert!(partial.is_empty()),
        other => panic!("expected property completion, got {other:?}"),
    }
}

#[test]
fn test_classify_property_identifier_carries_prefix() {
    let (text, caret) = split_caret("void f() {\n    p.ab$\n}\n");
    let document = Document::parse("/project/main.c", text);
    let position = caret.to_internal().expect("caret is past column zero");

    match classify(&document, position) {
        Some(CompletionTarget::Property { partial, .. }) => assert_eq!(partial, "ab"),
        other => panic!("expected property completion, got {other:?}"),
    }
}

#[test]
fn test_classify_literal_is_not_completable() {
    let (text, caret) = split_caret("void f() {\n    int a = 42$;\n}\n");
    let document = Document::parse("/project/main.c", text);
    let position = caret.to_internal().expect("caret is past column zero");

    assert_eq!(classify(&document, position), None);
}

#[test]
fn test_suggest_properties_rejects_non_member_node() {
    let mut engine = engine(&[("main.c", "int a;\n")]);
    let key = engine.graph_mut().ensure("main.c").expect("document loads");
    let graph = engine.graph();
    let document = graph.document(&key).expect("loaded");

    let err = suggest_properties(graph, document, document.root(), "")
        .expect_err("translation unit is not a member expression");
    assert!(matches!(err, InternalError::BrokenTree(_)));
}

#[test]
fn test_shadowed_variable_offered_once() {
    let suggestions = complete("int a;\nvoid f() {\n    int a;\n    a$\n}\n");
    assert_eq!(texts(&suggestions), vec!["a"]);
    assert_eq!(suggestions[0].partial_input_length, 1);
}

#[test]
fn test_edit_removing_declaration_drops_suggestion() {
    let (before, caret) = split_caret("void f() {\n    int total;\n    int tally;\n    ta$\n}\n");
    let (after, _) = split_caret("void f() {\n    int tally;\n    \n    ta$\n}\n");
    let mut engine = engine(&[("main.c", before.as_str())]);
    assert_eq!(
        sorted_texts(&engine.get_suggestions("main.c", caret).expect("before edit")),
        vec!["tally", "total"]
    );

    engine.graph_mut().source_mut().set_text("main.c", after);
    engine.on_edit("main.c").expect("document still exists");

    assert_eq!(
        texts(&engine.get_suggestions("main.c", caret).expect("after edit")),
        vec!["tally"]
    );
}
