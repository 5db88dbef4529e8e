use super::*;
use crate::document_graph::DocumentGraph;
use crate::file_db::MemoryFileDb;

fn graph_with(source: &str) -> (DocumentGraph<MemoryFileDb>, String) {
    let mut db = MemoryFileDb::new("/project");
    db.set_text("main.c", source);
    let mut graph = DocumentGraph::with_defaults(db);
    let key = graph.ensure("main.c").expect("document loads");
    (graph, key)
}

/// The first node of the document for which `pred` holds.
fn find_node(document: &Document, pred: impl Fn(&NodeKind) -> bool) -> NodeIndex {
    let arena = document.arena();
    (0..arena.len() as u32)
        .map(NodeIndex)
        .find(|&idx| arena.kind(idx).is_some_and(&pred))
        .expect("node exists")
}

fn identifier_named(document: &Document, name: &str) -> NodeIndex {
    find_node(document, |kind| {
        matches!(kind, NodeKind::Identifier(id) if id.name == name)
    })
}

const SOURCE: &str = "struct Inner { int depth; };\n\
                      struct Outer { Inner inner; };\n\
                      void f() {\n    Outer o;\n    o.inner.depth;\n    ghost;\n    make().inner;\n    1;\n}\n";

#[test]
fn test_type_of_declared_variable() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let o = identifier_named(document, "o");

    assert_eq!(
        type_of(&graph, document, o).expect("supported"),
        Some("Outer".to_string())
    );
}

#[test]
fn test_type_of_member_chain() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let inner = identifier_named(document, "inner");
    let depth = identifier_named(document, "depth");

    assert_eq!(
        type_of(&graph, document, inner).expect("supported"),
        Some("Inner".to_string())
    );
    assert_eq!(
        type_of(&graph, document, depth).expect("supported"),
        Some("int".to_string())
    );

    let member = document.arena().parent(depth);
    assert_eq!(
        type_of(&graph, document, member).expect("supported"),
        Some("int".to_string())
    );
}

#[test]
fn test_type_of_undeclared_variable_is_unknown() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let ghost = identifier_named(document, "ghost");

    assert_eq!(type_of(&graph, document, ghost).expect("supported"), None);
}

#[test]
fn test_type_of_literal_is_unsupported() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let literal = find_node(document, |kind| matches!(kind, NodeKind::Literal(_)));

    let err = type_of(&graph, document, literal).expect_err("literals are not inferred");
    assert!(matches!(
        err,
        InternalError::UnsupportedExpression { kind } if kind == "Literal"
    ));
}

#[test]
fn test_type_of_missing_node_is_broken_tree() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");

    let err = type_of(&graph, document, NodeIndex(u32::MAX - 1)).expect_err("no such node");
    assert!(matches!(err, InternalError::BrokenTree(_)));
}

#[test]
fn test_is_property() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let arena = document.arena();

    assert!(!is_property(arena, identifier_named(document, "o")));
    assert!(is_property(arena, identifier_named(document, "inner")));
    assert!(is_property(arena, identifier_named(document, "depth")));
    assert!(!is_property(arena, identifier_named(document, "ghost")));
}

#[test]
fn test_is_inferable_walks_whole_chain() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let arena = document.arena();

    let chain = arena.parent(identifier_named(document, "depth"));
    assert!(is_inferable(arena, chain));

    let call = find_node(document, |kind| matches!(kind, NodeKind::CallExpression(_)));
    assert!(!is_inferable(arena, call));
    let on_call = arena.parent(call);
    assert!(arena.get_member_expression(on_call).is_some());
    assert!(!is_inferable(arena, on_call));
}

#[test]
fn test_inference_aggregates_declarations_once_per_request() {
    let (graph, key) = graph_with(SOURCE);
    let document = graph.document(&key).expect("loaded");
    let inference = TypeInference::new(&graph, document);

    let o = identifier_named(document, "o");
    assert_eq!(inference.type_of(o).expect("supported"), Some("Outer".to_string()));
    assert!(inference.declarations.get().is_none());

    let depth = identifier_named(document, "depth");
    assert_eq!(inference.type_of(depth).expect("supported"), Some("int".to_string()));
    let aggregated = inference.declarations.get().map(Vec::as_ptr);
    assert!(aggregated.is_some());

    let members: Vec<String> = inference
        .properties_of("Outer")
        .into_iter()
        .map(|property| property.name)
        .collect();
    assert_eq!(members, vec!["inner"]);
    assert_eq!(inference.declarations.get().map(Vec::as_ptr), aggregated);
}
