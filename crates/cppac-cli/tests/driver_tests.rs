use super::*;
use cppac_common::HostPosition;
use cppac_lsp::MemoryFileDb;

fn caret(file: &str, line: u32, column: u32) -> CaretLocation {
    CaretLocation::new(file, line, column)
}

fn parse_args(argv: &[&str]) -> CliArgs {
    use clap::Parser;
    CliArgs::try_parse_from(argv).expect("valid arguments")
}

#[test]
fn test_complete_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("point.h"), "struct Point { int x; int y; };\n").expect("write");
    std::fs::write(
        dir.path().join("main.c"),
        "#include \"point.h\"\nint main() {\n    Point p;\n    p.\n}\n",
    )
    .expect("write");

    let graph = DocumentGraph::with_defaults(FsDocumentSource::new(dir.path()));
    let suggestions = complete(graph, &caret("main.c", 4, 6)).expect("completes");

    let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["x", "y"]);
}

#[test]
fn test_complete_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let graph = DocumentGraph::with_defaults(FsDocumentSource::new(dir.path()));

    let err = complete(graph, &caret("absent.c", 1, 1)).expect_err("no such file");
    assert!(err.to_string().contains("absent.c"));
}

#[test]
fn test_complete_column_zero_is_error() {
    let mut db = MemoryFileDb::new("/p");
    db.set_text("main.c", "int a;\n");
    let graph = DocumentGraph::with_defaults(db);

    let location = caret("main.c", 1, 0);
    assert_eq!(location.host_position(), HostPosition::new(0, 0));
    assert!(complete(graph, &location).is_err());
}

#[test]
fn test_include_tree_marks_missing_and_cycles() {
    let mut db = MemoryFileDb::new("/p");
    db.set_text("main.c", "#include \"a.h\"\n#include \"gone.h\"\n");
    db.set_text("a.h", "#include \"main.c\"\n");
    let mut graph = DocumentGraph::with_defaults(db);

    let entries = include_tree(&mut graph, "main.c").expect("loads");
    let summary: Vec<(usize, &str, IncludeStatus)> = entries
        .iter()
        .map(|e| (e.depth, e.path.as_str(), e.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "/p/main.c", IncludeStatus::Loaded),
            (1, "/p/a.h", IncludeStatus::Loaded),
            (2, "/p/main.c", IncludeStatus::Cycle),
            (1, "/p/gone.h", IncludeStatus::Missing),
        ]
    );
}

#[test]
fn test_resolve_config_discovers_and_overrides() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("cppac.json"),
        r#"{ "systemIncludeRoot": "/from/file", "maxIncludeDepth": 4 }"#,
    )
    .expect("write");

    let args = parse_args(&["cppac", "dump", "main.c"]);
    let config = resolve_config(&args, dir.path()).expect("valid config");
    assert_eq!(config.system_include_root, "/from/file");
    assert_eq!(config.max_include_depth, 4);

    let args = parse_args(&["cppac", "--include-root", "/flag", "dump", "main.c"]);
    let config = resolve_config(&args, dir.path()).expect("valid config");
    assert_eq!(config.system_include_root, "/flag");
    assert_eq!(config.max_include_depth, 4);
}

#[test]
fn test_resolve_config_reports_bad_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ oops").expect("write");

    let bad_arg = bad.to_string_lossy().into_owned();
    let args = parse_args(&["cppac", "--config", &bad_arg, "dump", "main.c"]);
    assert!(resolve_config(&args, dir.path()).is_err());
}

#[test]
fn test_include_tree_expands_shared_header_once() {
    let mut db = MemoryFileDb::new("/p");
    db.set_text("main.c", "#include \"left.h\"\n#include \"right.h\"\n");
    db.set_text("left.h", "#include \"base.h\"\n");
    db.set_text("right.h", "#include \"base.h\"\n");
    db.set_text("base.h", "#include \"leaf.h\"\n");
    db.set_text("leaf.h", "int leaf;\n");
    let mut graph = DocumentGraph::with_defaults(db);

    let entries = include_tree(&mut graph, "main.c").expect("loads");
    let summary: Vec<(usize, &str, IncludeStatus)> = entries
        .iter()
        .map(|e| (e.depth, e.path.as_str(), e.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "/p/main.c", IncludeStatus::Loaded),
            (1, "/p/left.h", IncludeStatus::Loaded),
            (2, "/p/base.h", IncludeStatus::Loaded),
            (3, "/p/leaf.h", IncludeStatus::Loaded),
            (1, "/p/right.h", IncludeStatus::Loaded),
            (2, "/p/base.h", IncludeStatus::Repeated),
        ]
    );
}

#[test]
fn test_include_tree_linear_in_layered_includes() {
    const LAYERS: usize = 24;
    let header = |layer: usize, side: &str| format!("l{layer}_{side}.h");

    let mut db = MemoryFileDb::new("/p");
    db.set_text(
        "main.c",
        format!("#include \"{}\"\n#include \"{}\"\n", header(0, "a"), header(0, "b")),
    );
    for layer in 0..LAYERS {
        for side in ["a", "b"] {
            let text = if layer + 1 < LAYERS {
                format!(
                    "#include \"{}\"\n#include \"{}\"\n",
                    header(layer + 1, "a"),
                    header(layer + 1, "b")
                )
            } else {
                String::new()
            };
            db.set_text(&header(layer, side), text);
        }
    }
    let mut graph = DocumentGraph::with_defaults(db);

    let entries = include_tree(&mut graph, "main.c").expect("loads");
    let expanded = entries
        .iter()
        .filter(|e| e.status == IncludeStatus::Loaded)
        .count();
    assert_eq!(expanded, 1 + 2 * LAYERS);
    assert!(entries.len() <= 1 + 4 * LAYERS);
}
