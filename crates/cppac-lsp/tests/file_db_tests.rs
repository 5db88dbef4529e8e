use super::*;

#[test]
fn test_normalize_relative_path() {
    let root = Path::new("/project");
    assert_eq!(normalize_path(root, "main.c"), "/project/main.c");
    assert_eq!(normalize_path(root, "./sub/../a.h"), "/project/a.h");
    assert_eq!(normalize_path(root, "sub/./b.h"), "/project/sub/b.h");
}

#[test]
fn test_normalize_absolute_path_ignores_root() {
    let root = Path::new("/project");
    assert_eq!(normalize_path(root, "/usr/include/stdio.h"), "/usr/include/stdio.h");
    assert_eq!(normalize_path(root, "/usr/include/../lib/x.h"), "/usr/lib/x.h");
}

#[test]
fn test_normalize_does_not_climb_above_root() {
    let root = Path::new("/");
    assert_eq!(normalize_path(root, "../../etc/x.h"), "/etc/x.h");
}

#[test]
fn test_memory_db_stores_by_canonical_path() {
    let mut db = MemoryFileDb::new("/project");
    assert!(db.is_empty());

    let key = db.set_text("./src/main.c", "int x;");
    assert_eq!(key, "/project/src/main.c");
    assert_eq!(db.len(), 1);
    assert_eq!(db.get(&key).as_deref(), Some("int x;"));
    assert_eq!(db.to_absolute_path("src/main.c"), key);

    db.set_text("src/main.c", "int y;");
    assert_eq!(db.len(), 1);
    assert_eq!(db.get(&key).as_deref(), Some("int y;"));

    assert_eq!(db.remove("src/main.c").as_deref(), Some("int y;"));
    assert!(db.get(&key).is_none());
}

#[test]
fn test_fs_source_reads_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("point.h"), "struct Point { int x; };\n").expect("write");

    let source = FsDocumentSource::new(dir.path());
    assert_eq!(source.root(), dir.path());

    let key = source.to_absolute_path("point.h");
    assert_eq!(source.get(&key).as_deref(), Some("struct Point { int x; };\n"));
    assert!(source.get(&source.to_absolute_path("missing.h")).is_none());
}
