use super::*;
use cppac_lsp::CompletionKind;

fn suggestion(text: &str, partial_input_length: usize) -> Suggestion {
    Suggestion {
        text: text.to_string(),
        partial_input_length,
        kind: CompletionKind::Identifier,
    }
}

#[test]
fn test_render_suggestions_plain() {
    let reporter = Reporter::new(false);
    let out = reporter.render_suggestions(&[suggestion("alpha", 2), suggestion("albeit", 2)]);
    assert_eq!(out, "alpha\nalbeit\n");
}

#[test]
fn test_render_no_suggestions() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.render_suggestions(&[]), "no suggestions");
}

#[test]
fn test_render_suggestion_with_partial_longer_than_text() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.render_suggestions(&[suggestion("x", 4)]), "x\n");
}

#[test]
fn test_render_include_tree_plain() {
    let reporter = Reporter::new(false);
    let entries = [
        IncludeEntry {
            depth: 0,
            path: "/p/main.c".to_string(),
            status: IncludeStatus::Loaded,
        },
        IncludeEntry {
            depth: 1,
            path: "/p/a.h".to_string(),
            status: IncludeStatus::Loaded,
        },
        IncludeEntry {
            depth: 2,
            path: "/p/main.c".to_string(),
            status: IncludeStatus::Cycle,
        },
        IncludeEntry {
            depth: 1,
            path: "/p/gone.h".to_string(),
            status: IncludeStatus::Missing,
        },
    ];

    assert_eq!(
        reporter.render_include_tree(&entries),
        "/p/main.c\n  /p/a.h\n    /p/main.c (cycle)\n  /p/gone.h (not found)\n"
    );
}

#[test]
fn test_render_repeated_include() {
    let reporter = Reporter::new(false);
    let entries = [IncludeEntry {
        depth: 1,
        path: "/p/base.h".to_string(),
        status: IncludeStatus::Repeated,
    }];
    assert_eq!(reporter.render_include_tree(&entries), "  /p/base.h (see above)
");
}
