use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, info};

use cppac_common::limits::MAX_INCLUDE_DEPTH;
use cppac_lsp::{
    CompletionEngine, DocumentGraph, DocumentSource, EngineConfig, FsDocumentSource, Suggestion,
};

use crate::args::{CaretLocation, CliArgs, Command};
use crate::reporter::{IncludeEntry, IncludeStatus, Reporter};

pub fn run(args: CliArgs) -> Result<()> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("failed to determine the current directory")?,
    };
    let config = resolve_config(&args, &root)?;
    debug!(root = %root.display(), ?config, "starting");

    let mut graph = DocumentGraph::new(FsDocumentSource::new(&root), &config);
    let reporter = Reporter::new(args.color.enabled());

    match args.command {
        Command::Complete {
            file,
            line,
            column,
            json,
        } => {
            let location = CaretLocation::new(file, line, column);
            let suggestions = complete(graph, &location)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print!("{}", reporter.render_suggestions(&suggestions));
            }
        }
        Command::Dump { file } => {
            let document = graph
                .get_or_create(&file)
                .with_context(|| format!("failed to load {file}"))?;
            print!("{}", document.arena().dump(document.root()));
            for directive in document.include_directives() {
                println!("#include {directive}");
            }
        }
        Command::Includes { file, json } => {
            let entries = include_tree(&mut graph, &file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", reporter.render_include_tree(&entries));
            }
        }
    }

    Ok(())
}

/// The config file named on the command line, else `cppac.json` in the root,
/// else defaults; then command-line overrides.
pub fn resolve_config(args: &CliArgs, root: &Path) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::discover(root)?,
    };
    if let Some(system_root) = &args.include_root {
        config.system_include_root = system_root.clone();
    }
    Ok(config)
}

pub fn complete<S: DocumentSource>(
    graph: DocumentGraph<S>,
    location: &CaretLocation,
) -> Result<Vec<Suggestion>> {
    let mut engine = CompletionEngine::new(graph);
    engine
        .graph_mut()
        .ensure(&location.file)
        .with_context(|| format!("failed to load {}", location.file))?;

    let suggestions = engine
        .get_suggestions(&location.file, location.host_position())
        .with_context(|| format!("completion failed at {location}"))?;
    info!(count = suggestions.len(), %location, "completed");
    Ok(suggestions)
}

/// Depth-first include tree of `file`, in directive order. A document's own
/// includes are listed under its first occurrence only.
pub fn include_tree<S: DocumentSource>(
    graph: &mut DocumentGraph<S>,
    file: &str,
) -> Result<Vec<IncludeEntry>> {
    let key = graph
        .ensure(file)
        .with_context(|| format!("failed to load {file}"))?;

    let mut entries = vec![IncludeEntry {
        depth: 0,
        path: key.clone(),
        status: IncludeStatus::Loaded,
    }];
    let mut walk = TreeWalk {
        path: vec![key.clone()],
        expanded: FxHashSet::default(),
    };
    walk.expanded.insert(key.clone());
    walk_includes(graph, &key, &mut walk, &mut entries);
    Ok(entries)
}

struct TreeWalk {
    path: Vec<String>,
    expanded: FxHashSet<String>,
}

fn walk_includes<S: DocumentSource>(
    graph: &DocumentGraph<S>,
    file: &str,
    walk: &mut TreeWalk,
    entries: &mut Vec<IncludeEntry>,
) {
    if walk.path.len() > MAX_INCLUDE_DEPTH {
        return;
    }
    for include in graph.includes_of(file) {
        let status = if walk.path.contains(include) {
            IncludeStatus::Cycle
        } else if !graph.contains(include) {
            IncludeStatus::Missing
        } else if walk.expanded.contains(include) {
            IncludeStatus::Repeated
        } else {
            IncludeStatus::Loaded
        };
        entries.push(IncludeEntry {
            depth: walk.path.len(),
            path: include.clone(),
            status,
        });
        if status == IncludeStatus::Loaded {
            walk.expanded.insert(include.clone());
            walk.path.push(include.clone());
            walk_includes(graph, include, walk, entries);
            walk.path.pop();
        }
    }
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
