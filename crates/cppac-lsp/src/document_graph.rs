//! Document graph: parsed documents keyed by canonical path, plus the include
//! relation between them.
//!
//! Requesting a document parses it and, depth-first in directive order, every
//! document it transitively includes. A document is inserted before its
//! includes are followed, so a cycle stops at the first path that is already
//! present. Includes that cannot be loaded are logged and recorded as
//! unresolvable; they never fail the requesting document.

use cppac_common::limits::MAX_INCLUDE_DEPTH;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::DocumentError;
use crate::file_db::DocumentSource;
use crate::include_graph::IncludeGraph;
use crate::include_path::IncludeResolver;

pub struct DocumentGraph<S: DocumentSource> {
    source: S,
    resolver: IncludeResolver,
    max_include_depth: usize,
    /// Parsed documents in the order they were first loaded.
    documents: IndexMap<String, Document>,
    includes: IncludeGraph,
    /// Paths an include pointed at but the source could not supply.
    unresolvable: FxHashSet<String>,
}

impl<S: DocumentSource> DocumentGraph<S> {
    pub fn new(source: S, config: &EngineConfig) -> Self {
        DocumentGraph {
            source,
            resolver: IncludeResolver::new(config.system_include_root.clone()),
            max_include_depth: config.max_include_depth.min(MAX_INCLUDE_DEPTH),
            documents: IndexMap::new(),
            includes: IncludeGraph::new(),
            unresolvable: FxHashSet::default(),
        }
    }

    pub fn with_defaults(source: S) -> Self {
        Self::new(source, &EngineConfig::default())
    }

    /// Make sure the document at `path` and everything it includes is loaded.
    /// Returns the canonical path the document is stored under.
    pub fn ensure(&mut self, path: &str) -> Result<String, DocumentError> {
        let key = self.source.to_absolute_path(path);
        if !self.documents.contains_key(&key) {
            self.populate(&key, 0)?;
        }
        Ok(key)
    }

    /// The document at `path`, parsing it (and its includes) on first use.
    pub fn get_or_create(&mut self, path: &str) -> Result<&Document, DocumentError> {
        let key = self.ensure(path)?;
        self.documents
            .get(&key)
            .ok_or(DocumentError::NotFound { path: key })
    }

    /// Rebuild the document at `path` from the source's current text and
    /// rediscover its includes. Includes already in the graph are not
    /// re-parsed. When the source no longer has the document, it is dropped
    /// from the graph.
    pub fn on_edit(&mut self, path: &str) -> Result<(), DocumentError> {
        let key = self.source.to_absolute_path(path);
        debug!(path = %key, "rebuilding document");
        let result = self.populate(&key, 0);
        if result.is_err() {
            self.documents.shift_remove(&key);
            self.includes.update_file(&key, &[]);
        }
        result
    }

    pub fn on_open(&mut self, path: &str) -> Result<(), DocumentError> {
        self.on_edit(path)
    }

    fn populate(&mut self, key: &str, depth: usize) -> Result<(), DocumentError> {
        if depth > self.max_include_depth {
            return Err(DocumentError::DepthExceeded {
                path: key.to_string(),
                limit: self.max_include_depth,
            });
        }

        let Some(text) = self.source.get(key) else {
            self.unresolvable.insert(key.to_string());
            return Err(DocumentError::NotFound {
                path: key.to_string(),
            });
        };
        self.unresolvable.remove(key);

        let document = Document::parse(key, text);
        debug!(
            path = key,
            nodes = document.arena().len(),
            includes = document.include_directives().len(),
            "parsed document"
        );
        let directives = document.include_directives().to_vec();
        self.documents.insert(key.to_string(), document);

        let mut targets = Vec::with_capacity(directives.len());
        for directive in &directives {
            match self.resolver.resolve(directive) {
                Some(target) => targets.push(self.source.to_absolute_path(&target)),
                None => warn!(document = key, include = %directive, "malformed include directive"),
            }
        }
        self.includes.update_file(key, &targets);

        for target in targets {
            if self.documents.contains_key(&target) {
                continue;
            }
            if let Err(err) = self.populate(&target, depth + 1) {
                warn!(document = key, include = %target, error = %err, "skipping include");
            }
        }

        Ok(())
    }

    /// The loaded document at `path`, if any. Never parses.
    pub fn document(&self, path: &str) -> Option<&Document> {
        self.documents.get(&self.source.to_absolute_path(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents
            .contains_key(&self.source.to_absolute_path(path))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Canonical paths of loaded documents, in load order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Canonical paths `path` includes directly, in directive order,
    /// including ones that could not be loaded.
    pub fn includes_of(&self, path: &str) -> &[String] {
        self.includes
            .includes_of(&self.source.to_absolute_path(path))
    }

    /// Documents that include `path` directly.
    pub fn includers_of(&self, path: &str) -> Vec<String> {
        self.includes
            .includers_of(&self.source.to_absolute_path(path))
    }

    /// Documents whose completions may change when `path` changes.
    pub fn affected_by(&self, path: &str) -> Vec<String> {
        self.includes
            .affected_by(&self.source.to_absolute_path(path))
    }

    /// Whether an include pointed at `path` and the source could not supply it.
    pub fn is_unresolvable(&self, path: &str) -> bool {
        self.unresolvable
            .contains(&self.source.to_absolute_path(path))
    }

    pub fn resolver(&self) -> &IncludeResolver {
        &self.resolver
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the document source, so a host can change the text
    /// it serves before calling `on_edit`.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
#[path = "../tests/document_graph_tests.rs"]
mod document_graph_tests;
