//! Document sources: where document text comes from.
//!
//! The document graph only ever talks to a `DocumentSource`. Paths handed
//! out by `to_absolute_path` are the graph's keys, so both implementations
//! normalize lexically: `a/./b/../c.h` and `a/c.h` name the same document,
//! which is what lets include cycles be detected.

use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::trace;

pub trait DocumentSource {
    /// Canonical absolute form of `path`.
    fn to_absolute_path(&self, path: &str) -> String;

    /// Text of the document at a canonical path, if available.
    fn get(&self, path: &str) -> Option<String>;
}

/// Join `path` onto `root` (unless already absolute) and fold `.` and `..`
/// components without touching the file system.
pub fn normalize_path(root: &Path, path: &str) -> String {
    let joined = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        root.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out.to_string_lossy().into_owned()
}

/// In-memory document store, used by hosts that own the buffer contents and
/// by tests.
#[derive(Debug, Default)]
pub struct MemoryFileDb {
    root: PathBuf,
    files: FxHashMap<String, String>,
}

impl MemoryFileDb {
    /// A store that resolves relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MemoryFileDb {
            root: root.into(),
            files: FxHashMap::default(),
        }
    }

    /// Set (or replace) the text served for `path`. Returns the canonical
    /// path it is stored under.
    pub fn set_text(&mut self, path: &str, text: impl Into<String>) -> String {
        let key = self.to_absolute_path(path);
        trace!(path = %key, "set document text");
        self.files.insert(key.clone(), text.into());
        key
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        let key = self.to_absolute_path(path);
        self.files.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DocumentSource for MemoryFileDb {
    fn to_absolute_path(&self, path: &str) -> String {
        normalize_path(&self.root, path)
    }

    fn get(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }
}

/// Reads documents from disk, resolving relative paths against a project
/// root.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsDocumentSource { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for FsDocumentSource {
    fn to_absolute_path(&self, path: &str) -> String {
        normalize_path(&self.root, path)
    }

    fn get(&self, path: &str) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                trace!(path, error = %err, "document not readable");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/file_db_tests.rs"]
mod file_db_tests;
