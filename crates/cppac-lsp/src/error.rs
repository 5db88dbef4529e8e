//! Error types for the completion engine.
//!
//! Conditions that merely mean "nothing to suggest" (no node under the
//! cursor, unknown type, unknown member) are not errors; they produce an empty
//! suggestion list. What remains is split by who has to react:
//!
//! - `DocumentError`: the document source could not supply a document. Local
//!   to graph population; completion degrades to an empty list.
//! - `InternalError`: the dispatcher and the type inference engine disagree
//!   about which expression shapes are supported. A defect, never a user
//!   condition.
//! - `CompletionError`: what `CompletionEngine::get_suggestions` returns.
//! - `ConfigError`: `cppac.json` could not be read or parsed.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("no data for document {path}")]
    NotFound { path: String },

    #[error("include depth limit of {limit} reached at {path}")]
    DepthExceeded { path: String, limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    #[error("cannot infer the type of a {kind} expression")]
    UnsupportedExpression { kind: &'static str },

    #[error("broken syntax tree: {0}")]
    BrokenTree(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("invalid caret position {line}:{column}: the caret column must be at least 1")]
    InvalidPosition { line: u32, column: u32 },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
