//! Semantic completion engine for C/C++ documents.
//!
//! This crate provides:
//! - `DocumentGraph` - Parsed documents and the include relation between them
//! - `CompletionEngine` - Identifier and member completion at a caret position
//! - Scope resolution, type inference and the cross-file property catalog
//!   that completion is built from
//! - `DocumentSource` implementations (in-memory and file system)
//! - `EngineConfig` - `cppac.json` configuration

pub mod error;
pub use error::{CompletionError, ConfigError, DocumentError, InternalError};

pub mod config;
pub use config::EngineConfig;

pub mod file_db;
pub use file_db::{DocumentSource, FsDocumentSource, MemoryFileDb};

pub mod include_path;
pub use include_path::IncludeResolver;

pub mod include_graph;
pub use include_graph::IncludeGraph;

pub mod document;
pub use document::Document;

pub mod document_graph;
pub use document_graph::DocumentGraph;

pub mod position_resolver;

pub mod scope;

pub mod declarations;
pub use declarations::{DeclRef, PropertyInfo};

pub mod type_inference;
pub use type_inference::TypeInference;

pub mod completions;
pub use completions::{CompletionEngine, CompletionKind, CompletionTarget, Suggestion};
