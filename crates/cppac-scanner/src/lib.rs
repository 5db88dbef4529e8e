//! C/C++ scanner and include preprocessor for the cppac completion engine.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer over raw document text
//! - `Preprocessor` - Directive filtering and `#include` discovery

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner;
pub use scanner::{ScannerState, Token, tokenize};

pub mod preprocessor;
pub use preprocessor::{PreprocessedSource, Preprocessor};
